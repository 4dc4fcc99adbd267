use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "textds")]
#[command(about = "Build redacted JSONL text datasets from plain files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a train/val/test dataset from a directory of text files
    Build(BuildArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Input directory
    #[arg(long = "in")]
    pub input: PathBuf,

    /// Output directory
    #[arg(long = "out")]
    pub output: PathBuf,

    /// Dataset name, recorded in the manifest and card
    #[arg(long)]
    pub name: String,

    /// License string recorded in the manifest
    #[arg(long, default_value = "UNLICENSED")]
    pub license: String,

    /// Comma-separated file extensions to ingest
    #[arg(long, default_value = "txt,md")]
    pub ext: String,

    /// Recurse into subdirectories
    #[arg(long)]
    pub recursive: bool,

    /// Chunk character budget (0 disables chunking)
    #[arg(long, default_value = "1200")]
    pub chunk_chars: i64,

    /// Train,val,test percentages, must sum to 100
    #[arg(long, default_value = "90,5,5")]
    pub split: String,

    /// Comma-separated tags applied to every record
    #[arg(long)]
    pub tags: Option<String>,

    /// Leave URLs in place instead of replacing them
    #[arg(long)]
    pub keep_urls: bool,

    /// Shuffle seed for the train/val/test partition
    #[arg(long, default_value = "17")]
    pub seed: u64,

    /// Path to a TOML config with redaction lists and denylist patterns
    #[arg(long)]
    pub config: Option<PathBuf>,
}
