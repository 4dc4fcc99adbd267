use anyhow::Result;

use textds_config::Config;
use textds_engine::{BuildOptions, Builder};

use crate::cli::BuildArgs;

pub async fn handle(args: BuildArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let builder = Builder::new(&config);

    let options = BuildOptions {
        input_dir: args.input,
        output_dir: args.output,
        name: args.name,
        license: args.license,
        extensions: split_list(&args.ext),
        recursive: args.recursive,
        chunk_chars: args.chunk_chars,
        split: args.split,
        tags: args.tags.as_deref().map(split_list).unwrap_or_default(),
        keep_urls: args.keep_urls,
        seed: args.seed,
    };

    let report = builder.build(&options).await?;

    println!("✓ Wrote dataset to {}", report.output_dir.display());
    println!(
        "  Rows: train {} / val {} / test {}",
        report.counts.train, report.counts.val, report.counts.test
    );
    println!(
        "  Dropped: {} empty, {} duplicate",
        report.drops["empty"], report.drops["duplicate"]
    );
    if report.skips > 0 {
        println!("  Skipped files: {}", report.skips);
    }
    let total_redactions: usize = report.redactions.values().sum();
    println!(
        "  Redactions: {} matches, {} pseudonyms assigned",
        total_redactions, report.pseudonyms
    );

    Ok(())
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
