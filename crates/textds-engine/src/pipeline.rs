use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use textds_config::Config;
use textds_core::{sha1_hex, DropReason, Error, Record, Result, SplitCounts};
use textds_export::{write_card, write_checksum, write_json_pretty, write_jsonl, Manifest, TokenStats};
use textds_normalize::normalize;
use textds_redact::{PseudonymTable, RedactOptions, Redactor, CATEGORIES};
use textds_sources::{read_document, scan_dir, Denylist};
use textds_tokens::TokenEstimator;

use crate::chunker::chunk_text;
use crate::partition::{partition, SplitSpec};

/// Everything one build run needs, recorded verbatim in the manifest.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub name: String,
    pub license: String,
    pub extensions: Vec<String>,
    pub recursive: bool,
    /// Chunk character budget; zero or negative disables chunking
    pub chunk_chars: i64,
    /// "train,val,test" percentages summing to 100
    pub split: String,
    pub tags: Vec<String>,
    pub keep_urls: bool,
    pub seed: u64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("dataset"),
            name: "dataset".to_string(),
            license: "UNLICENSED".to_string(),
            extensions: vec!["txt".to_string(), "md".to_string()],
            recursive: false,
            chunk_chars: 1200,
            split: "90,5,5".to_string(),
            tags: Vec::new(),
            keep_urls: false,
            seed: 17,
        }
    }
}

/// Summary returned to the caller after a successful build.
#[derive(Debug)]
pub struct BuildReport {
    pub counts: SplitCounts,
    pub drops: BTreeMap<String, usize>,
    pub skips: usize,
    pub redactions: BTreeMap<String, usize>,
    pub pseudonyms: usize,
    pub output_dir: PathBuf,
}

/// One-shot dataset builder.
pub struct Builder {
    redactor: Redactor,
    denylist: Denylist,
}

impl Builder {
    pub fn new(config: &Config) -> Self {
        let redactor = Redactor::new(
            &config.redaction.names,
            &config.redaction.locations,
            &config.redaction.relations,
        );
        let denylist = Denylist::new(config.denylist.patterns.clone());
        Self { redactor, denylist }
    }

    /// Run the full pipeline and write every artifact.
    ///
    /// Fails fast on a bad split spec, an empty input directory, or zero
    /// surviving records. Unreadable files are logged and skipped.
    pub async fn build(&self, options: &BuildOptions) -> Result<BuildReport> {
        let spec = SplitSpec::parse(&options.split)?;

        let scan = scan_dir(
            &options.input_dir,
            &options.extensions,
            options.recursive,
            &self.denylist,
        )?;
        let files = scan.files;
        info!("Processing {} files from {}", files.len(), options.input_dir.display());

        let estimator = TokenEstimator::new();
        let redact_options = RedactOptions {
            keep_urls: options.keep_urls,
        };

        let mut table = PseudonymTable::new();
        let mut seen_hashes: HashSet<String> = HashSet::new();
        let mut records: Vec<Record> = Vec::new();
        let mut redactions: BTreeMap<String, usize> =
            CATEGORIES.iter().map(|c| ((*c).to_string(), 0)).collect();
        let mut drops: BTreeMap<String, usize> =
            [DropReason::Empty, DropReason::Duplicate]
                .iter()
                .map(|r| (r.as_str().to_string(), 0))
                .collect();
        let mut skips = scan.denied + scan.walk_errors;

        for path in &files {
            let document = match read_document(path).await {
                Ok(doc) => doc,
                Err(e) => {
                    warn!("Skipping unreadable file {}: {}", path.display(), e);
                    skips += 1;
                    continue;
                }
            };

            let text = normalize(&document.raw);
            if text.is_empty() {
                drop_one(&mut drops, DropReason::Empty);
                continue;
            }

            let (redacted, counts) = self.redactor.redact(&text, &redact_options, &mut table);
            for (category, count) in counts {
                *redactions.entry(category).or_insert(0) += count;
            }

            let doc_hash = sha1_hex(&redacted);
            if !seen_hashes.insert(doc_hash.clone()) {
                drop_one(&mut drops, DropReason::Duplicate);
                continue;
            }

            let chunks = chunk_text(&redacted, options.chunk_chars);
            let parts = chunks.len();
            for (idx, chunk) in chunks.into_iter().enumerate() {
                let title = if parts > 1 {
                    format!("{} [part {}/{}]", document.stem, idx + 1, parts)
                } else {
                    document.stem.clone()
                };
                records.push(Record {
                    id: sha1_hex(&format!("{}:{}", doc_hash, idx)),
                    source_path: document.source_path.clone(),
                    title,
                    tokens_est: estimator.estimate(&chunk),
                    hash: sha1_hex(&chunk),
                    text: chunk,
                    tags: options.tags.clone(),
                });
            }
        }

        if records.is_empty() {
            return Err(Error::NoRecords);
        }
        for record in &records {
            record.validate()?;
        }
        info!("{} records from {} files", records.len(), files.len());

        let (train, val, test) = partition(records, &spec, options.seed);
        let counts = SplitCounts {
            train: train.len(),
            val: val.len(),
            test: test.len(),
        };

        let processed = options.output_dir.join("processed");
        fs::create_dir_all(&processed)?;

        let mut manifest = Manifest::new(&options.name, &options.license)?;
        for (split, records) in [("train", &train), ("val", &val), ("test", &test)] {
            let file_name = format!("{split}.jsonl");
            let path = processed.join(&file_name);
            write_jsonl(&path, records)?;
            write_checksum(&path)?;
            manifest.files.insert(split.to_string(), file_name);
        }

        let stats = TokenStats::from_records(train.iter().chain(&val).chain(&test));
        manifest.counts = counts.clone();
        manifest.drops = drops.clone();
        manifest.skips = skips;
        manifest.redactions = redactions.clone();
        manifest.build = serde_json::to_value(options)?;

        manifest.write(&options.output_dir.join("manifest.json"))?;
        write_json_pretty(&options.output_dir.join("stats.json"), &stats)?;
        write_json_pretty(&options.output_dir.join("pseudonyms.json"), &table)?;
        write_card(&options.output_dir.join("DATASET_CARD.md"), &manifest, &stats)?;

        info!(
            "Wrote dataset to {} (train {} / val {} / test {})",
            options.output_dir.display(),
            counts.train,
            counts.val,
            counts.test
        );

        Ok(BuildReport {
            counts,
            drops,
            skips,
            redactions,
            pseudonyms: table.len(),
            output_dir: options.output_dir.clone(),
        })
    }
}

fn drop_one(drops: &mut BTreeMap<String, usize>, reason: DropReason) {
    *drops.entry(reason.as_str().to_string()).or_insert(0) += 1;
}
