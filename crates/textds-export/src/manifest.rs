use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use textds_core::{Result, SplitCounts};

use crate::jsonl::write_json_pretty;

/// Machine-readable description of one build's output.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub created_utc: String,
    pub license: String,
    /// Field name to human description, one entry per record field
    pub schema: BTreeMap<String, String>,
    /// Split name to file name within the output directory
    pub files: BTreeMap<String, String>,
    pub counts: SplitCounts,
    /// Drop reason to document count
    pub drops: BTreeMap<String, usize>,
    /// Files that could not be read or were denylisted
    pub skips: usize,
    /// Redaction category to total match count across the run
    pub redactions: BTreeMap<String, usize>,
    /// The exact parameters the build ran with
    pub build: serde_json::Value,
}

impl Manifest {
    pub fn new(name: &str, license: &str) -> Result<Self> {
        let created_utc = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|e| anyhow::anyhow!("timestamp formatting failed: {e}"))?;

        Ok(Self {
            name: name.to_string(),
            version: "1.0.0".to_string(),
            created_utc,
            license: license.to_string(),
            schema: record_schema(),
            files: BTreeMap::new(),
            counts: SplitCounts::default(),
            drops: BTreeMap::new(),
            skips: 0,
            redactions: BTreeMap::new(),
            build: serde_json::Value::Null,
        })
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        write_json_pretty(path, self)
    }
}

fn record_schema() -> BTreeMap<String, String> {
    [
        ("id", "SHA-1 hex of the source document hash and chunk index"),
        ("source_path", "path the text was ingested from"),
        ("title", "file stem, with a part suffix for multi-chunk documents"),
        ("text", "normalized, redacted chunk text"),
        ("tokens_est", "whitespace-delimited word count"),
        ("hash", "SHA-1 hex of the chunk text"),
        ("tags", "labels passed at build time"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
