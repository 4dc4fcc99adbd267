use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use textds_core::{Document, Error, Result};

use crate::denylist::Denylist;

/// What a directory scan found, with exclusions counted for reporting.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Eligible input files, sorted so downstream record ids are stable
    pub files: Vec<PathBuf>,
    /// Files excluded by the denylist
    pub denied: usize,
    /// Directory entries the walk could not read
    pub walk_errors: usize,
}

/// Collect candidate input files under `root`.
///
/// Extensions are compared case-insensitively and without the dot.
/// Denied files and unreadable entries are logged, counted in the
/// outcome, and never silently lost.
pub fn scan_dir(
    root: &Path,
    extensions: &[String],
    recursive: bool,
    denylist: &Denylist,
) -> Result<ScanOutcome> {
    if !root.is_dir() {
        return Err(Error::NoInputFiles(root.display().to_string()));
    }

    let wanted: Vec<String> = extensions
        .iter()
        .map(|e| e.trim_start_matches('.').to_lowercase())
        .collect();

    let mut outcome = ScanOutcome::default();
    let max_depth = if recursive { usize::MAX } else { 1 };

    for entry in WalkDir::new(root).max_depth(max_depth).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                outcome.walk_errors += 1;
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }

        let matches_ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| wanted.iter().any(|w| w == &e.to_lowercase()))
            .unwrap_or(false);
        if !matches_ext {
            continue;
        }

        if let Some(pattern) = denylist.deny_reason(path) {
            warn!("Skipping denied file {} (pattern {})", path.display(), pattern);
            outcome.denied += 1;
            continue;
        }

        outcome.files.push(path.to_path_buf());
    }

    outcome.files.sort();

    if outcome.files.is_empty() {
        return Err(Error::NoInputFiles(root.display().to_string()));
    }

    debug!(
        "Found {} input files under {} ({} denied)",
        outcome.files.len(),
        root.display(),
        outcome.denied
    );
    Ok(outcome)
}

/// Read one input file into a [`Document`].
///
/// Invalid UTF-8 sequences are dropped, so a stray byte in one file
/// never aborts the whole build and never leaks replacement characters
/// into the exported text.
pub async fn read_document(path: &Path) -> anyhow::Result<Document> {
    let bytes = tokio::fs::read(path).await?;
    let raw = match String::from_utf8_lossy(&bytes) {
        std::borrow::Cow::Borrowed(valid) => valid.to_string(),
        std::borrow::Cow::Owned(replaced) => replaced.replace('\u{FFFD}', ""),
    };
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "untitled".to_string());

    Ok(Document {
        source_path: path.display().to_string(),
        stem,
        raw,
    })
}
