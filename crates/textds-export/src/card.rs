use std::fmt::Write as _;
use std::path::Path;

use textds_core::Result;

use crate::jsonl::write_atomic;
use crate::manifest::Manifest;
use crate::stats::TokenStats;

/// Render and write the human-readable `DATASET_CARD.md`.
pub fn write_card(path: &Path, manifest: &Manifest, stats: &TokenStats) -> Result<()> {
    write_atomic(path, render(manifest, stats).as_bytes())
}

fn render(manifest: &Manifest, stats: &TokenStats) -> String {
    let mut card = String::new();

    // write! to String cannot fail
    let _ = writeln!(card, "# {}", manifest.name);
    let _ = writeln!(card);
    let _ = writeln!(card, "- **License:** {}", manifest.license);
    let _ = writeln!(card, "- **Created:** {}", manifest.created_utc);
    let _ = writeln!(card, "- **Records:** {}", stats.records);
    let _ = writeln!(card);

    let _ = writeln!(card, "## Splits");
    let _ = writeln!(card);
    let _ = writeln!(card, "| Split | Rows | File |");
    let _ = writeln!(card, "|-------|------|------|");
    for (split, rows) in [
        ("train", manifest.counts.train),
        ("val", manifest.counts.val),
        ("test", manifest.counts.test),
    ] {
        let file = manifest.files.get(split).map(String::as_str).unwrap_or("-");
        let _ = writeln!(card, "| {} | {} | {} |", split, rows, file);
    }
    let _ = writeln!(card);

    let _ = writeln!(card, "## Schema");
    let _ = writeln!(card);
    for (field, description) in &manifest.schema {
        let _ = writeln!(card, "- `{}` — {}", field, description);
    }
    let _ = writeln!(card);

    let _ = writeln!(card, "## Processing notes");
    let _ = writeln!(card);
    let _ = writeln!(
        card,
        "Text was Unicode-normalized, whitespace-collapsed, and passed through \
         best-effort PII redaction (structural placeholders for emails, phone \
         numbers, SSNs, credit cards, IPs, and URLs; pseudonym tokens for names, \
         locations, dates, and relationship terms; first-person pronouns rewritten \
         to third person). Regex-based detection is not exhaustive; review before \
         publishing."
    );
    let _ = writeln!(card);
    let _ = writeln!(
        card,
        "Exact-duplicate documents were dropped by SHA-1 content hash. \
         Token counts are whitespace word counts, not tokenizer output."
    );

    let total_drops: usize = manifest.drops.values().sum();
    if total_drops > 0 || manifest.skips > 0 {
        let _ = writeln!(card);
        let _ = writeln!(card, "## Exclusions");
        let _ = writeln!(card);
        for (reason, count) in &manifest.drops {
            let _ = writeln!(card, "- dropped ({}): {}", reason, count);
        }
        if manifest.skips > 0 {
            let _ = writeln!(card, "- skipped files: {}", manifest.skips);
        }
    }

    card
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use textds_core::Record;

    #[test]
    fn test_card_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("DATASET_CARD.md");

        let mut manifest = Manifest::new("journal-ds", "CC-BY-4.0").unwrap();
        manifest.counts.train = 8;
        manifest
            .files
            .insert("train".to_string(), "train.jsonl".to_string());
        manifest.drops.insert("duplicate".to_string(), 2);

        let records: Vec<Record> = vec![];
        let stats = TokenStats::from_records(&records);

        write_card(&path, &manifest, &stats).unwrap();
        let card = std::fs::read_to_string(&path).unwrap();

        assert!(card.starts_with("# journal-ds"));
        assert!(card.contains("| train | 8 | train.jsonl |"));
        assert!(card.contains("dropped (duplicate): 2"));
        assert!(card.contains("CC-BY-4.0"));
    }
}
