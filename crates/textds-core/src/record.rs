use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One input text unit, immutable once read.
#[derive(Debug, Clone)]
pub struct Document {
    /// Source path as given to the scanner
    pub source_path: String,
    /// File stem, used as the record title base
    pub stem: String,
    /// Raw content (invalid UTF-8 bytes dropped during read)
    pub raw: String,
}

/// Why a document was dropped during processing.
///
/// Closed enumeration so reporting is exhaustiveness-checked; file-level
/// skips (unreadable, denied) are tracked separately by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// Empty after normalization
    Empty,
    /// Redacted content hash already seen in this run
    Duplicate,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::Empty => "empty",
            DropReason::Duplicate => "duplicate",
        }
    }
}

/// One exported chunk of redacted text with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// SHA-1 of "{document_hash}:{chunk_index}"
    pub id: String,
    pub source_path: String,
    /// File stem, with a " [part i/n]" suffix for multi-chunk documents
    pub title: String,
    pub text: String,
    /// Whitespace-delimited word count, not a true tokenizer
    pub tokens_est: usize,
    /// SHA-1 of the chunk text
    pub hash: String,
    pub tags: Vec<String>,
}

impl Record {
    /// Pre-export validation gate.
    ///
    /// A failure here indicates a pipeline defect (bad hashing or id
    /// generation), not input noise, so callers abort the export.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(invalid(&self.id, "empty id"));
        }
        if self.text.is_empty() {
            return Err(invalid(&self.id, "empty text"));
        }
        if !is_hex40(&self.id) {
            return Err(invalid(&self.id, "id is not 40-char lowercase hex"));
        }
        if !is_hex40(&self.hash) {
            return Err(invalid(&self.id, "hash is not 40-char lowercase hex"));
        }
        Ok(())
    }
}

fn invalid(id: &str, reason: &str) -> Error {
    Error::InvalidRecord {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}

fn is_hex40(s: &str) -> bool {
    s.len() == 40 && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// Row counts per exported split.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SplitCounts {
    pub train: usize,
    pub val: usize,
    pub test: usize,
}

impl SplitCounts {
    pub fn total(&self) -> usize {
        self.train + self.val + self.test
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha1_hex;

    fn sample() -> Record {
        let text = "hello world".to_string();
        Record {
            id: sha1_hex("doc:0"),
            source_path: "a.txt".to_string(),
            title: "a".to_string(),
            tokens_est: 2,
            hash: sha1_hex(&text),
            text,
            tags: vec![],
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_empty_text_rejected() {
        let mut rec = sample();
        rec.text = String::new();
        assert!(rec.validate().is_err());
    }

    #[test]
    fn test_bad_hash_rejected() {
        let mut rec = sample();
        rec.hash = "not-a-hash".to_string();
        assert!(rec.validate().is_err());

        rec.hash = sample().hash.to_uppercase();
        assert!(rec.validate().is_err());
    }

    #[test]
    fn test_drop_reason_names() {
        assert_eq!(DropReason::Empty.as_str(), "empty");
        assert_eq!(DropReason::Duplicate.as_str(), "duplicate");
    }
}
