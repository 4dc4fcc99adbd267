//! Content hashing helpers
//!
//! SHA-1 is used for record identity and deduplication keys (40-char hex),
//! SHA-256 for output file checksums.

use sha1::{Digest, Sha1};
use sha2::Sha256;

/// SHA-1 of a string, lowercase hex (40 chars)
pub fn sha1_hex(text: &str) -> String {
    hex::encode(Sha1::digest(text.as_bytes()))
}

/// SHA-256 of raw bytes, lowercase hex (64 chars)
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
