//! Dataset artifact writers
//!
//! Everything that lands in the output directory goes through this crate:
//! JSONL splits, checksum sidecars, manifest, stats, pseudonym table, and
//! the dataset card. All writes are temp-then-rename so a crashed build
//! never leaves a truncated artifact behind.

pub mod card;
pub mod jsonl;
pub mod manifest;
pub mod stats;

pub use card::write_card;
pub use jsonl::{write_atomic, write_checksum, write_json_pretty, write_jsonl};
pub use manifest::Manifest;
pub use stats::TokenStats;
