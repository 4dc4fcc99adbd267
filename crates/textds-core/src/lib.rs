//! Core domain models for textds
//!
//! This crate contains:
//! - Domain models (Document, Record, DropReason)
//! - Content hashing helpers
//! - Pre-export record validation

pub mod error;
pub mod hash;
pub mod record;

pub use error::{Error, Result};
pub use hash::{sha1_hex, sha256_hex};
pub use record::{Document, DropReason, Record, SplitCounts};
