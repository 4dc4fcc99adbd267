//! Best-effort PII redaction
//!
//! Detection is regex-based and will produce false negatives (a
//! credit-card-shaped digit run read as a phone number) and occasional
//! false positives. That is accepted pipeline behavior, not a defect: the
//! goal is pattern redaction, not exhaustive PII discovery.

pub mod patterns;
pub mod pseudonym;
pub mod redactor;

pub use pseudonym::PseudonymTable;
pub use redactor::{CATEGORIES, RedactOptions, Redactor};
