//! Build orchestration
//!
//! Ties the pipeline together: scan, normalize, redact, dedup, chunk,
//! partition, export. The interesting pieces live in their own modules;
//! [`pipeline::Builder`] is the entry point.

pub mod chunker;
pub mod partition;
pub mod pipeline;

pub use chunker::chunk_text;
pub use partition::{partition, SplitSpec};
pub use pipeline::{BuildOptions, BuildReport, Builder};
