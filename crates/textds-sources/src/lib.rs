pub mod denylist;
pub mod scan;

pub use denylist::Denylist;
pub use scan::{read_document, scan_dir, ScanOutcome};
