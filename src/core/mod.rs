//! Detection engine.
//!
//! Control flow is leaf-first:
//!
//! - `literal`: heuristic scanner for unlocalized literal declarations
//! - `regions`: splits text into active and suppressed regions
//! - `markers`: marker tokens and suppression policies
//! - `classifier`: per-file verdict
//! - `file_scanner`: collects candidate files from the scan root
//! - `scan`: classifies candidates in parallel and aggregates flagged paths

pub mod classifier;
pub mod file_scanner;
pub mod literal;
pub mod markers;
pub mod regions;
pub mod scan;

pub use classifier::{Classifier, Verdict};
pub use file_scanner::{WalkOptions, WalkResult, collect_candidates};
pub use markers::{MarkerVariant, Markers, SuppressionPolicy};
pub use scan::{ScanOutcome, scan};
