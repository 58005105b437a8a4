//! Scan orchestration
//!
//! This module owns the main scan loop: it walks the discovered URL list
//! in order, skips pages that already have a stored result, audits the
//! rest under a fixed time budget, and persists after every page.

mod orchestrator;

pub use orchestrator::{ScanSummary, Scanner};
