//! Audit engine boundary
//!
//! The audit engine evaluates one page at a time and hands back category
//! scores plus per-audit details. Everything behind that call (browser
//! lifecycle, measurement, report assembly) belongs to the engine; this
//! module only defines the seam and an HTTP client for engines exposed as
//! a web service.

mod http;
mod report;
mod traits;

pub use http::HttpAuditRunner;
pub use report::{AuditCategories, AuditDetails, AuditEntry, AuditReport, CategoryScore};
pub use traits::AuditRunner;
