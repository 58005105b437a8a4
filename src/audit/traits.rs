use crate::audit::AuditReport;
use crate::AuditError;
use async_trait::async_trait;

/// A single-page audit engine
///
/// Implementations evaluate one URL and return the full report. The
/// orchestrator owns the per-page time budget; implementations only report
/// their own failures. Implementations must release whatever resources they
/// hold (browser processes, connections) even when the caller abandons the
/// returned future on timeout.
#[async_trait]
pub trait AuditRunner: Send + Sync {
    /// Audits a single page
    async fn run_audit(&self, url: &str) -> Result<AuditReport, AuditError>;
}
