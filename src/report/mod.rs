//! Console rendering of audit results
//!
//! Prints one page's category scores and notable findings after each
//! audit, and a short summary when the run ends.

use crate::audit::AuditReport;
use crate::scanner::ScanSummary;

/// Prints the category scores and notable findings for one page
pub fn print_audit_report(report: &AuditReport) {
    let categories = &report.categories;

    println!();
    println!("Audit results:");
    println!("  Performance:    {:.0}%", categories.performance.score * 100.0);
    println!("  Accessibility:  {:.0}%", categories.accessibility.score * 100.0);
    println!("  Best practices: {:.0}%", categories.best_practices.score * 100.0);
    println!("  SEO:            {:.0}%", categories.seo.score * 100.0);

    let opportunities: Vec<_> = report
        .audits
        .values()
        .filter(|audit| audit.score != Some(1.0))
        .filter(|audit| {
            audit
                .details
                .as_ref()
                .is_some_and(|details| details.kind == "opportunity")
        })
        .collect();

    if !opportunities.is_empty() {
        println!();
        println!("Improvement suggestions:");
        for audit in opportunities {
            println!("  - {}: {}", audit.title, audit.description);
        }
    }

    // The bf-cache audit lists reasons a page cannot be restored from the
    // back/forward cache; surface them when the engine reports the audit.
    if let Some(bf_cache) = report.audits.get("bf-cache") {
        println!();
        println!("Back/forward cache:");

        let items = bf_cache
            .details
            .as_ref()
            .map(|details| details.items.as_slice())
            .unwrap_or(&[]);

        if items.is_empty() {
            println!("  No failures detected.");
        } else {
            for item in items {
                let reason = item
                    .get("failureReason")
                    .and_then(|value| value.as_str())
                    .unwrap_or("unknown reason");
                println!("  - {}", reason);
            }
        }
    }
}

/// Prints the end-of-run summary
pub fn print_scan_summary(summary: &ScanSummary, results_path: &str) {
    println!();
    println!(
        "Scan complete: {} audited, {} skipped, {} failed",
        summary.processed, summary.skipped, summary.failed
    );
    println!("Results saved to {}", results_path);
}
