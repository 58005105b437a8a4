use crate::audit::{AuditReport, AuditRunner};
use crate::config::ScannerConfig;
use crate::report::print_audit_report;
use crate::store::{ResultStore, ScanResult};
use crate::{AuditError, PharosError};
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Counters reported after a scan run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Pages audited this run, successes and failures alike
    pub processed: usize,

    /// Pages skipped because a result was already stored
    pub skipped: usize,

    /// Pages whose audit failed or timed out this run
    pub failed: usize,
}

/// Drives one scan run over a fixed URL list
///
/// The scanner owns the result store for the duration of the run. Pages
/// are processed strictly in input order, one at a time; a failed audit is
/// recorded and the loop continues, so only URL normalization and sitemap
/// discovery problems upstream can abort a run.
pub struct Scanner<'a> {
    store: ResultStore,
    runner: &'a dyn AuditRunner,
    pause: Duration,
    audit_timeout: Duration,
    /// Page budget for batched runs; `None` scans everything
    page_limit: Option<usize>,
}

impl<'a> Scanner<'a> {
    pub fn new(store: ResultStore, runner: &'a dyn AuditRunner, config: &ScannerConfig) -> Self {
        Self {
            store,
            runner,
            pause: Duration::from_secs(config.pause_seconds),
            audit_timeout: Duration::from_secs(config.audit_timeout_seconds),
            page_limit: None,
        }
    }

    /// Caps the number of pages audited in this run
    ///
    /// Skipped pages do not count against the cap, so repeated batched runs
    /// walk forward through the site.
    pub fn with_page_limit(mut self, limit: usize) -> Self {
        self.page_limit = Some(limit);
        self
    }

    /// The store as of the last processed page
    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Runs the scan over `urls` in order
    pub async fn run(&mut self, urls: &[String]) -> Result<ScanSummary, PharosError> {
        let mut summary = ScanSummary::default();

        if !self.store.is_empty() {
            tracing::info!("Loaded {} existing results", self.store.len());
        }

        for url in urls {
            if self.store.contains(url) {
                tracing::info!("Skipping already processed URL: {}", url);
                summary.skipped += 1;
                continue;
            }

            if let Some(limit) = self.page_limit {
                if summary.processed >= limit {
                    tracing::info!("Reached the {}-page budget for this run", limit);
                    break;
                }
            }

            tracing::info!("Auditing {}", url);
            let result = match self.audit_with_budget(url).await {
                Ok(report) => {
                    print_audit_report(&report);
                    ScanResult::Success {
                        url: url.clone(),
                        performance: report.categories.performance.score,
                        accessibility: report.categories.accessibility.score,
                        best_practices: report.categories.best_practices.score,
                        seo: report.categories.seo.score,
                    }
                }
                Err(e) => {
                    tracing::error!("Audit failed for {}: {}", url, e);
                    summary.failed += 1;
                    ScanResult::Failure {
                        url: url.clone(),
                        error: e.to_string(),
                    }
                }
            };

            self.store.push_and_persist(result)?;
            summary.processed += 1;

            tracing::debug!("Pausing {:?} before the next page", self.pause);
            sleep(self.pause).await;
        }

        Ok(summary)
    }

    /// Races the audit against the per-page time budget
    ///
    /// On expiry the audit future is dropped; the runner's own cleanup is
    /// responsible for releasing whatever it was holding.
    async fn audit_with_budget(&self, url: &str) -> Result<AuditReport, AuditError> {
        match timeout(self.audit_timeout, self.runner.run_audit(url)).await {
            Ok(result) => result,
            Err(_) => Err(AuditError::Timeout(self.audit_timeout.as_secs())),
        }
    }
}
