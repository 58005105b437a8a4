//! Persisted scan results
//!
//! The result store is a single JSON document holding one entry per audited
//! URL. It is loaded once when a scan starts and rewritten in full after
//! every processed page, which is what makes an interrupted scan resumable:
//! URLs already present in the file are skipped on the next run, so at most
//! one page of work is lost to a crash.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Outcome of auditing a single page
///
/// Serialized untagged so the result file keeps the flat object shapes
/// `{url, performance, accessibility, bestPractices, seo}` and
/// `{url, error}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScanResult {
    Success {
        url: String,
        performance: f64,
        accessibility: f64,
        #[serde(rename = "bestPractices")]
        best_practices: f64,
        seo: f64,
    },
    Failure {
        url: String,
        error: String,
    },
}

impl ScanResult {
    /// The URL this result belongs to
    pub fn url(&self) -> &str {
        match self {
            ScanResult::Success { url, .. } | ScanResult::Failure { url, .. } => url,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ScanResult::Failure { .. })
    }
}

/// In-memory view of the result file
#[derive(Debug)]
pub struct ResultStore {
    path: PathBuf,
    results: Vec<ScanResult>,
}

impl ResultStore {
    /// Loads the store from `path`
    ///
    /// A missing, unreadable, or corrupt file yields an empty store; a scan
    /// must always be able to start from nothing.
    pub fn load(path: &Path) -> Self {
        let results = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(results) => results,
                Err(e) => {
                    tracing::warn!(
                        "Ignoring unreadable results file {}: {}",
                        path.display(),
                        e
                    );
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        Self {
            path: path.to_path_buf(),
            results,
        }
    }

    /// Whether a result for `url` (exact string match) is already stored
    pub fn contains(&self, url: &str) -> bool {
        self.results.iter().any(|r| r.url() == url)
    }

    /// Appends a result and rewrites the whole file
    pub fn push_and_persist(&mut self, result: ScanResult) -> std::io::Result<()> {
        self.results.push(result);
        self.persist()
    }

    /// Serializes the full result list, pretty-printed, over the file
    pub fn persist(&self) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self.results)?;
        std::fs::write(&self.path, json)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[ScanResult] {
        &self.results
    }
}
