//! Interactive input collection
//!
//! A scan needs three answers from the operator: the site URL, a scan
//! mode, and a mode-specific parameter. The reading side sits behind the
//! [`InputProvider`] trait so the entry point can be driven by a scripted
//! provider in tests instead of a terminal.

use crate::url::normalize_url;
use crate::PharosError;
use std::io::{self, BufRead, Write};

/// Source of operator answers
pub trait InputProvider {
    /// Shows `prompt` and reads one line of input, trimmed
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Reads answers from stdin
pub struct StdinInput;

impl InputProvider for StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Pre-programmed answers, consumed in order; missing answers read as empty
pub struct ScriptedInput {
    answers: std::vec::IntoIter<String>,
}

impl ScriptedInput {
    pub fn new(answers: &[&str]) -> Self {
        let answers: Vec<String> = answers.iter().map(|s| s.to_string()).collect();
        Self {
            answers: answers.into_iter(),
        }
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
        Ok(self.answers.next().unwrap_or_default())
    }
}

/// How much of the site one run covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanMode {
    /// Audit every page the sitemap lists
    FullSite,
    /// Audit at most `size` not-yet-scanned pages, then stop
    Batched { size: usize },
    /// Audit one specific URL, skipping sitemap discovery
    SingleUrl { url: String },
}

/// Everything the orchestration entry point needs to start a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// Normalized site URL
    pub site_url: String,
    pub mode: ScanMode,
}

const DEFAULT_BATCH_SIZE: usize = 10;

/// Collects a scan request from the provider
///
/// `site_url` skips the URL prompt when the caller already has one (for
/// example from a CLI flag). Defaults: an empty scan choice means a full
/// scan, a non-numeric page count means 10 pages, and an empty single-URL
/// answer falls back to the site URL itself.
pub fn collect_scan_request<P: InputProvider>(
    provider: &mut P,
    site_url: Option<String>,
) -> Result<ScanRequest, PharosError> {
    let raw_url = match site_url {
        Some(url) => url,
        None => provider.read_line("Please enter the URL of your website or sitemap: ")?,
    };
    let site_url = normalize_url(&raw_url)?;

    let choice = provider.read_line(
        "Scan mode: [1] full site  [2] full site in batches  [3] single URL (default 1): ",
    )?;

    let mode = match choice.as_str() {
        "" | "1" => ScanMode::FullSite,
        "2" => {
            let answer = provider.read_line("How many pages per batch? (default 10): ")?;
            let size = answer
                .parse()
                .ok()
                .filter(|&n: &usize| n > 0)
                .unwrap_or(DEFAULT_BATCH_SIZE);
            ScanMode::Batched { size }
        }
        "3" => {
            let answer = provider.read_line("Which URL should be scanned? (default: site URL): ")?;
            let url = if answer.is_empty() {
                site_url.clone()
            } else {
                normalize_url(&answer)?
            };
            ScanMode::SingleUrl { url }
        }
        other => {
            tracing::warn!(
                "Unrecognized scan choice {:?}, falling back to a full scan",
                other
            );
            ScanMode::FullSite
        }
    };

    Ok(ScanRequest { site_url, mode })
}
