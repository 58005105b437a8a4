//! Pharos: a resumable site-wide page quality scanner
//!
//! This crate discovers every page of a website through its sitemap, runs an
//! external quality audit (performance, accessibility, best practices, SEO)
//! on each page, and persists per-page outcomes after every page so an
//! interrupted scan can be resumed without re-auditing finished pages.

pub mod audit;
pub mod config;
pub mod prompt;
pub mod report;
pub mod scanner;
pub mod sitemap;
pub mod store;
pub mod url;

use thiserror::Error;

/// Main error type for Pharos operations
#[derive(Debug, Error)]
pub enum PharosError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Url(#[from] UrlError),

    #[error(transparent)]
    Sitemap(#[from] SitemapError),

    #[error("No URLs found in sitemap {0}")]
    EmptySitemap(String),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Invalid URL provided")]
    Invalid,
}

/// Sitemap discovery and parsing errors
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Sitemap not found for {url}")]
    NotFound { url: String },

    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },

    #[error("Failed to parse sitemap XML at {url}: {source}")]
    Xml {
        url: String,
        source: quick_xml::Error,
    },

    #[error(transparent)]
    Url(#[from] UrlError),
}

/// Errors raised by an audit runner for a single page
///
/// These never abort a scan run; the orchestrator records them as failure
/// results and moves on to the next page.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Audit request failed for {url}: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },

    #[error("Audit endpoint returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed audit report for {url}: {source}")]
    Decode {
        url: String,
        source: reqwest::Error,
    },

    #[error("Audit timed out after {0} seconds")]
    Timeout(u64),
}

/// Result type alias for Pharos operations
pub type Result<T> = std::result::Result<T, PharosError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use audit::{AuditReport, AuditRunner, HttpAuditRunner};
pub use config::Config;
pub use scanner::{ScanSummary, Scanner};
pub use store::{ResultStore, ScanResult};
pub use url::normalize_url;
