//! Sitemap discovery and parsing
//!
//! This module finds a site's sitemap by probing well-known candidate paths
//! and turns sitemap / sitemap-index XML into a flat list of page URLs.

mod parser;
mod resolver;

pub use parser::resolve_page_urls;
pub use resolver::resolve_sitemap;

use std::time::Duration;

/// Builds the HTTP client shared by sitemap discovery and the audit runner
///
/// The client carries no overall request timeout; audit calls run under the
/// orchestrator's time budget and sitemap requests set per-request timeouts.
pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    let user_agent = format!("pharos/{}", env!("CARGO_PKG_VERSION"));

    reqwest::Client::builder()
        .user_agent(user_agent)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}
