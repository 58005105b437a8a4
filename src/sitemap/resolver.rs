use crate::url::normalize_url;
use crate::{SitemapError, UrlError};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Candidate sitemap paths, probed in priority order
const SITEMAP_CANDIDATES: &[&str] = &["sitemap.xml", "sitemap_index.xml", "sitemap", "sitemap.php"];

/// Per-probe time limit; a slow probe counts as a miss
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Finds the sitemap URL for a site
///
/// The input is normalized first. A URL whose path already ends with
/// `sitemap.xml` is returned unchanged without any network traffic.
/// Otherwise the well-known candidate paths are probed against the site's
/// origin with HEAD requests, one at a time; the first candidate that
/// answers with a success status wins and the remaining candidates are
/// never checked. A failed probe moves straight to the next candidate,
/// without retries.
///
/// # Errors
///
/// * `SitemapError::Url` - the input could not be normalized
/// * `SitemapError::NotFound` - every candidate probe failed
pub async fn resolve_sitemap(client: &Client, raw_url: &str) -> Result<String, SitemapError> {
    let normalized = normalize_url(raw_url)?;
    // normalize_url only produces strings the url crate serialized
    let base = Url::parse(&normalized).map_err(|_| UrlError::Invalid)?;

    if base.path().ends_with("sitemap.xml") {
        return Ok(normalized);
    }

    for candidate in SITEMAP_CANDIDATES {
        let probe_url = base
            .join(&format!("/{candidate}"))
            .map_err(|_| UrlError::Invalid)?;

        tracing::debug!("Probing for sitemap at {}", probe_url);
        match client
            .head(probe_url.as_str())
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                tracing::info!("Found sitemap at {}", probe_url);
                return Ok(probe_url.to_string());
            }
            Ok(response) => {
                tracing::debug!("No sitemap at {} (HTTP {})", probe_url, response.status());
            }
            Err(e) => {
                tracing::debug!("Probe failed for {}: {}", probe_url, e);
            }
        }
    }

    Err(SitemapError::NotFound { url: normalized })
}
