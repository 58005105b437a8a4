use crate::url::normalize_url;
use crate::{PharosError, SitemapError};
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use std::time::Duration;

/// Per-fetch time limit for sitemap documents
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Root shape of a sitemap document
enum SitemapShape {
    /// `<urlset>` with page locations in document order
    UrlSet(Vec<String>),
    /// `<sitemapindex>` with child sitemap locations
    Index(Vec<String>),
    /// Valid XML with an unrecognized root element
    Unsupported,
}

/// Fetches a sitemap and returns the page URLs it lists, normalized, in
/// document order
///
/// A `<urlset>` document yields its `<loc>` entries directly; duplicates
/// are preserved. A `<sitemapindex>` is followed through its first child
/// sitemap only, repeatedly if that child is itself an index. An index that
/// points back at itself will therefore loop. Any other root shape is
/// reported and treated as an empty sitemap.
///
/// # Errors
///
/// * `SitemapError::Fetch` - a sitemap document could not be retrieved
/// * `SitemapError::Xml` - a document was not well-formed XML
pub async fn resolve_page_urls(
    client: &Client,
    sitemap_url: &str,
) -> Result<Vec<String>, PharosError> {
    let mut current = normalize_url(sitemap_url)?;

    loop {
        let body = fetch_sitemap(client, &current).await?;
        let shape = parse_sitemap(&body).map_err(|source| SitemapError::Xml {
            url: current.clone(),
            source,
        })?;

        match shape {
            SitemapShape::UrlSet(locs) => {
                let mut pages = Vec::with_capacity(locs.len());
                for loc in locs {
                    match normalize_url(&loc) {
                        Ok(page) => pages.push(page),
                        Err(e) => {
                            tracing::debug!("Skipping unparseable <loc> {:?}: {}", loc, e);
                        }
                    }
                }
                return Ok(pages);
            }
            SitemapShape::Index(children) => match children.into_iter().next() {
                Some(child) => {
                    tracing::info!("Sitemap index at {}, descending into {}", current, child);
                    current = normalize_url(&child)?;
                }
                None => return Ok(Vec::new()),
            },
            SitemapShape::Unsupported => {
                tracing::warn!("Unsupported sitemap structure at {}", current);
                return Ok(Vec::new());
            }
        }
    }
}

/// Retrieves the full body of a sitemap document
async fn fetch_sitemap(client: &Client, url: &str) -> Result<String, SitemapError> {
    let response = client
        .get(url)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|source| SitemapError::Fetch {
            url: url.to_string(),
            source,
        })?;

    response.text().await.map_err(|source| SitemapError::Fetch {
        url: url.to_string(),
        source,
    })
}

/// Parses sitemap XML into one of the recognized shapes
///
/// Element names are matched on their local name, so namespace prefixes do
/// not matter. `<loc>` text is collected inside `<url>` (urlset) and
/// `<sitemap>` (sitemapindex) entries, including CDATA sections.
fn parse_sitemap(xml: &str) -> Result<SitemapShape, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    let mut root: Option<RootTag> = None;
    let mut locs = Vec::new();
    let mut in_entry = false;
    let mut in_loc = false;
    let mut current_loc = String::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"urlset" if root.is_none() => root = Some(RootTag::UrlSet),
                b"sitemapindex" if root.is_none() => root = Some(RootTag::Index),
                b"url" if root == Some(RootTag::UrlSet) => {
                    in_entry = true;
                    current_loc.clear();
                }
                b"sitemap" if root == Some(RootTag::Index) => {
                    in_entry = true;
                    current_loc.clear();
                }
                b"loc" if in_entry => in_loc = true,
                _ => {}
            },
            Event::Text(ref e) => {
                if in_loc {
                    current_loc.push_str(e.unescape()?.trim());
                }
            }
            Event::CData(ref e) => {
                if in_loc {
                    current_loc.push_str(String::from_utf8_lossy(e).trim());
                }
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"loc" => in_loc = false,
                b"url" | b"sitemap" if in_entry => {
                    if !current_loc.is_empty() {
                        locs.push(current_loc.clone());
                    }
                    in_entry = false;
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(match root {
        Some(RootTag::UrlSet) => SitemapShape::UrlSet(locs),
        Some(RootTag::Index) => SitemapShape::Index(locs),
        None => SitemapShape::Unsupported,
    })
}

#[derive(Clone, Copy, PartialEq)]
enum RootTag {
    UrlSet,
    Index,
}
