use crate::UrlError;
use url::Url;

/// Normalizes a raw URL string into its canonical form
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace and lowercase the whole string
/// 2. Prepend `https://` when no `http://`/`https://` prefix is present
/// 3. Parse with the `url` crate; reject if malformed
/// 4. Strip a leading `www.` from the host
/// 5. Return the parsed URL's canonical serialization (this adds the
///    trailing slash to bare origins)
///
/// The function is idempotent: normalizing an already normalized URL
/// returns it unchanged.
///
/// # Examples
///
/// ```
/// use pharos::url::normalize_url;
///
/// assert_eq!(normalize_url("example.com").unwrap(), "https://example.com/");
/// assert_eq!(
///     normalize_url("https://www.example.com").unwrap(),
///     "https://example.com/"
/// );
/// ```
pub fn normalize_url(raw: &str) -> Result<String, UrlError> {
    let lowered = raw.trim().to_lowercase();

    let with_scheme = if lowered.starts_with("http://") || lowered.starts_with("https://") {
        lowered
    } else {
        format!("https://{}", lowered)
    };

    let mut url = Url::parse(&with_scheme).map_err(|_| UrlError::Invalid)?;

    if let Some(host) = url.host_str() {
        if let Some(stripped) = host.strip_prefix("www.") {
            let stripped = stripped.to_string();
            url.set_host(Some(&stripped)).map_err(|_| UrlError::Invalid)?;
        }
    }

    Ok(url.as_str().to_string())
}
