use crate::UrlError;
use url::Url;

/// Normalizes a URL into the canonical dedup key used by the crawl engine.
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace and parse; reject if not an absolute URL
/// 2. Lowercase the host
/// 3. Drop scheme, port, query, and fragment
/// 4. Strip exactly one trailing `/` from the path (the root path `/`
///    becomes empty, not trimmed further)
/// 5. Concatenate host and path
///
/// Path case and percent-encoding are preserved verbatim; normalization never
/// case-folds or decodes the path. Two URLs differing only by scheme,
/// trailing slash, host case, port, query, or fragment normalize identically.
///
/// # Examples
///
/// ```
/// use linktally::url::normalize_url;
///
/// let key = normalize_url("https://BLOG.boot.dev/path/?q=1#top").unwrap();
/// assert_eq!(key, "blog.boot.dev/path");
/// ```
pub fn normalize_url(url_str: &str) -> Result<String, UrlError> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    let host = url.host_str().ok_or(UrlError::MissingHost)?.to_lowercase();

    let path = url.path();
    let path = path.strip_suffix('/').unwrap_or(path);

    Ok(format!("{}{}", host, path))
}
