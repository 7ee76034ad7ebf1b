//! HTML link extraction
//!
//! The crawler consumes HTML only through one query: all anchor elements in
//! document order, plus the raw value of each href attribute. Host filtering
//! is the engine's responsibility, so off-host links pass through untouched.

use crate::url::classify_href;
use scraper::{Html, Selector};
use url::Url;

/// Extracts the absolute http(s) URLs referenced by anchor elements.
///
/// Document order and duplicates are preserved. An anchor is skipped when its
/// href is missing or empty, carries an unsafe scheme, fails to resolve
/// against `base_url`, or resolves to a non-http(s) URL. Resolution failures
/// are silent; they never surface as errors.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The base URL for resolving relative links
///
/// # Example
///
/// ```
/// use linktally::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<html><body><a href="/page">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let links = extract_links(html, &base_url);
/// assert_eq!(links, vec!["https://example.com/page".to_string()]);
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute) = resolve_href(href, base_url) {
                    links.push(absolute);
                }
            }
        }
    }

    links
}

/// Resolves a raw href to an absolute URL, or None if it must be skipped
fn resolve_href(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    if !classify_href(href).is_resolvable() {
        return None;
    }

    let absolute = base_url.join(href).ok()?;

    // The resolved scheme must still be web; a resolvable relative href can
    // land elsewhere when the base itself is exotic.
    if absolute.scheme() == "http" || absolute.scheme() == "https" {
        Some(absolute.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://blog.boot.dev").unwrap()
    }

    #[test]
    fn test_absolute_link() {
        let html = r#"<html><body><a href="https://blog.boot.dev"><span>Boot.dev</span></a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["https://blog.boot.dev/".to_string()]);
    }

    #[test]
    fn test_relative_link() {
        let html = r#"<html><body><a href="/path/one"><span>Boot.dev</span></a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["https://blog.boot.dev/path/one".to_string()]);
    }

    #[test]
    fn test_absolute_and_relative_mixed() {
        let html = r#"<html><body><a href="/path/one">A</a><a href="https://other.com/path/one">B</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(
            links,
            vec![
                "https://blog.boot.dev/path/one".to_string(),
                "https://other.com/path/one".to_string(),
            ]
        );
    }

    #[test]
    fn test_off_host_links_not_filtered_here() {
        let html = r#"<html><body><a href="https://elsewhere.example/x">X</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["https://elsewhere.example/x".to_string()]);
    }

    #[test]
    fn test_missing_href_skipped() {
        let html = r#"<html><body><a>no href</a><a href="/ok">ok</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["https://blog.boot.dev/ok".to_string()]);
    }

    #[test]
    fn test_empty_href_skipped() {
        let html = r#"<html><body><a href="">empty</a><a href="/ok">ok</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["https://blog.boot.dev/ok".to_string()]);
    }

    #[test]
    fn test_whitespace_href_skipped() {
        let html = r#"<html><body><a href="   ">blank</a><a href="/ok">ok</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["https://blog.boot.dev/ok".to_string()]);
    }

    #[test]
    fn test_unsafe_schemes_skipped() {
        let html = r#"
            <html><body>
                <a href="javascript:alert(1)">bad</a>
                <a href="mailto:test@example.com">bad</a>
                <a href="tel:+1234567890">bad</a>
                <a href="data:text/html,<h1>x</h1>">bad</a>
                <a href="/ok">ok</a>
            </body></html>
        "#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["https://blog.boot.dev/ok".to_string()]);
    }

    #[test]
    fn test_non_web_scheme_skipped() {
        let html = r#"<html><body><a href="ftp://files.example/x">bad</a><a href="/ok">ok</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["https://blog.boot.dev/ok".to_string()]);
    }

    #[test]
    fn test_malformed_href_skipped_silently() {
        let html = r#"<html><body><a href="ht!tp://bad^url">bad</a><a href="/ok">ok</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["https://blog.boot.dev/ok".to_string()]);
    }

    #[test]
    fn test_duplicates_kept() {
        let html = r#"<html><body><a href="/a">A</a><a href="/a">A2</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(
            links,
            vec![
                "https://blog.boot.dev/a".to_string(),
                "https://blog.boot.dev/a".to_string(),
            ]
        );
    }

    #[test]
    fn test_document_order_preserved() {
        let html =
            r#"<html><body><a href="/a">A</a><a href="/b">B</a><a href="/c">C</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(
            links,
            vec![
                "https://blog.boot.dev/a".to_string(),
                "https://blog.boot.dev/b".to_string(),
                "https://blog.boot.dev/c".to_string(),
            ]
        );
    }

    #[test]
    fn test_dot_segment_resolves() {
        let base = Url::parse("https://blog.boot.dev/base/").unwrap();
        let html = r#"<html><body><a href="./a">A</a></body></html>"#;
        let links = extract_links(html, &base);
        assert_eq!(links, vec!["https://blog.boot.dev/base/a".to_string()]);
    }

    #[test]
    fn test_parent_segment_resolves() {
        let base = Url::parse("https://blog.boot.dev/base/sub/").unwrap();
        let html = r#"<html><body><a href="../a">A</a></body></html>"#;
        let links = extract_links(html, &base);
        assert_eq!(links, vec!["https://blog.boot.dev/base/a".to_string()]);
    }

    #[test]
    fn test_root_relative_resolves() {
        let base = Url::parse("https://blog.boot.dev/base/sub/").unwrap();
        let html = r#"<html><body><a href="/root">R</a></body></html>"#;
        let links = extract_links(html, &base);
        assert_eq!(links, vec!["https://blog.boot.dev/root".to_string()]);
    }

    #[test]
    fn test_protocol_relative_resolves() {
        let html = r#"<html><body><a href="//cdn.boot.dev/asset">CDN</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["https://cdn.boot.dev/asset".to_string()]);
    }
}
