//! Linktally: a same-site link census crawler
//!
//! This crate crawls a single website starting from a base URL: it fetches
//! HTML pages, extracts same-host hyperlinks, recursively visits newly
//! discovered pages, and counts how many times each distinct normalized page
//! was referenced.

pub mod crawler;
pub mod report;
pub mod url;

use thiserror::Error;

/// Main error type for linktally operations
///
/// Only an unusable base URL can fail a whole crawl; everything that goes
/// wrong later is recovered at the level of a single crawl task.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid base URL {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("base URL {url} has no host")]
    BaseUrlMissingHost { url: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("failed to parse URL: {0}")]
    Parse(String),

    #[error("missing host in URL")]
    MissingHost,
}

/// Fetch failures, one variant per distinct failure condition
#[derive(Debug, Error)]
pub enum FetchError {
    /// The transport-level request could not complete (DNS, connection
    /// refused, timeout).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with an error status (>= 400).
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    /// The response is not HTML, or does not say what it is.
    #[error("unsupported content type: {}", content_type.as_deref().unwrap_or("<missing>"))]
    UnsupportedContentType { content_type: Option<String> },
}

/// Result type alias for linktally operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use crate::crawler::{crawl, CrawlObserver, Engine, TracingObserver, VisitCounts};
pub use crate::url::{classify_href, normalize_url, HrefClass, UnsafeScheme};
