//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the shared HTTP client
//! - GET requests with status and Content-Type validation
//! - Error classification into the fetch failure taxonomy
//!
//! There are no retries; a single failed attempt is final for that URL in
//! that crawl.

use crate::FetchError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds the HTTP client shared by all crawl tasks
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body as text.
///
/// Failure conditions, each distinct:
/// - [`FetchError::Network`] - the request could not complete (DNS,
///   connection refused, timeout)
/// - [`FetchError::Http`] - response status code >= 400
/// - [`FetchError::UnsupportedContentType`] - Content-Type header absent or
///   not indicating HTML
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, FetchError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(FetchError::Network)?;

    let status = response.status().as_u16();
    if status >= 400 {
        return Err(FetchError::Http { status });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    match content_type.as_deref() {
        Some(ct) if ct.contains("text/html") => {}
        _ => return Err(FetchError::UnsupportedContentType { content_type }),
    }

    response.text().await.map_err(FetchError::Network)
}
