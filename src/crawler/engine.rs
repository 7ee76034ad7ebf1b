//! Crawl engine - concurrency-bounded recursive traversal
//!
//! Each discovered link becomes one crawl task: host check, visit-state
//! check, fetch, link extraction, recursion into the children. The visit map
//! is the only shared mutable state, and every check-and-update on it happens
//! inside a single critical section so no normalized URL is ever
//! double-counted as a first visit by concurrent tasks.

use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::observer::{CrawlObserver, TracingObserver};
use crate::crawler::parser::extract_links;
use crate::url::normalize_url;
use crate::CrawlError;
use reqwest::Client;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// Number of simultaneous in-flight fetches when none is configured
pub const DEFAULT_MAX_CONCURRENCY: usize = 5;

/// Mapping from normalized URL to the number of times it was referenced
/// during one crawl
pub type VisitCounts = HashMap<String, u64>;

/// Crawl engine for a single site
///
/// Created per crawl; the visit counts it accumulates are never shared
/// across crawl invocations.
pub struct Engine {
    base_url: Url,
    base_host: String,
    client: Client,
    /// Gates in-flight fetches only; any number of logical tasks may be
    /// queued or recursing above the cap. Tokio semaphores hand out permits
    /// in FIFO order, so waiting fetches are served first-come-first-served.
    fetch_gate: Semaphore,
    /// Shared visit state. check-if-seen and increment/insert form one
    /// critical section, which guarantees at most one fetch per normalized
    /// URL per crawl.
    pages: Mutex<VisitCounts>,
    observer: Box<dyn CrawlObserver>,
}

impl Engine {
    /// Creates an engine rooted at `base_url`, reporting events via
    /// [`TracingObserver`].
    ///
    /// Fails only when the base URL cannot be parsed or has no host; every
    /// later error is recovered at the level of a single crawl task.
    pub fn new(base_url: &str, max_concurrency: usize) -> Result<Self, CrawlError> {
        Self::with_observer(base_url, max_concurrency, Box::new(TracingObserver))
    }

    /// Creates an engine with a caller-supplied event observer
    pub fn with_observer(
        base_url: &str,
        max_concurrency: usize,
        observer: Box<dyn CrawlObserver>,
    ) -> Result<Self, CrawlError> {
        let parsed =
            Url::parse(base_url.trim()).map_err(|source| CrawlError::InvalidBaseUrl {
                url: base_url.to_string(),
                source,
            })?;

        let base_host = parsed
            .host_str()
            .ok_or_else(|| CrawlError::BaseUrlMissingHost {
                url: base_url.to_string(),
            })?
            .to_string();

        let client = build_http_client()?;

        Ok(Self {
            base_url: parsed,
            base_host,
            client,
            // A cap of 0 would park every fetch forever; clamp to 1.
            fetch_gate: Semaphore::new(max_concurrency.max(1)),
            pages: Mutex::new(VisitCounts::new()),
            observer,
        })
    }

    /// Runs the crawl to exhaustion of the reachable same-host link graph
    /// and returns the final visit counts.
    pub async fn run(self) -> VisitCounts {
        let engine = Arc::new(self);
        let root = engine.base_url.to_string();
        engine.clone().visit(root).await;

        let mut pages = engine.pages.lock().unwrap();
        std::mem::take(&mut *pages)
    }

    /// One crawl task: host check, visit record, fetch, extract, recurse.
    ///
    /// Every failure here is local to this task; siblings and ancestors keep
    /// running regardless of what happens to this subtree.
    fn visit(self: Arc<Self>, current: String) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        Box::pin(async move {
            let url = match Url::parse(&current) {
                Ok(u) => u,
                Err(e) => {
                    tracing::debug!("skipping unparseable URL {}: {}", current, e);
                    return;
                }
            };

            // Off-host pages are a boundary of the crawl: never fetched and
            // never recorded in the visit counts.
            if url.host_str() != Some(self.base_host.as_str()) {
                return;
            }

            let key = match normalize_url(&current) {
                Ok(k) => k,
                Err(e) => {
                    tracing::debug!("skipping unnormalizable URL {}: {}", current, e);
                    return;
                }
            };

            // First sighting inserts with count 1 and proceeds to the fetch;
            // every later sighting only bumps the count and stops.
            {
                let mut pages = self.pages.lock().unwrap();
                match pages.entry(key) {
                    Entry::Occupied(mut seen) => {
                        *seen.get_mut() += 1;
                        return;
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(1);
                    }
                }
            }

            self.observer.page_visit(url.as_str());

            // The permit covers only the network request, so the cap bounds
            // simultaneous fetches rather than logical tasks.
            let html = {
                let _permit = match self.fetch_gate.acquire().await {
                    Ok(permit) => permit,
                    Err(_) => return,
                };
                match fetch_page(&self.client, &url).await {
                    Ok(body) => body,
                    Err(e) => {
                        self.observer.fetch_failed(url.as_str(), &e);
                        return;
                    }
                }
            };

            // Relative links resolve against the crawl root rather than the
            // referring page. Carried over from the reference behavior as a
            // documented invariant.
            let links = extract_links(&html, &self.base_url);

            let mut children = JoinSet::new();
            for link in links {
                children.spawn(self.clone().visit(link));
            }
            while children.join_next().await.is_some() {}
        })
    }
}

/// Crawls a site starting from `base_url` with the given concurrency cap.
///
/// Creates a fresh engine, runs it to completion, and returns the mapping
/// from normalized URL to visit count.
///
/// # Arguments
///
/// * `base_url` - The URL the crawl starts from; also the resolution base
///   and the host filter for the whole crawl
/// * `max_concurrency` - Maximum number of simultaneous in-flight fetches
///
/// # Example
///
/// ```no_run
/// use linktally::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pages = crawl("https://blog.boot.dev", 5).await?;
/// for (page, count) in &pages {
///     println!("{page}: {count}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn crawl(base_url: &str, max_concurrency: usize) -> Result<VisitCounts, CrawlError> {
    let engine = Engine::new(base_url, max_concurrency)?;
    Ok(engine.run().await)
}
