//! Crawl event observer
//!
//! The engine reports progress and per-task failures through this interface
//! instead of logging to any particular sink itself, so output stays
//! swappable (console, test collector, or nothing at all).

use crate::FetchError;

/// Receives structured events emitted by the crawl engine
pub trait CrawlObserver: Send + Sync {
    /// A page passed the visit-state check and is about to be fetched for
    /// the first time.
    fn page_visit(&self, url: &str);

    /// A fetch failed; the page stays counted but its subtree is abandoned
    /// for this run.
    fn fetch_failed(&self, url: &str, error: &FetchError);
}

/// Observer that forwards crawl events to the `tracing` subscriber
pub struct TracingObserver;

impl CrawlObserver for TracingObserver {
    fn page_visit(&self, url: &str) {
        tracing::info!("crawling {}", url);
    }

    fn fetch_failed(&self, url: &str, error: &FetchError) {
        tracing::warn!("fetch failed for {}: {}", url, error);
    }
}
