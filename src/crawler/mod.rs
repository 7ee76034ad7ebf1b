//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with status and content-type validation
//! - HTML link extraction
//! - The concurrency-bounded recursive crawl engine
//! - The crawl-event observer interface

mod engine;
mod fetcher;
mod observer;
mod parser;

pub use engine::{crawl, Engine, VisitCounts, DEFAULT_MAX_CONCURRENCY};
pub use fetcher::{build_http_client, fetch_page};
pub use observer::{CrawlObserver, TracingObserver};
pub use parser::extract_links;
