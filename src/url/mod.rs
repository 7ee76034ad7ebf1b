//! URL handling module for linktally
//!
//! This module provides URL normalization (the canonical dedup key for the
//! crawl engine) and href safety classification.

mod normalize;
mod safety;

pub use normalize::normalize_url;
pub use safety::{classify_href, HrefClass, UnsafeScheme};
