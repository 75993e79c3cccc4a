//! Crawl engine
//!
//! This module contains the probing pipeline:
//! - HTTP client construction and single-attempt fetching
//! - Request workers with retry and response classification
//! - HTML link extraction for the scraper mode
//! - Batch dispatch and depth-limited recursion

mod dispatcher;
mod fetcher;
mod scrape;
mod worker;

pub use dispatcher::Dispatcher;
pub use fetcher::{build_http_client, fetch, ProbeMethod, ProbeResponse};
pub use scrape::extract_targets;
pub use worker::{probe, Hit, ProbeReport};
