//! Shared crawl state
//!
//! `CrawlState` is the single source of truth for "already visited": a map
//! from every classified URL to its recorded status code, plus the running
//! request counter. One instance is created at startup and shared between
//! the dispatch engine (which writes the map, only after a batch barrier),
//! the request workers (which only bump the counter), and the stats
//! aggregator (which reads both).

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Process-wide crawl state shared across the run
#[derive(Debug, Default)]
pub struct CrawlState {
    /// Every URL ever classified as found, with its recorded status
    pages: Mutex<HashMap<String, u16>>,

    /// Total responses received, across all depths and retries
    total_requests: AtomicU64,
}

impl CrawlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a found URL, returning true if it was new
    ///
    /// Re-recording an already-present URL is a no-op: the first recorded
    /// status wins and the method returns false, so callers can use the
    /// return value to decide whether the URL enters the next round.
    pub fn record_page(&self, url: &str, status: u16) -> bool {
        let mut pages = self.pages.lock().unwrap_or_else(|e| e.into_inner());
        if pages.contains_key(url) {
            return false;
        }
        pages.insert(url.to_string(), status);
        true
    }

    /// Returns the recorded status for a URL, if any
    pub fn page_status(&self, url: &str) -> Option<u16> {
        let pages = self.pages.lock().unwrap_or_else(|e| e.into_inner());
        pages.get(url).copied()
    }

    /// Number of URLs recorded as found
    pub fn page_count(&self) -> usize {
        let pages = self.pages.lock().unwrap_or_else(|e| e.into_inner());
        pages.len()
    }

    /// Snapshot of the recorded statuses, for scanning
    pub fn page_statuses(&self) -> Vec<u16> {
        let pages = self.pages.lock().unwrap_or_else(|e| e.into_inner());
        pages.values().copied().collect()
    }

    /// Bumps the total request counter by one
    pub fn record_request(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Total responses received so far; monotonically non-decreasing
    pub fn total_requests(&self) -> u64 {
        self.total_requests.load(Ordering::Relaxed)
    }
}
