//! Live statistics aggregation
//!
//! A background task samples the shared crawl state once per second and
//! rewrites a shared snapshot: total requests, a smoothed request rate, and
//! the found/redirect counts recomputed from scratch on every tick. The
//! snapshot is readable at any time, for the end-of-run summary and for the
//! interrupt handler.

use crate::state::CrawlState;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Point-in-time view of the crawl statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsSnapshot {
    /// Total responses received since startup
    pub total_requests: u64,

    /// Smoothed requests per second
    pub requests_per_second: u64,

    /// URLs whose recorded status is in the accepted set
    pub total_found: u64,

    /// URLs whose recorded status is 302 or 304
    pub total_redirect: u64,
}

impl StatsSnapshot {
    /// One-line summary used for the end-of-run and interrupt reports
    pub fn summary(&self) -> String {
        format!(
            "Total Requests: {} , Request per sec: {}, HTTP OK: {} , HTTP Redirect: {}",
            self.total_requests, self.requests_per_second, self.total_found, self.total_redirect
        )
    }
}

/// Handle to the snapshot shared between the aggregator and its readers
pub type SharedStats = Arc<Mutex<StatsSnapshot>>;

/// Smooths the request rate against the previous sample
///
/// The first sample seeds the rate directly; afterwards each tick averages
/// the previous rate with the new delta.
pub fn smooth_rate(previous_rate: u64, delta: u64) -> u64 {
    if previous_rate == 0 {
        delta
    } else {
        (previous_rate + delta) / 2
    }
}

/// Recounts found and redirect totals from the recorded statuses
///
/// The two counts are independent: a 302 that is also in the accepted set
/// contributes to both.
pub fn recount_pages(statuses: &[u16], accepted: &HashSet<i32>) -> (u64, u64) {
    let mut found = 0;
    let mut redirect = 0;

    for &status in statuses {
        if accepted.contains(&i32::from(status)) {
            found += 1;
        }
        if status == 302 || status == 304 {
            redirect += 1;
        }
    }

    (found, redirect)
}

/// Spawns the once-per-second aggregator task
///
/// The task runs for the life of the process; the returned handle is only
/// used to keep it alive alongside the crawl.
pub fn spawn_stats_task(
    state: Arc<CrawlState>,
    accepted: HashSet<i32>,
) -> (SharedStats, JoinHandle<()>) {
    let stats: SharedStats = Arc::new(Mutex::new(StatsSnapshot::default()));
    let shared = stats.clone();

    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // First tick fires immediately; skip it so deltas cover a full second
        interval.tick().await;

        let mut previous_total: u64 = 0;

        loop {
            interval.tick().await;

            let total = state.total_requests();
            let (found, redirect) = recount_pages(&state.page_statuses(), &accepted);

            let mut snapshot = shared.lock().unwrap_or_else(|e| e.into_inner());
            if previous_total > 0 {
                let delta = total.saturating_sub(previous_total);
                snapshot.requests_per_second = smooth_rate(snapshot.requests_per_second, delta);
                previous_total = total;
            } else {
                previous_total = total;
            }
            snapshot.total_requests = total;
            snapshot.total_found = found;
            snapshot.total_redirect = redirect;
        }
    });

    (stats, handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_rate_seeds_from_first_delta() {
        assert_eq!(smooth_rate(0, 40), 40);
    }

    #[test]
    fn test_smooth_rate_averages() {
        assert_eq!(smooth_rate(40, 20), 30);
        assert_eq!(smooth_rate(30, 31), 30);
    }

    #[test]
    fn test_recount_found_only() {
        let accepted: HashSet<i32> = [200, 301].into_iter().collect();
        let (found, redirect) = recount_pages(&[200, 200, 301, 404], &accepted);
        assert_eq!(found, 3);
        assert_eq!(redirect, 0);
    }

    #[test]
    fn test_recount_302_counts_as_both() {
        let accepted: HashSet<i32> = [200, 302].into_iter().collect();
        let (found, redirect) = recount_pages(&[200, 302, 304], &accepted);
        // 302 is accepted and a redirect; 304 is only a redirect here
        assert_eq!(found, 2);
        assert_eq!(redirect, 2);
    }

    #[test]
    fn test_recount_redirect_not_accepted() {
        let accepted: HashSet<i32> = [200].into_iter().collect();
        let (found, redirect) = recount_pages(&[302], &accepted);
        assert_eq!(found, 0);
        assert_eq!(redirect, 1);
    }

    #[tokio::test]
    async fn test_snapshot_tracks_state() {
        let state = Arc::new(CrawlState::new());
        state.record_page("http://h/admin", 200);
        state.record_request();
        state.record_request();

        let accepted: HashSet<i32> = [200].into_iter().collect();
        let (stats, handle) = spawn_stats_task(state.clone(), accepted);

        // Wait out at least one full tick
        tokio::time::sleep(Duration::from_millis(1300)).await;

        let snapshot = *stats.lock().unwrap();
        assert_eq!(snapshot.total_requests, 2);
        assert_eq!(snapshot.total_found, 1);
        assert_eq!(snapshot.total_redirect, 0);

        handle.abort();
    }
}
