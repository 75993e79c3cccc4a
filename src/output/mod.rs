//! User-facing output
//!
//! Two channels: the colorized notification sink for per-URL discoveries
//! and lifecycle lines, and the stats aggregator that keeps a live snapshot
//! of request totals and rates.

pub mod notify;
pub mod stats;

pub use stats::{recount_pages, smooth_rate, spawn_stats_task, SharedStats, StatsSnapshot};
