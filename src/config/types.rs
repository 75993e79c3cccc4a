use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// Default maximum recursion depth
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Default concurrency ceiling
pub const DEFAULT_CONCURRENCY: usize = 50;

/// Default backoff between retries of a failed request
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(100);

/// Inclusive bounds for the concurrency ceiling
pub const CONCURRENCY_RANGE: (usize, usize) = (10, 900);

/// Immutable configuration for one crawl run
#[derive(Debug, Clone)]
pub struct Config {
    /// The URL the wordlist sweep starts from
    pub base_url: Url,

    /// Path segments to probe, in file order, empty lines removed
    pub wordlist: Vec<String>,

    /// Maximum recursion depth; depth 1 is the initial sweep
    pub max_depth: u32,

    /// Maximum number of requests in flight at once
    pub max_concurrency: usize,

    /// Status codes treated as "resource exists". Entries that failed to
    /// parse on the command line are kept as the sentinel -1, which can
    /// never equal a real status code.
    pub accepted_codes: HashSet<i32>,

    /// Whether to extract links from found pages and explore them
    pub scraper_enabled: bool,

    /// Pause between retries of a request that died in transport
    pub retry_backoff: Duration,

    /// Optional cap on retries per URL; None retries until a response
    pub max_retries: Option<u32>,
}

impl Config {
    /// Returns true if the given status code is in the accepted set
    pub fn is_accepted(&self, status: u16) -> bool {
        self.accepted_codes.contains(&i32::from(status))
    }
}
