//! Configuration for a crawl run
//!
//! A run is configured entirely from the command line: a base URL, a
//! wordlist file, the depth and concurrency budgets, and the set of status
//! codes treated as "found". Everything is validated up front; validation
//! failures abort the process before any request is sent.

pub mod types;
pub mod validation;
pub mod wordlist;

pub use types::{
    Config, CONCURRENCY_RANGE, DEFAULT_CONCURRENCY, DEFAULT_MAX_DEPTH, DEFAULT_RETRY_BACKOFF,
};
pub use validation::validate;
pub use wordlist::{load_wordlist, parse_status_codes};
