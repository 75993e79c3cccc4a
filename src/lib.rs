//! Burrow: recursive content discovery for web hosts
//!
//! This crate implements a directory buster with an optional crawler mode.
//! It probes a target host with a wordlist of path segments, classifies the
//! responses against a caller-supplied set of accepted status codes, and can
//! recursively explore directories discovered either by the wordlist sweep
//! or by extracting links from fetched pages.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;

use thiserror::Error;

/// Main error type for burrow operations
#[derive(Debug, Error)]
pub enum BurrowError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Unable to open wordlist: {0}")]
    Wordlist(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for burrow operations
pub type Result<T> = std::result::Result<T, BurrowError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use output::StatsSnapshot;
pub use state::CrawlState;
