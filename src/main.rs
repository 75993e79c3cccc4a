//! Burrow command-line entry point

use burrow::config::{self, Config};
use burrow::crawler::Dispatcher;
use burrow::output::{notify, recount_pages, spawn_stats_task, SharedStats};
use burrow::state::CrawlState;
use burrow::ConfigError;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Burrow: recursive content discovery
///
/// Burrow probes a target host with a wordlist of path segments, reports
/// every URL whose status code is in the accepted set, and can recursively
/// sweep directories discovered along the way, either from the wordlist
/// itself or from links scraped out of found pages.
#[derive(Parser, Debug)]
#[command(name = "burrow")]
#[command(version)]
#[command(about = "Recursive content discovery", long_about = None)]
struct Cli {
    /// The URL to crawl
    #[arg(long, value_name = "URL")]
    url: String,

    /// Wordlist file, one path segment per line
    #[arg(long, value_name = "FILE")]
    wordlist: PathBuf,

    /// Maximum recursion depth
    #[arg(long, default_value_t = config::DEFAULT_MAX_DEPTH)]
    depth: u32,

    /// Concurrent connections at a time, a number between 10 and 900
    #[arg(long, default_value_t = config::DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// HTTP status codes considered as 'Page Found', e.g. 200,302,304,401
    #[arg(short = 'c', long = "codes", value_name = "CODES")]
    codes: String,

    /// Enable the scraper engine
    #[arg(long)]
    scraper: bool,

    /// Backoff between retries of a failed request, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 100)]
    retry_backoff_ms: u64,

    /// Cap on retries per URL; retries forever when omitted
    #[arg(long, value_name = "N")]
    max_retries: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match build_config(&cli) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            notify::error(&e.to_string());
            std::process::exit(1);
        }
    };

    let state = Arc::new(CrawlState::new());
    let (stats, _stats_task) = spawn_stats_task(state.clone(), config.accepted_codes.clone());

    spawn_interrupt_handler(stats.clone());

    notify::info(&format!("Starting crawling ({})", config.base_url));

    let dispatcher = match Dispatcher::new(config.clone(), state.clone()) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            notify::error(&format!("Failed to build HTTP client: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = dispatcher.run().await {
        notify::error(&format!("Crawl failed: {}", e));
        std::process::exit(1);
    }

    // Fold in whatever happened since the aggregator's last tick
    let mut snapshot = *stats.lock().unwrap_or_else(|e| e.into_inner());
    snapshot.total_requests = state.total_requests();
    let (found, redirect) = recount_pages(&state.page_statuses(), &config.accepted_codes);
    snapshot.total_found = found;
    snapshot.total_redirect = redirect;

    notify::info(&format!("[Stats] {}", snapshot.summary()));
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("burrow=info,warn"),
            1 => EnvFilter::new("burrow=debug,info"),
            2 => EnvFilter::new("burrow=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Assembles and validates the run configuration from CLI arguments
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let base_url =
        Url::parse(&cli.url).map_err(|e| ConfigError::InvalidUrl(format!("{} ({})", cli.url, e)))?;

    let wordlist = config::load_wordlist(&cli.wordlist)?;
    if wordlist.is_empty() {
        tracing::warn!("wordlist {} has no usable entries", cli.wordlist.display());
    }

    let accepted_codes = config::parse_status_codes(&cli.codes).into_iter().collect();

    let config = Config {
        base_url,
        wordlist,
        max_depth: cli.depth,
        max_concurrency: cli.concurrency,
        accepted_codes,
        scraper_enabled: cli.scraper,
        retry_backoff: Duration::from_millis(cli.retry_backoff_ms),
        max_retries: cli.max_retries,
    };

    config::validate(&config)?;
    Ok(config)
}

/// Prints the current stats and exits on Ctrl-C
///
/// In-flight requests are abandoned, not drained; the snapshot is the last
/// word of an interrupted run.
fn spawn_interrupt_handler(stats: SharedStats) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let snapshot = *stats.lock().unwrap_or_else(|e| e.into_inner());
            notify::info(&format!("[Stats] {}", snapshot.summary()));
            std::process::exit(0);
        }
    });
}
