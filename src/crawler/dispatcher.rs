//! Dispatch engine
//!
//! The engine walks the discovery tree: one full wordlist sweep per root,
//! fanned out in batches no larger than the concurrency ceiling, then one
//! recursive sweep per newly discovered directory until the depth budget
//! runs out. Results are collected with an exact join per batch; the shared
//! pages map is written only here, after each batch has fully drained.

use crate::config::Config;
use crate::crawler::fetcher::build_http_client;
use crate::crawler::worker::probe;
use crate::state::CrawlState;
use crate::Result;
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Coordinates workers across batches and depth levels
pub struct Dispatcher {
    config: Arc<Config>,
    state: Arc<CrawlState>,
    client: Client,
}

impl Dispatcher {
    pub fn new(config: Arc<Config>, state: Arc<CrawlState>) -> Result<Self> {
        let client = build_http_client()?;
        Ok(Self {
            config,
            state,
            client,
        })
    }

    /// Runs the whole crawl, starting at depth 1 from the base URL
    pub async fn run(&self) -> Result<()> {
        let base = self
            .config
            .base_url
            .as_str()
            .trim_end_matches('/')
            .to_string();
        self.crawl(base, 1).await
    }

    /// Sweeps one root with the full wordlist, then recurses
    ///
    /// Beyond the depth budget this returns immediately without issuing a
    /// single request. Within it, the wordlist is partitioned into chunks
    /// of at most `max_concurrency` workers; every worker of a chunk is
    /// joined before the next chunk starts, so the ceiling holds and no
    /// report can be dropped by timing. Discovered URLs enter the shared
    /// state exactly once; only first-time discoveries seed the next depth.
    pub fn crawl(&self, base: String, depth: u32) -> BoxFuture<'_, Result<()>> {
        async move {
            if depth > self.config.max_depth {
                return Ok(());
            }

            tracing::debug!("sweeping {} at depth {}", base, depth);
            let mut next_round: Vec<String> = Vec::new();

            for batch in self.config.wordlist.chunks(self.config.max_concurrency) {
                let mut workers = JoinSet::new();

                for word in batch {
                    let url = format!("{}/{}", base, word);
                    workers.spawn(probe(
                        self.client.clone(),
                        self.config.clone(),
                        self.state.clone(),
                        url,
                    ));
                }

                // Drain the set to exhaustion: one report per spawned worker
                while let Some(joined) = workers.join_next().await {
                    let report = joined?;
                    for hit in report.hits {
                        if self.state.record_page(&hit.url, hit.status) {
                            next_round.push(hit.url);
                        }
                    }
                }
            }

            for discovered in next_round {
                self.crawl(discovered, depth + 1).await?;
            }

            Ok(())
        }
        .boxed()
    }
}
