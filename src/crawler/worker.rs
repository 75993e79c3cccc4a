//! Request worker
//!
//! One worker owns one candidate URL from a batch. It keeps retrying the
//! request until a response arrives (transport failures are never terminal
//! by default), classifies the status against the accepted set, and in
//! scraper mode folds extracted directories into its report. Workers never
//! touch the shared pages map; that write belongs to the dispatch engine.

use crate::config::Config;
use crate::crawler::fetcher::{fetch, ProbeMethod};
use crate::crawler::scrape::extract_targets;
use crate::output::notify;
use crate::state::CrawlState;
use reqwest::Client;
use std::sync::Arc;
use url::Url;

/// A URL confirmed (or trusted) to exist, with its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub url: String,
    pub status: u16,
}

/// Everything one worker discovered: the probed URL when its status was
/// accepted, plus any directories the scraper pulled out of the body
#[derive(Debug, Default)]
pub struct ProbeReport {
    pub hits: Vec<Hit>,
}

/// Picks the method for one attempt
///
/// The scraper needs bodies, so it forces GET. Otherwise a 50/50 pick per
/// attempt halves bandwidth for pure status probing. One process-wide RNG;
/// no per-call seeding.
fn choose_method(scraper_enabled: bool) -> ProbeMethod {
    if scraper_enabled || rand::random::<bool>() {
        ProbeMethod::Get
    } else {
        ProbeMethod::Head
    }
}

/// Probes one candidate URL until it has an answer
///
/// Transport errors sleep out the configured backoff and try again; with no
/// retry cap configured the worker simply never gives up. A response, once
/// obtained, always produces a report: empty for a rejected status, one or
/// more hits for an accepted one.
pub async fn probe(
    client: Client,
    config: Arc<Config>,
    state: Arc<CrawlState>,
    url: String,
) -> ProbeReport {
    let mut attempts: u32 = 0;

    loop {
        let method = choose_method(config.scraper_enabled);

        match fetch(&client, &url, method).await {
            Ok(response) => {
                state.record_request();

                if !config.is_accepted(response.status) {
                    return ProbeReport::default();
                }

                notify::hit("BUSTER", &url, response.status);

                let mut report = ProbeReport::default();
                report.hits.push(Hit {
                    url: url.clone(),
                    status: response.status,
                });

                if config.scraper_enabled {
                    scrape_into(&url, &response.body, &mut report);
                }

                return report;
            }
            Err(err) => {
                attempts += 1;

                if let Some(cap) = config.max_retries {
                    if attempts >= cap {
                        tracing::warn!(
                            "giving up on {} after {} failed attempts: {}",
                            url,
                            attempts,
                            err
                        );
                        return ProbeReport::default();
                    }
                }

                tracing::debug!("transport error for {} (attempt {}): {}", url, attempts, err);
                tokio::time::sleep(config.retry_backoff).await;
            }
        }
    }
}

/// Merges scraped directories into the report as trusted hits
///
/// A directory referenced by a found page is taken to exist without an
/// extra verification fetch; it inherits status 200 from the page that
/// linked it.
fn scrape_into(page: &str, body: &str, report: &mut ProbeReport) {
    let Ok(page_url) = Url::parse(page) else {
        return;
    };

    for target in extract_targets(body, &page_url) {
        if report.hits.iter().any(|hit| hit.url == target) {
            continue;
        }
        notify::hit("SCRAPER", &target, 200);
        report.hits.push(Hit {
            url: target,
            status: 200,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::fetcher::build_http_client;
    use std::collections::HashSet;
    use std::time::Duration;
    use wiremock::matchers::path;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base: &str, accepted: &[i32], scraper: bool) -> Arc<Config> {
        Arc::new(Config {
            base_url: Url::parse(base).unwrap(),
            wordlist: vec![],
            max_depth: 1,
            max_concurrency: 10,
            accepted_codes: accepted.iter().copied().collect::<HashSet<i32>>(),
            scraper_enabled: scraper,
            retry_backoff: Duration::from_millis(10),
            max_retries: None,
        })
    }

    #[tokio::test]
    async fn test_accepted_status_is_a_hit() {
        let server = MockServer::start().await;
        Mock::given(path("/admin"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let config = test_config(&server.uri(), &[200], false);
        let state = Arc::new(CrawlState::new());
        let client = build_http_client().unwrap();

        let url = format!("{}/admin", server.uri());
        let report = probe(client, config, state.clone(), url.clone()).await;

        assert_eq!(report.hits, vec![Hit { url, status: 200 }]);
        assert_eq!(state.total_requests(), 1);
    }

    #[tokio::test]
    async fn test_rejected_status_is_empty() {
        let server = MockServer::start().await;
        Mock::given(path("/login"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let config = test_config(&server.uri(), &[200, 301], false);
        let state = Arc::new(CrawlState::new());
        let client = build_http_client().unwrap();

        let report = probe(client, config, state.clone(), format!("{}/login", server.uri())).await;

        assert!(report.hits.is_empty());
        // The response still counts toward the request total
        assert_eq!(state.total_requests(), 1);
    }

    #[tokio::test]
    async fn test_redirect_status_accepted_when_configured() {
        let server = MockServer::start().await;
        Mock::given(path("/old"))
            .respond_with(ResponseTemplate::new(302).insert_header("location", "/new"))
            .mount(&server)
            .await;

        let config = test_config(&server.uri(), &[200, 302], false);
        let state = Arc::new(CrawlState::new());
        let client = build_http_client().unwrap();

        let url = format!("{}/old", server.uri());
        let report = probe(client, config, state, url.clone()).await;

        assert_eq!(report.hits, vec![Hit { url, status: 302 }]);
    }

    #[tokio::test]
    async fn test_scraper_merges_discovered_directories() {
        let server = MockServer::start().await;
        let body = r#"<html><body><a href="/hidden/area/page.html">x</a></body></html>"#;
        Mock::given(path("/admin"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let config = test_config(&server.uri(), &[200], true);
        let state = Arc::new(CrawlState::new());
        let client = build_http_client().unwrap();

        let url = format!("{}/admin", server.uri());
        let report = probe(client, config, state, url.clone()).await;

        assert_eq!(report.hits.len(), 2);
        assert_eq!(report.hits[0], Hit { url, status: 200 });
        assert_eq!(
            report.hits[1],
            Hit {
                url: format!("{}/hidden/area", server.uri()),
                status: 200
            }
        );
    }

    #[tokio::test]
    async fn test_retry_cap_abandons_unreachable_url() {
        let mut config = test_config("http://127.0.0.1:1", &[200], false);
        Arc::get_mut(&mut config).unwrap().max_retries = Some(3);

        let state = Arc::new(CrawlState::new());
        let client = build_http_client().unwrap();

        let report = probe(
            client,
            config,
            state.clone(),
            "http://127.0.0.1:1/x".to_string(),
        )
        .await;

        assert!(report.hits.is_empty());
        // No response was ever received, so nothing was counted
        assert_eq!(state.total_requests(), 0);
    }
}
