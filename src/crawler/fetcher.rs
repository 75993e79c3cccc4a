//! HTTP client adapter
//!
//! One shared reqwest client, configured once at startup: short timeouts, a
//! bounded idle connection pool, and redirects reported rather than chased
//! (a 3xx status is a classification input, not something to follow).
//! Retry policy lives in the worker, not here.

use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Connect and per-call timeout applied to every request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Idle connections kept per host for reuse across probes
const MAX_IDLE_PER_HOST: usize = 50;

/// HTTP method used for a single probe attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    Get,
    Head,
}

/// Response to a single probe attempt
#[derive(Debug)]
pub struct ProbeResponse {
    /// HTTP status code as returned, redirects included
    pub status: u16,

    /// Body text for GET probes; empty for HEAD
    pub body: String,
}

/// Builds the shared HTTP client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(REQUEST_TIMEOUT)
        .redirect(Policy::none())
        .pool_max_idle_per_host(MAX_IDLE_PER_HOST)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Issues one request and returns its status and body
///
/// Transport failures (refused connections, timeouts, DNS errors) surface
/// as `Err` for the worker's retry loop. Once a status line has been
/// received the attempt counts as answered: a body that fails to download
/// afterwards degrades to an empty string instead of an error.
pub async fn fetch(
    client: &Client,
    url: &str,
    method: ProbeMethod,
) -> reqwest::Result<ProbeResponse> {
    let request = match method {
        ProbeMethod::Get => client.get(url),
        ProbeMethod::Head => client.head(url),
    };

    let response = request.send().await?;
    let status = response.status().as_u16();

    let body = match method {
        ProbeMethod::Get => response.text().await.unwrap_or_default(),
        ProbeMethod::Head => String::new(),
    };

    Ok(ProbeResponse { status, body })
}
