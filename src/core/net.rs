// src/core/net.rs
// Blocking HTTP GET over reqwest, wrapped in the bounded retry.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::options::CollectOptions;
use crate::core::retry::with_retry;
use crate::error::{Error, Result};

/// Client with the identifying User-Agent and a per-request timeout.
pub fn client(user_agent: &str, timeout: Duration) -> Result<Client> {
    Ok(Client::builder().user_agent(user_agent).timeout(timeout).build()?)
}

/// One GET. Anything outside 2xx is an error.
pub fn http_get(client: &Client, url: &str) -> Result<String> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    debug!("GET {url} → {status}");
    if !status.is_success() {
        return Err(Error::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp.text()?)
}

/// Fetch the listing page, retrying per `opts.retry`. The final failure propagates.
pub fn fetch_page(opts: &CollectOptions) -> Result<String> {
    let client = client(&opts.user_agent, opts.timeout)?;
    let html = with_retry(&opts.retry, "GET listing page", |_| http_get(&client, &opts.url))?;
    info!("Fetched {} ({} bytes)", opts.url, html.len());
    Ok(html)
}
