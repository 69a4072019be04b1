//! Remote boundary fetch.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{blocking::Client, redirect::Policy};

fn client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!("precinctmap/", env!("CARGO_PKG_VERSION")))
        .redirect(Policy::limited(10))
        .timeout(Duration::from_secs(30))
        .build()
        .context("[io::download] Failed to build HTTP client")
}

/// GET `url` and return the body as text. Any non-success status is an error.
pub(crate) fn fetch_text(url: &str) -> Result<String> {
    client()?
        .get(url)
        .send()
        .with_context(|| format!("[io::download] GET {url}"))?
        .error_for_status()
        .with_context(|| format!("[io::download] GET {url} returned error status"))?
        .text()
        .with_context(|| format!("[io::download] Failed to read body of {url}"))
}
