//! Quotes fetched from a public quotes API for the online screen.
//!
//! One unauthenticated GET, no retry. The caller degrades any failure to an
//! empty list; nothing here touches the local quote store.

use crate::config::RemoteConfig;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("invalid payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One entry of the remote list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteQuote {
    #[serde(rename = "q")]
    pub text: String,
    #[serde(rename = "a")]
    pub author: String,
}

/// Decode a response body and keep the first `limit` entries.
pub fn parse_quotes(body: &str, limit: usize) -> Result<Vec<RemoteQuote>, RemoteError> {
    let mut quotes: Vec<RemoteQuote> = serde_json::from_str(body)?;
    quotes.truncate(limit);
    Ok(quotes)
}

pub fn build_client(config: &RemoteConfig) -> Result<reqwest::Client, RemoteError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(concat!("dailyquote/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

pub async fn fetch_quotes(
    client: &reqwest::Client,
    config: &RemoteConfig,
) -> Result<Vec<RemoteQuote>, RemoteError> {
    let response = client.get(&config.url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(RemoteError::Status(status));
    }
    let body = response.text().await?;
    parse_quotes(&body, config.limit)
}

/// Fetch for the online screen: failures are logged and become an empty list.
pub async fn fetch_or_empty(client: &reqwest::Client, config: &RemoteConfig) -> Vec<RemoteQuote> {
    match fetch_quotes(client, config).await {
        Ok(quotes) => {
            tracing::info!(count = quotes.len(), url = %config.url, "Fetched remote quotes");
            quotes
        }
        Err(e) => {
            tracing::error!(error = %e, url = %config.url, "Error fetching quotes");
            Vec::new()
        }
    }
}
