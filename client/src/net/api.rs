//! HTTP calls to the relay.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (connect, timeout, non-2xx, undecodable body) surfaces as an
//! `ApiError`. The session turns any of them into a single generic bot
//! message, so variants exist for logging rather than for branching.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use serde::Deserialize;
use serde_json::{Value, json};

use super::types::RestaurantCard;

pub const DEFAULT_RELAY_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
    #[error("relay request timed out")]
    Timeout,
    #[error("relay request failed: {0}")]
    Request(String),
    #[error("relay returned status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },
    #[error("relay response decode failed: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// Anything that can carry a query to the relay and bring back its body.
#[async_trait::async_trait]
pub trait AskTransport: Send + Sync {
    /// Send `query` and return the relay's JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport, status, or decode failures.
    async fn ask(&self, query: &str) -> Result<Value, ApiError>;
}

fn ask_endpoint(base_url: &str) -> String {
    format!("{base_url}/ask")
}

fn search_endpoint(base_url: &str) -> String {
    format!("{base_url}/search")
}

fn health_endpoint(base_url: &str) -> String {
    format!("{base_url}/healthz")
}

/// Pull the relay's `{ "error": ... }` message out of a failed response body.
fn error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error)
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    restaurants: Vec<Value>,
}

/// reqwest-backed relay client.
#[derive(Clone, Debug)]
pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    /// Build a client for the relay at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if reqwest rejects the
    /// configuration.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /search?query=`: local name search on the relay.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn search(&self, query: &str) -> Result<Vec<RestaurantCard>, ApiError> {
        let response = self
            .http
            .get(search_endpoint(&self.base_url))
            .query(&[("query", query)])
            .send()
            .await?;
        let text = check_status(response).await?;
        let body: SearchResponse = serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.restaurants.iter().filter_map(RestaurantCard::from_value).collect())
    }

    /// `GET /healthz`, bounded by the same timeout as every other call.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Timeout`] if the relay stalls, or
    /// [`ApiError::Status`] if it answers with a non-2xx status.
    pub async fn health(&self) -> Result<(), ApiError> {
        let response = self.http.get(health_endpoint(&self.base_url)).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(ApiError::Status { status: status.as_u16(), message: error_message(&text) });
    }
    Ok(text)
}

#[async_trait::async_trait]
impl AskTransport for RelayClient {
    async fn ask(&self, query: &str) -> Result<Value, ApiError> {
        let response = self
            .http
            .post(ask_endpoint(&self.base_url))
            .json(&json!({ "query": query }))
            .send()
            .await?;
        let text = check_status(response).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
