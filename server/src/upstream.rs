//! Upstream QA API client.
//!
//! DESIGN
//! ======
//! The relay never interprets the upstream answer; it only needs a JSON
//! value to hand back. `AskUpstream` is the seam handlers depend on, so
//! tests can swap in a mock without a network. `HttpUpstream` is the real
//! implementation: one `GET <endpoint>?query=...` per call, bounded by the
//! configured request and connect timeouts.

use serde_json::Value;

use crate::config::UpstreamTimeouts;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while querying the upstream QA API.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request did not complete within the configured timeout.
    #[error("upstream request timed out")]
    Timeout,

    /// The request could not be sent or the body could not be read.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The upstream answered with a non-success HTTP status.
    #[error("upstream response error: status {status}: {body}")]
    Status { status: u16, body: String },

    /// The upstream body was not valid JSON.
    #[error("upstream response parse failed: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Request(err.to_string()) }
    }
}

// =============================================================================
// TRAIT
// =============================================================================

/// Something that can answer a restaurant query with a JSON body.
#[async_trait::async_trait]
pub trait AskUpstream: Send + Sync {
    /// Forward `query` and return the upstream body unchanged.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] on transport failure, timeout, non-2xx
    /// status, or a body that is not JSON.
    async fn ask(&self, query: &str) -> Result<Value, UpstreamError>;
}

// =============================================================================
// HTTP IMPLEMENTATION
// =============================================================================

pub struct HttpUpstream {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpUpstream {
    /// Build a client for `endpoint` with explicit timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::HttpClientBuild`] if reqwest rejects the
    /// client configuration.
    pub fn new(endpoint: impl Into<String>, timeouts: UpstreamTimeouts) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request())
            .connect_timeout(timeouts.connect())
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: endpoint.into() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl AskUpstream for HttpUpstream {
    async fn ask(&self, query: &str) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("query", query)])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(UpstreamError::Status { status: status.as_u16(), body: text });
        }
        serde_json::from_str(&text).map_err(|e| UpstreamError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
