//! HTTP-facing relay errors.
//!
//! Every failure leaves the relay as `{ "error": <message> }`. Upstream
//! detail is logged by the handler and never copied into the body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::upstream::UpstreamError;

pub const MISSING_QUERY_MESSAGE: &str = "Query parameter is required";
pub const UPSTREAM_FAILED_MESSAGE: &str = "AI request to Flask API failed";

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("missing query")]
    MissingQuery,
    #[error("upstream failed: {0}")]
    Upstream(#[from] UpstreamError),
}

impl RelayError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingQuery => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingQuery => MISSING_QUERY_MESSAGE,
            Self::Upstream(_) => UPSTREAM_FAILED_MESSAGE,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.public_message() }))).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
