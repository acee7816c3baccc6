//! Chat relay: forward a query to the upstream QA API.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::error::RelayError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskBody {
    #[serde(default)]
    pub query: Option<String>,
}

/// Pull a usable query out of the request body.
///
/// Bodies that fail to parse are treated the same as a missing query.
pub(crate) fn require_query(body: Result<Json<AskBody>, JsonRejection>) -> Result<String, RelayError> {
    let Ok(Json(body)) = body else {
        return Err(RelayError::MissingQuery);
    };
    match body.query {
        Some(query) if !query.trim().is_empty() => Ok(query),
        _ => Err(RelayError::MissingQuery),
    }
}

/// `POST /ask`: relay `{ query }` upstream and return its JSON unchanged.
pub async fn ask(
    State(state): State<AppState>,
    body: Result<Json<AskBody>, JsonRejection>,
) -> Result<Json<Value>, RelayError> {
    let query = require_query(body)?;

    match state.upstream.ask(&query).await {
        Ok(answer) => {
            tracing::info!(%query, "upstream answered");
            Ok(Json(answer))
        }
        Err(e) => {
            tracing::error!(error = %e, %query, "error querying upstream QA API");
            Err(RelayError::Upstream(e))
        }
    }
}

#[cfg(test)]
#[path = "ask_test.rs"]
mod tests;
