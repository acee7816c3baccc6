//! Local name search over the restaurant store.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::error::RelayError;
use crate::state::AppState;
use crate::store::RestaurantRecord;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub restaurants: Vec<RestaurantRecord>,
}

/// `GET /search?query=`: case-insensitive substring match on restaurant name.
///
/// A missing `query` is a client error; an empty one matches everything.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, RelayError> {
    let query = params.query.ok_or(RelayError::MissingQuery)?;
    let restaurants: Vec<RestaurantRecord> = state.store.search(&query).into_iter().cloned().collect();
    tracing::debug!(%query, matches = restaurants.len(), "search");
    Ok(Json(SearchResponse { restaurants }))
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
