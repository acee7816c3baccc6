//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the read-only restaurant store and the upstream QA client.
//! Both are built once in `main` and never mutated, so cloning the state
//! per request is just two `Arc` bumps.

use std::sync::Arc;

use crate::store::RestaurantStore;
use crate::upstream::AskUpstream;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RestaurantStore>,
    pub upstream: Arc<dyn AskUpstream>,
}

impl AppState {
    #[must_use]
    pub fn new(store: RestaurantStore, upstream: Arc<dyn AskUpstream>) -> Self {
        Self { store: Arc::new(store), upstream }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
