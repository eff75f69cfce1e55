//! Axum router wiring.
//!
//! Every path and method lands on the metrics responder.

use axum::Router;

use crate::{app_state::AppState, responder};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(responder::serve_metrics)
        .with_state(state)
}
