//! HTTP responder: fetch, flatten, serialize.
//!
//! Failures are logged here and collapse into an opaque 500 for the client.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use netatmo_core::error::ExporterError;
use netatmo_core::flatten::{flatten_with_report, Flattened};

use crate::app_state::AppState;

pub const INTERNAL_SERVER_ERROR_BODY: &str = "Internal Server Error";
pub const CACHE_CONTROL_VALUE: &str = "no-cache, must-revalidate";
pub const EXPIRES_VALUE: &str = "Mon, 24 Oct 1982 05:00:00 GMT";
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

pub fn internal_server_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_BODY).into_response()
}

pub async fn serve_metrics(State(state): State<AppState>) -> Response {
    let source = state.source();
    let creds = state.credentials().clone();

    // Detached so a client disconnect does not cancel the fetch mid-flight.
    let task = tokio::spawn(async move {
        let stations = source.fetch_readings(&creds).await?;
        Ok::<Flattened, ExporterError>(flatten_with_report(&stations))
    });

    let flattened = match task.await {
        Ok(Ok(f)) => f,
        Ok(Err(e)) => {
            tracing::error!(kind = e.kind().as_str(), error = %e, "netatmo fetch failed");
            return internal_server_error();
        }
        Err(e) => {
            tracing::error!(error = %e, "netatmo fetch task aborted");
            return internal_server_error();
        }
    };

    for s in &flattened.skipped {
        tracing::warn!(metric = %s.metric, reason = %s.reason, "skipping non-numeric measurement");
    }

    let body = match serde_json::to_vec(&flattened.metrics) {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(error = %e, "metrics serialization failed");
            return internal_server_error();
        }
    };

    tracing::debug!(metrics = flattened.metrics.len(), "served metrics");

    (
        StatusCode::OK,
        [
            (header::CACHE_CONTROL, CACHE_CONTROL_VALUE),
            (header::EXPIRES, EXPIRES_VALUE),
            (header::CONTENT_TYPE, JSON_CONTENT_TYPE),
        ],
        body,
    )
        .into_response()
}
