//! Liveness, readiness and build info for the site.

use crate::contact::COMPANY_NAME;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

/// Readiness report. Only the database is probed; the media bucket is
/// reported as configured because storage has no cheap ping.
#[derive(Debug, Serialize)]
struct Readiness<'a> {
    ready: bool,
    database: &'static str,
    media_bucket: &'a str,
    media_base_url: &'a str,
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn ready(State(state): State<AppState>) -> Response {
    let database_up = match state.listings.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "readiness check: database unreachable");
            false
        }
    };
    let storage = &state.settings.storage;
    let report = Readiness {
        ready: database_up,
        database: if database_up { "ok" } else { "unavailable" },
        media_bucket: &storage.bucket,
        media_base_url: &storage.public_url,
    };
    let status = if database_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report)).into_response()
}

async fn version() -> Json<serde_json::Value> {
    Json(json!({
        "site": COMPANY_NAME,
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
