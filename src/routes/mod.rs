//! Router assembly.

mod admin;
mod common;
mod pages;

pub use admin::{admin_routes, UPLOAD_LIMIT_BYTES};
pub use common::common_routes;
pub use pages::page_routes;

use crate::handlers::pages::not_found;
use crate::state::AppState;
use axum::Router;
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer};

/// Directory served under `/images`.
pub const IMAGES_DIR: &str = "public/images";

/// The whole site: pages, admin, health routes, static images and the 404 fallback.
pub fn app(state: AppState) -> Router {
    app_with_assets(state, Path::new(IMAGES_DIR))
}

pub fn app_with_assets(state: AppState, images: &Path) -> Router {
    let fallback = Router::new().fallback(not_found).with_state(state.clone());
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(page_routes(state.clone()))
        .merge(admin_routes(state))
        .nest_service("/images", ServeDir::new(images))
        .merge(fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(UPLOAD_LIMIT_BYTES)),
        )
}
