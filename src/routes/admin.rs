//! Admin routes: sign-in, dashboard form actions and the read-only JSON API.

use crate::handlers::admin;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};
use tower_cookies::CookieManagerLayer;

/// Largest accepted property form, files included.
pub const UPLOAD_LIMIT_BYTES: usize = 100 * 1024 * 1024;

pub fn admin_routes(state: AppState) -> Router {
    Router::new()
        .route("/admin", get(admin::login_form))
        .route("/admin/login", post(admin::login))
        .route("/admin/logout", post(admin::logout))
        .route("/admin/dashboard", get(admin::dashboard))
        .route(
            "/admin/properties",
            post(admin::save_property).layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        .route("/admin/properties/:id/delete", post(admin::delete_property))
        .route("/admin/locations", post(admin::create_location))
        .route("/admin/property-types", post(admin::create_property_type))
        .route("/admin/media/:id/delete", post(admin::delete_media))
        .route("/admin/api/properties", get(admin::api_properties))
        .route("/admin/api/properties/:id", get(admin::api_property))
        .route("/admin/api/locations", get(admin::api_locations))
        .route("/admin/api/property-types", get(admin::api_property_types))
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
