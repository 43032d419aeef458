//! Public site routes.

use crate::handlers::{contact, pages};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/properties", get(pages::listings))
        .route("/properties/:id", get(pages::property_detail))
        .route("/about", get(pages::about))
        .route("/contact", post(contact::contact))
        .with_state(state)
}
