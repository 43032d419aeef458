//! Modia Properties listing site: public pages, the admin dashboard and the
//! data-access layer over PostgreSQL and S3-compatible object storage.

pub mod admin;
pub mod config;
pub mod contact;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod present;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Settings, StorageSettings};
pub use error::{AppError, ConfigError};
pub use routes::{admin_routes, app, app_with_assets, common_routes, page_routes};
pub use service::ListingService;
pub use state::AppState;
pub use store::{ListingStore, MediaStorage, PgListingStore, S3MediaStorage};
