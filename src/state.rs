//! Shared application state for all routes. Built once in `main` and cloned per request.

use crate::config::Settings;
use crate::service::ListingService;
use sha2::{Digest, Sha256};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub listings: ListingService,
    pub settings: Arc<Settings>,
    /// Cookie value that marks a signed-in admin.
    admin_digest: Arc<str>,
}

impl AppState {
    pub fn new(listings: ListingService, settings: Settings) -> Self {
        let admin_digest = session_digest(&settings.admin_token).into();
        AppState {
            listings,
            settings: Arc::new(settings),
            admin_digest,
        }
    }

    pub fn admin_digest(&self) -> &str {
        &self.admin_digest
    }

    pub fn contact_number(&self) -> &str {
        &self.settings.contact_number
    }
}

/// SHA-256 hex digest of the admin token; stored in the session cookie instead
/// of the token itself.
pub fn session_digest(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
