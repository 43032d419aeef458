//! Runtime settings resolved from the environment.

use std::net::SocketAddr;

/// Storage bucket that holds uploaded property media.
pub const DEFAULT_MEDIA_BUCKET: &str = "property-media";

/// Number used in messaging deep links when `CONTACT_WHATSAPP` is unset.
pub const DEFAULT_CONTACT_NUMBER: &str = "2348039743274";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

pub const DEFAULT_STORAGE_REGION: &str = "us-east-1";

pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct Settings {
    /// Privileged connection string for the listings database.
    pub database_url: String,
    pub db_max_connections: u32,
    pub storage: StorageSettings,
    /// Shared secret that unlocks the admin dashboard.
    pub admin_token: String,
    /// Digits only, as used by `https://wa.me/{number}`.
    pub contact_number: String,
    pub bind_addr: SocketAddr,
}

#[derive(Clone, Debug)]
pub struct StorageSettings {
    /// S3-compatible API endpoint of the storage service.
    pub endpoint: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    /// Browser-facing base URL; public object URLs are `{public_url}/{bucket}/{key}`.
    pub public_url: String,
}
