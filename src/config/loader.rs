//! Load settings from environment variables. Missing credentials fail startup.

use crate::config::types::*;
use crate::error::ConfigError;
use std::net::SocketAddr;

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::MissingVar(key));

        let database_url = require("DATABASE_URL")?;
        let storage = StorageSettings {
            endpoint: require("STORAGE_ENDPOINT")?,
            region: get("STORAGE_REGION").unwrap_or_else(|| DEFAULT_STORAGE_REGION.into()),
            access_key_id: require("STORAGE_ACCESS_KEY_ID")?,
            secret_access_key: require("STORAGE_SECRET_ACCESS_KEY")?,
            bucket: get("STORAGE_BUCKET").unwrap_or_else(|| DEFAULT_MEDIA_BUCKET.into()),
            public_url: require("STORAGE_PUBLIC_URL")?.trim_end_matches('/').to_string(),
        };
        let admin_token = require("ADMIN_TOKEN")?;

        let contact_number = get("CONTACT_WHATSAPP").unwrap_or_else(|| DEFAULT_CONTACT_NUMBER.into());
        if !contact_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Invalid {
                var: "CONTACT_WHATSAPP",
                reason: "expected digits only".into(),
            });
        }

        let bind_addr: SocketAddr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let db_max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        Ok(Settings {
            database_url,
            db_max_connections,
            storage,
            admin_token,
            contact_number,
            bind_addr,
        })
    }
}
