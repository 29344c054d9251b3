use std::path::PathBuf;

use crate::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    /// Shared secret for admin endpoints. Left as `None` when unset so admin
    /// requests fail with a configuration error instead of the server
    /// refusing to start.
    pub admin_password: Option<String>,
    pub bind_address: String,
    /// Directory stored images are written to and served from.
    pub storage_root: PathBuf,
    /// Base URL prepended to stored image paths in upload responses.
    pub public_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        Ok(Self {
            database_url,
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            storage_root: std::env::var("STORAGE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        })
    }
}
