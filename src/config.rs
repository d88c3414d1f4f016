//! Application configuration management

use std::env;

use crate::services::media_db::DEFAULT_SIDECAR_NAME;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Default library root, used when a command gets no directory argument
    pub media_path: String,

    /// Filename of the per-directory metadata sidecar
    pub sidecar_name: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            media_path: env::var("MEDIA_PATH").unwrap_or_else(|_| "./media".to_string()),
            sidecar_name: env::var("SIDECAR_NAME")
                .unwrap_or_else(|_| DEFAULT_SIDECAR_NAME.to_string()),
        }
    }
}
