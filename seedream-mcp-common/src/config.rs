//! Configuration module for loading environment variables and settings.

use crate::error::ConfigError;
use std::path::PathBuf;

/// Default fal.ai API base URL.
pub const DEFAULT_API_BASE: &str = "https://fal.run";

/// Default directory for downloaded images, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "images";

/// Application configuration loaded from environment variables.
///
/// The API key is optional at startup: a missing `FAL_KEY` must not keep the
/// server from starting or listing tools, it only makes generation calls
/// return a configuration error.
#[derive(Debug, Clone)]
pub struct Config {
    /// fal.ai API key, if available
    pub fal_key: Option<String>,
    /// fal.ai API base URL
    pub api_base: String,
    /// Directory downloaded images are written to
    pub output_dir: PathBuf,
    /// HTTP server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables and .env file.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if PORT is set but not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let fal_key = std::env::var("FAL_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let api_base = std::env::var("FAL_API_BASE")
            .ok()
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let output_dir = std::env::var("SEEDREAM_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| {
                ConfigError::invalid_value("PORT", format!("expected a port number, got '{raw}'"))
            })?,
            Err(_) => 8080,
        };

        Ok(Self {
            fal_key,
            api_base,
            output_dir,
            port,
        })
    }

    /// The API key, or a per-call configuration error when it is absent.
    pub fn require_fal_key(&self) -> Result<&str, ConfigError> {
        self.fal_key.as_deref().ok_or(ConfigError::MissingApiKey)
    }

    /// Full URL for a model endpoint path under the API base.
    pub fn model_endpoint(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_base, endpoint.trim_start_matches('/'))
    }
}
