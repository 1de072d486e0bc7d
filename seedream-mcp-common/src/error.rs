//! Error types for the Seedream MCP server.
//!
//! One unified `Error` covers the four fault classes the handlers deal with:
//!
//! - `Error::Validation`: malformed or out-of-range caller input, rejected
//!   before any network call
//! - `Error::Config`: a required credential or setting is missing/invalid
//! - `Error::Upstream`: the fal.ai generation call failed (includes endpoint
//!   and HTTP status)
//! - `Error::Download`: persisting one image locally failed; callers treat
//!   this as per-image and non-fatal

use thiserror::Error;

/// Unified error type for the Seedream MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors (missing API key, invalid env values)
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A single image could not be persisted locally
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// Upstream generation errors with endpoint and HTTP status context
    #[error("Upstream error for {endpoint} (HTTP {status_code}): {message}")]
    Upstream {
        /// The endpoint that was called
        endpoint: String,
        /// HTTP status code returned (0 when the request never completed)
        status_code: u16,
        /// Error message from the API or describing the failure
        message: String,
    },

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// File system I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new upstream error with endpoint, status code, and message.
    pub fn upstream(
        endpoint: impl Into<String>,
        status_code: u16,
        message: impl Into<String>,
    ) -> Self {
        Error::Upstream {
            endpoint: endpoint.into(),
            status_code,
            message: message.into(),
        }
    }

    /// Create a new validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The fal.ai API key is not available
    #[error(
        "FAL_KEY is not set. Export your fal.ai API key (see https://fal.ai/dashboard/keys) \
         and retry; the server keeps running without it but cannot generate images"
    )]
    MissingApiKey,

    /// An environment variable has an invalid value
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl ConfigError {
    /// Create a new invalid value error.
    pub fn invalid_value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue(name.into(), reason.into())
    }
}

/// Artifact download errors.
///
/// Produced by the artifact store when fetching or writing a single image.
/// Handlers never escalate these: a failed image is recorded inline in the
/// report next to its original URL and the remaining images proceed.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The HTTP request could not be completed
    #[error("Download request for {url} failed: {message}")]
    Request {
        /// The remote URL being fetched
        url: String,
        /// Error message describing the failure
        message: String,
    },

    /// The remote responded with a non-success status
    #[error("Download of {url} failed with HTTP {status_code}")]
    Status {
        /// The remote URL being fetched
        url: String,
        /// HTTP status code returned
        status_code: u16,
    },

    /// Writing the local file failed
    #[error("Failed writing {path}: {message}")]
    Write {
        /// The local path being written
        path: String,
        /// Error message describing the failure
        message: String,
    },

    /// A sync-mode data URL could not be decoded
    #[error("Invalid data URL: {0}")]
    DataUrl(String),
}

impl DownloadError {
    /// Create a new request error.
    pub fn request(url: impl Into<String>, message: impl Into<String>) -> Self {
        DownloadError::Request {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a new status error.
    pub fn status(url: impl Into<String>, status_code: u16) -> Self {
        DownloadError::Status {
            url: url.into(),
            status_code,
        }
    }

    /// Create a new write error.
    pub fn write(path: impl Into<String>, message: impl Into<String>) -> Self {
        DownloadError::Write {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using the unified Error type.
pub type Result<T> = std::result::Result<T, Error>;
