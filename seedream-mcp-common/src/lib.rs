//! Shared library for the Seedream MCP server.
//!
//! Configuration, the error taxonomy, the Seedream model registry, local
//! artifact persistence, and MCP server plumbing (transport selection,
//! serving loop, tracing init).

pub mod artifacts;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod tracing;
pub mod transport;

#[cfg(test)]
mod artifacts_test;

pub use artifacts::{ArtifactStore, image_filename};
pub use config::Config;
pub use error::{ConfigError, DownloadError, Error, Result};
pub use models::{ModelRegistry, SEEDREAM_ASPECT_RATIOS, SeedreamModel, Sizing};
pub use server::{ServerError, serve};
pub use transport::{Transport, TransportArgs, TransportMode};
