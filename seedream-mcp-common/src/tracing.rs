//! Tracing initialization.
//!
//! Log output goes to stderr: with the stdio transport, stdout carries the
//! JSON-RPC frames and must stay clean. Filtering is controlled through
//! `RUST_LOG` (default `info`), e.g. `RUST_LOG=seedream_mcp_image=debug`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber with environment-based filtering.
///
/// # Panics
/// Panics if a global subscriber was already set; use [`try_init_tracing`]
/// when initialization may happen more than once (tests).
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Try to initialize tracing, returning `Err` if already initialized.
pub fn try_init_tracing() -> Result<(), ()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|_| ())
}
