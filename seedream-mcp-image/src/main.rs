//! Seedream MCP Image Server
//!
//! MCP server for Bytedance Seedream image generation on fal.ai.

use anyhow::Result;
use clap::Parser;
use seedream_mcp_common::{Config, TransportArgs};
use seedream_mcp_image::SeedreamServer;

/// Command-line arguments for the image server.
#[derive(Parser, Debug)]
#[command(name = "seedream-mcp-image")]
#[command(about = "MCP server for Bytedance Seedream image generation on fal.ai")]
struct Args {
    /// Transport configuration
    #[command(flatten)]
    transport: TransportArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    seedream_mcp_common::tracing::init_tracing();

    let args = Args::parse();

    let config = Config::from_env()?;
    if config.fal_key.is_none() {
        tracing::warn!(
            "FAL_KEY is not set; generation calls will return a configuration error until it is provided"
        );
    }
    tracing::info!(
        api_base = %config.api_base,
        output_dir = %config.output_dir.display(),
        "Configuration loaded"
    );

    let server = SeedreamServer::new(config);

    let transport = args.transport.into_transport();
    seedream_mcp_common::serve(server, transport).await?;
    Ok(())
}
