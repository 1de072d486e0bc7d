//! Seedream MCP Image Server Library
//!
//! Text-to-image generation with Bytedance Seedream on fal.ai, exposed as
//! MCP tools.

pub mod handler;
pub mod report;
pub mod server;

pub use handler::{
    BatchOutcome, GenerateImageBatchParams, GenerateImageParams, GenerationOutcome,
    GenerationResult, SeedreamHandler,
};
pub use server::SeedreamServer;
