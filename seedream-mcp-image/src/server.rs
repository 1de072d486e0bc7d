//! MCP server implementation for the Seedream image server.
//!
//! Exposes two tools:
//! - `generate_image`: one prompt, full parameter surface
//! - `generate_image_batch`: 1-5 prompts generated concurrently
//!
//! Every handler-level fault is converted into an error-flagged tool result;
//! callers inspect the flag, not the text. Only malformed JSON-level input
//! is rejected as a protocol error.

use crate::handler::{GenerateImageBatchParams, GenerateImageParams, SeedreamHandler};
use crate::report;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
};
use seedream_mcp_common::config::Config;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::info;

/// MCP server for Seedream image generation.
#[derive(Clone)]
pub struct SeedreamServer {
    handler: SeedreamHandler,
}

impl SeedreamServer {
    /// Create a new server from the startup configuration.
    pub fn new(config: Config) -> Self {
        Self {
            handler: SeedreamHandler::new(config),
        }
    }

    /// Generate images for one prompt.
    pub async fn generate_image(&self, params: GenerateImageParams) -> CallToolResult {
        info!(prompt = %params.prompt, "generate_image called");
        match self.handler.generate(params).await {
            Ok(outcome) => {
                CallToolResult::success(vec![Content::text(report::single_report(&outcome))])
            }
            Err(err) => CallToolResult::error(vec![Content::text(err.to_string())]),
        }
    }

    /// Generate images for a batch of prompts.
    pub async fn generate_image_batch(&self, params: GenerateImageBatchParams) -> CallToolResult {
        info!(prompts = params.prompts.len(), "generate_image_batch called");
        match self.handler.generate_batch(params).await {
            Ok(outcome) => {
                CallToolResult::success(vec![Content::text(report::batch_report(&outcome))])
            }
            Err(err) => CallToolResult::error(vec![Content::text(err.to_string())]),
        }
    }
}

fn tool_input_schema(value: serde_json::Value) -> Arc<serde_json::Map<String, serde_json::Value>> {
    match value {
        serde_json::Value::Object(map) => Arc::new(map),
        _ => Arc::new(serde_json::Map::new()),
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(
    arguments: Option<serde_json::Map<String, serde_json::Value>>,
) -> Result<T, McpError> {
    arguments
        .map(|args| serde_json::from_value(serde_json::Value::Object(args)))
        .transpose()
        .map_err(|e| McpError::invalid_params(format!("Invalid parameters: {e}"), None))?
        .ok_or_else(|| McpError::invalid_params("Missing parameters", None))
}

impl ServerHandler for SeedreamServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Image generation server for Bytedance Seedream on fal.ai. \
                 Use generate_image for a single prompt and generate_image_batch \
                 for up to 5 prompts generated concurrently. Generated images \
                 are downloaded into the local images directory."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _params: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<rmcp::model::ListToolsResult, McpError>> + Send + '_
    {
        async move {
            use rmcp::model::{ListToolsResult, Tool};
            use schemars::schema_for;

            let single_schema = schema_for!(GenerateImageParams);
            let single_input_schema =
                tool_input_schema(serde_json::to_value(&single_schema).unwrap_or_default());

            let batch_schema = schema_for!(GenerateImageBatchParams);
            let batch_input_schema =
                tool_input_schema(serde_json::to_value(&batch_schema).unwrap_or_default());

            Ok(ListToolsResult {
                tools: vec![
                    Tool {
                        name: Cow::Borrowed("generate_image"),
                        description: Some(Cow::Borrowed(
                            "Generate images from a text prompt using Bytedance Seedream \
                             on fal.ai. Images are downloaded into the local images \
                             directory; the result lists each file path and source URL.",
                        )),
                        input_schema: single_input_schema,
                        annotations: None,
                        icons: None,
                        meta: None,
                        output_schema: None,
                        title: None,
                    },
                    Tool {
                        name: Cow::Borrowed("generate_image_batch"),
                        description: Some(Cow::Borrowed(
                            "Generate images for up to 5 prompts in one call. Prompts \
                             run concurrently and each succeeds or fails on its own; \
                             the result groups successes and failures.",
                        )),
                        input_schema: batch_input_schema,
                        annotations: None,
                        icons: None,
                        meta: None,
                        output_schema: None,
                        title: None,
                    },
                ],
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn call_tool(
        &self,
        params: rmcp::model::CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            match params.name.as_ref() {
                "generate_image" => {
                    let tool_params: GenerateImageParams = parse_args(params.arguments)?;
                    Ok(self.generate_image(tool_params).await)
                }
                "generate_image_batch" => {
                    let tool_params: GenerateImageBatchParams = parse_args(params.arguments)?;
                    Ok(self.generate_image_batch(tool_params).await)
                }
                _ => Err(McpError::invalid_params(
                    format!("Unknown tool: {}", params.name),
                    None,
                )),
            }
        }
    }
}
