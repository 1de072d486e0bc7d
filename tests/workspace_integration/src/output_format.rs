//! Output format tests.
//!
//! Both tools return a list of content blocks (a single text block) plus a
//! boolean error indicator. Callers inspect the indicator, not the text, so
//! the indicator has to be set on every fault path.

use rmcp::model::{CallToolResult, Content, RawContent};

/// Validates that a CallToolResult has the documented shape.
pub fn validate_tool_result(result: &CallToolResult) -> Result<(), String> {
    if result.content.is_empty() {
        return Err("Result should carry at least one content block".to_string());
    }

    for content in &result.content {
        validate_content(content)?;
    }

    Ok(())
}

/// Validates one content block (this server only emits text).
fn validate_content(content: &Content) -> Result<(), String> {
    match &content.raw {
        RawContent::Text(text_content) => {
            if text_content.text.is_empty() {
                return Err("Text content should not be empty".to_string());
            }
            Ok(())
        }
        other => Err(format!("Unexpected content variant: {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server_startup::{config_with_key, config_without_key};
    use seedream_mcp_image::SeedreamServer;
    use seedream_mcp_image::handler::{GenerateImageBatchParams, GenerateImageParams};

    fn single_params(prompt: &str) -> GenerateImageParams {
        GenerateImageParams {
            prompt: prompt.to_string(),
            model: "seedream-4.0".to_string(),
            image_size: None,
            aspect_ratio: None,
            num_images: 1,
            max_images: 1,
            seed: None,
            sync_mode: false,
            enable_safety_checker: true,
        }
    }

    #[tokio::test]
    async fn validation_failure_is_an_error_flagged_text_result() {
        let server = SeedreamServer::new(config_with_key());
        let result = server.generate_image(single_params("   ")).await;

        assert_eq!(result.is_error, Some(true));
        validate_tool_result(&result).expect("error result still has text content");
    }

    #[tokio::test]
    async fn missing_key_is_an_error_flagged_result_with_guidance() {
        let server = SeedreamServer::new(config_without_key());
        let result = server.generate_image(single_params("a cat")).await;

        assert_eq!(result.is_error, Some(true));
        let text = match &result.content[0].raw {
            RawContent::Text(text_content) => text_content.text.clone(),
            other => panic!("expected text content, got {other:?}"),
        };
        assert!(text.contains("FAL_KEY"), "guidance should name the variable");
    }

    #[tokio::test]
    async fn batch_validation_failure_is_an_error_flagged_result() {
        let server = SeedreamServer::new(config_with_key());
        let result = server
            .generate_image_batch(GenerateImageBatchParams {
                prompts: vec!["p".to_string(); 6],
                model: "seedream-4.0".to_string(),
                image_size: None,
                aspect_ratio: None,
                enable_safety_checker: true,
            })
            .await;

        assert_eq!(result.is_error, Some(true));
        validate_tool_result(&result).expect("error result still has text content");
    }

    #[test]
    fn success_results_validate() {
        let result = CallToolResult::success(vec![Content::text("report body")]);
        assert_ne!(result.is_error, Some(true));
        validate_tool_result(&result).expect("success result has text content");
    }
}
