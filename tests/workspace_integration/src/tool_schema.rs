//! Tool schema validity tests.
//!
//! The input schema of each tool must be a valid JSON Schema object exposing
//! the documented parameters, with the required fields marked as such.

use serde_json::Value;

/// Validates that a JSON schema has the required structure.
pub fn validate_json_schema(schema: &Value) -> Result<(), String> {
    let obj = schema
        .as_object()
        .ok_or_else(|| "Schema must be an object".to_string())?;

    if let Some(type_val) = obj.get("type") {
        if type_val != "object" {
            return Err(format!("Expected type 'object', got {:?}", type_val));
        }
    }

    if let Some(properties) = obj.get("properties") {
        if !properties.is_object() {
            return Err("Properties must be an object".to_string());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::schema_for;
    use seedream_mcp_image::handler::{GenerateImageBatchParams, GenerateImageParams};

    fn schema_value<T: schemars::JsonSchema>() -> Value {
        serde_json::to_value(schema_for!(T)).expect("schema serializes")
    }

    #[test]
    fn json_schema_validation_helper_works() {
        let valid = serde_json::json!({
            "type": "object",
            "properties": {"prompt": {"type": "string"}},
            "required": ["prompt"]
        });
        assert!(validate_json_schema(&valid).is_ok());

        let invalid = serde_json::json!({"type": "array"});
        assert!(validate_json_schema(&invalid).is_err());
    }

    #[test]
    fn generate_image_schema_is_valid() {
        let schema = schema_value::<GenerateImageParams>();
        validate_json_schema(&schema).expect("schema should validate");

        let properties = schema["properties"].as_object().unwrap();
        for field in [
            "prompt",
            "model",
            "image_size",
            "aspect_ratio",
            "num_images",
            "max_images",
            "seed",
            "sync_mode",
            "enable_safety_checker",
        ] {
            assert!(properties.contains_key(field), "missing property {field}");
        }

        let required: Vec<&str> = schema["required"]
            .as_array()
            .map(|values| values.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        assert!(required.contains(&"prompt"), "prompt must be required");
        assert!(!required.contains(&"seed"), "seed must stay optional");
    }

    #[test]
    fn generate_image_batch_schema_is_valid() {
        let schema = schema_value::<GenerateImageBatchParams>();
        validate_json_schema(&schema).expect("schema should validate");

        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("prompts"));
        assert!(properties.contains_key("image_size"));
        assert!(properties.contains_key("enable_safety_checker"));

        let required: Vec<&str> = schema["required"]
            .as_array()
            .map(|values| values.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        assert!(required.contains(&"prompts"), "prompts must be required");
    }
}
