//! Input parameter validation tests.
//!
//! Any tool invocation with invalid parameters must be rejected before a
//! network call, with a validation error naming the offending field.

#[cfg(test)]
mod tests {
    use seedream_mcp_image::handler::{GenerateImageBatchParams, GenerateImageParams, SizeSpec};

    fn base_params() -> GenerateImageParams {
        GenerateImageParams {
            prompt: "A cat".to_string(),
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

    #[test]
    fn rejects_out_of_range_num_images() {
        let params = GenerateImageParams {
            num_images: 10,
            ..base_params()
        };
        let errors = params.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "num_images"));
    }

    #[test]
    fn rejects_empty_prompt() {
        let params = GenerateImageParams {
            prompt: "   ".to_string(),
            ..base_params()
        };
        let errors = params.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "prompt"));
    }

    #[test]
    fn rejects_unknown_size_preset() {
        let params = GenerateImageParams {
            image_size: Some(SizeSpec::Preset("cinema_scope".to_string())),
            ..base_params()
        };
        let errors = params.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "image_size"));
    }

    #[test]
    fn rejects_dimensions_outside_range() {
        let params = GenerateImageParams {
            image_size: Some(SizeSpec::Custom {
                width: 640,
                height: 480,
            }),
            ..base_params()
        };
        let errors = params.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "image_size"));
    }

    #[test]
    fn rejects_invalid_aspect_ratio_for_ratio_model() {
        let params = GenerateImageParams {
            model: "seedream-3.0".to_string(),
            aspect_ratio: Some("5:4".to_string()),
            ..base_params()
        };
        let errors = params.validate().unwrap_err();
        let ratio_error = errors.iter().find(|e| e.field == "aspect_ratio").unwrap();
        assert!(ratio_error.message.contains("Valid options"));
    }

    #[test]
    fn rejects_unknown_model() {
        let params = GenerateImageParams {
            model: "imagen-4".to_string(),
            ..base_params()
        };
        let errors = params.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "model"));
    }

    #[test]
    fn batch_rejects_empty_prompt_list() {
        let params = GenerateImageBatchParams {
            prompts: vec![],
            model: "seedream-4.0".to_string(),
            image_size: None,
            aspect_ratio: None,
            enable_safety_checker: true,
        };
        let errors = params.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "prompts"));
    }

    #[test]
    fn batch_rejects_six_prompts() {
        let params = GenerateImageBatchParams {
            prompts: vec!["p".to_string(); 6],
            model: "seedream-4.0".to_string(),
            image_size: None,
            aspect_ratio: None,
            enable_safety_checker: true,
        };
        let errors = params.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "prompts"));
    }
}
