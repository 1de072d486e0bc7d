//! Server startup tests.
//!
//! The server must come up and answer informational requests whether or not
//! a fal.ai API key is configured; a missing key only affects generation
//! calls.

use seedream_mcp_common::Config;
use std::path::PathBuf;

/// Test configuration without a key.
pub fn config_without_key() -> Config {
    Config {
        fal_key: None,
        api_base: "https://fal.run".to_string(),
        output_dir: PathBuf::from("images"),
        port: 8080,
    }
}

/// Test configuration with a placeholder key.
pub fn config_with_key() -> Config {
    Config {
        fal_key: Some("test-key".to_string()),
        ..config_without_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::ServerHandler;
    use seedream_mcp_image::SeedreamServer;

    #[test]
    fn server_starts_with_key() {
        let server = SeedreamServer::new(config_with_key());
        let info = server.get_info();
        let instructions = info.instructions.expect("instructions set");
        assert!(
            instructions.to_lowercase().contains("seedream"),
            "instructions should mention the model family"
        );
        assert!(info.capabilities.tools.is_some(), "tools capability enabled");
    }

    #[test]
    fn server_starts_without_key() {
        let server = SeedreamServer::new(config_without_key());
        let info = server.get_info();
        assert!(info.instructions.is_some());
        assert!(info.capabilities.tools.is_some());
    }
}
