//! Seedream model definitions and registry.
//!
//! Static descriptors for the Seedream generations served through fal.ai,
//! and a registry for resolving model names and aliases.

/// How a model expresses output dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    /// Explicit pixel dimensions: presets or width/height, both within
    /// the inclusive [min, max] range.
    Pixels {
        /// Minimum dimension in pixels
        min: u32,
        /// Maximum dimension in pixels
        max: u32,
    },
    /// A fixed set of aspect-ratio tokens.
    AspectRatio,
}

/// Seedream model definition.
#[derive(Debug, Clone, Copy)]
pub struct SeedreamModel {
    /// Model identifier
    pub id: &'static str,
    /// Model aliases for convenience
    pub aliases: &'static [&'static str],
    /// Request path under the fal.ai API base
    pub endpoint: &'static str,
    /// Sizing contract the model exposes
    pub sizing: Sizing,
    /// Supported aspect-ratio tokens (empty for pixel-sized models)
    pub supported_aspect_ratios: &'static [&'static str],
    /// Upper bound for num_images and max_images
    pub max_num_images: u8,
    /// Whether the API accepts max_images (images per generation)
    pub supports_max_images: bool,
}

/// Aspect-ratio tokens accepted by Seedream 3.0.
pub const SEEDREAM_ASPECT_RATIOS: &[&str] =
    &["1:1", "3:4", "4:3", "16:9", "9:16", "2:3", "3:2", "21:9"];

/// Seedream 4.0 text-to-image (current generation, pixel sizing)
pub const SEEDREAM_4_0: SeedreamModel = SeedreamModel {
    id: "seedream-4.0",
    aliases: &["seedream-4", "seedream4", "v4"],
    endpoint: "fal-ai/bytedance/seedream/v4/text-to-image",
    sizing: Sizing::Pixels {
        min: 1024,
        max: 4096,
    },
    supported_aspect_ratios: &[],
    max_num_images: 6,
    supports_max_images: true,
};

/// Seedream 3.0 text-to-image (predecessor, aspect-ratio sizing)
pub const SEEDREAM_3_0: SeedreamModel = SeedreamModel {
    id: "seedream-3.0",
    aliases: &["seedream-3", "seedream3", "v3"],
    endpoint: "fal-ai/bytedance/seedream/v3/text-to-image",
    sizing: Sizing::AspectRatio,
    supported_aspect_ratios: SEEDREAM_ASPECT_RATIOS,
    max_num_images: 6,
    supports_max_images: false,
};

/// All available Seedream models
pub const SEEDREAM_MODELS: &[SeedreamModel] = &[SEEDREAM_4_0, SEEDREAM_3_0];

/// Model registry for resolution and listing.
pub struct ModelRegistry;

impl ModelRegistry {
    /// Resolve a model name or alias to its full definition.
    ///
    /// Accepts either the canonical model ID (e.g., "seedream-4.0")
    /// or any of its aliases (e.g., "v4").
    pub fn resolve(name: &str) -> Option<&'static SeedreamModel> {
        SEEDREAM_MODELS
            .iter()
            .find(|model| model.id == name || model.aliases.contains(&name))
    }

    /// List all available models.
    pub fn list() -> &'static [SeedreamModel] {
        SEEDREAM_MODELS
    }

    /// Comma-separated canonical ids, for validation messages.
    pub fn valid_ids() -> String {
        SEEDREAM_MODELS
            .iter()
            .map(|model| model.id)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
