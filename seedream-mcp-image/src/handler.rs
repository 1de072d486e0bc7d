//! Request handling for the Seedream MCP server.
//!
//! This module provides the parameter types, validation and size resolution
//! logic, the fal.ai invoker, and the single and batch generation flows.

use schemars::JsonSchema;
use seedream_mcp_common::artifacts::{ArtifactStore, image_filename};
use seedream_mcp_common::config::Config;
use seedream_mcp_common::error::Error;
use seedream_mcp_common::models::{ModelRegistry, SeedreamModel, Sizing};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

/// Default model for generation.
pub const DEFAULT_MODEL: &str = "seedream-4.0";

/// Default size preset when no size is supplied.
pub const DEFAULT_SIZE_PRESET: &str = "square_hd";

/// Dimensions of the default preset.
pub const DEFAULT_IMAGE_SIZE: ImageSize = ImageSize {
    width: 2048,
    height: 2048,
};

/// Default aspect ratio for ratio-sized models.
pub const DEFAULT_ASPECT_RATIO: &str = "1:1";

/// Named size presets and their pixel dimensions.
pub const SIZE_PRESETS: &[(&str, u32, u32)] = &[
    ("square_hd", 2048, 2048),
    ("square", 1024, 1024),
    ("portrait_4_3", 1536, 2048),
    ("portrait_16_9", 1152, 2048),
    ("landscape_4_3", 2048, 1536),
    ("landscape_16_9", 2048, 1152),
];

/// Minimum value for num_images and max_images.
pub const MIN_NUM_IMAGES: u8 = 1;

/// Maximum number of prompts a batch call accepts.
pub const MAX_BATCH_PROMPTS: usize = 5;

/// Requested output size: a named preset or explicit pixel dimensions.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum SizeSpec {
    /// Named preset, e.g. "square_hd"
    Preset(String),
    /// Explicit dimensions in pixels
    Custom {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },
}

/// Concrete output dimensions after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Sizing after resolution, matching the active model's contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSizing {
    /// Concrete pixel dimensions (seedream-4.0)
    Pixels(ImageSize),
    /// Validated aspect-ratio token (seedream-3.0)
    Ratio(String),
}

impl std::fmt::Display for ResolvedSizing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolvedSizing::Pixels(size) => write!(f, "{size}"),
            ResolvedSizing::Ratio(ratio) => write!(f, "{ratio}"),
        }
    }
}

fn preset_size(name: &str) -> Option<ImageSize> {
    SIZE_PRESETS
        .iter()
        .find(|(preset, _, _)| *preset == name)
        .map(|(_, width, height)| ImageSize {
            width: *width,
            height: *height,
        })
}

/// Resolve a size specification against the pixel bounds of `model`.
///
/// An absent spec resolves to the default preset. Preset names map to their
/// documented dimensions; explicit dimensions must fall inside the model's
/// inclusive range and pass through unchanged.
pub fn resolve_size(model: &SeedreamModel, spec: Option<&SizeSpec>) -> Result<ImageSize, Error> {
    let Sizing::Pixels { min, max } = model.sizing else {
        return Err(Error::validation(format!(
            "{} takes an aspect_ratio, not an explicit size",
            model.id
        )));
    };

    match spec {
        None => Ok(DEFAULT_IMAGE_SIZE),
        Some(SizeSpec::Preset(name)) => preset_size(name).ok_or_else(|| {
            let valid = SIZE_PRESETS
                .iter()
                .map(|(preset, _, _)| *preset)
                .collect::<Vec<_>>()
                .join(", ");
            Error::validation(format!(
                "Unknown size preset '{name}'. Valid presets: {valid}"
            ))
        }),
        Some(SizeSpec::Custom { width, height }) => {
            for (field, value) in [("width", *width), ("height", *height)] {
                if value < min || value > max {
                    return Err(Error::validation(format!(
                        "{field} must be between {min} and {max}, got {value}"
                    )));
                }
            }
            Ok(ImageSize {
                width: *width,
                height: *height,
            })
        }
    }
}

/// Validate an aspect-ratio token against the model's supported set.
///
/// An absent token resolves to the default ratio; valid tokens pass through
/// unchanged.
pub fn resolve_aspect_ratio(model: &SeedreamModel, token: Option<&str>) -> Result<String, Error> {
    let token = token.unwrap_or(DEFAULT_ASPECT_RATIO);
    if model.supported_aspect_ratios.contains(&token) {
        Ok(token.to_string())
    } else {
        Err(Error::validation(format!(
            "Invalid aspect ratio '{}'. Valid options: {}",
            token,
            model.supported_aspect_ratios.join(", ")
        )))
    }
}

/// Resolve the sizing parameters for the active model.
pub fn resolve_sizing(
    model: &SeedreamModel,
    image_size: Option<&SizeSpec>,
    aspect_ratio: Option<&str>,
) -> Result<ResolvedSizing, Error> {
    match model.sizing {
        Sizing::Pixels { .. } => resolve_size(model, image_size).map(ResolvedSizing::Pixels),
        Sizing::AspectRatio => {
            resolve_aspect_ratio(model, aspect_ratio).map(ResolvedSizing::Ratio)
        }
    }
}

/// Validation error details for a single field.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation failure
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn field_error(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

/// The message of a resolver error, without the taxonomy prefix.
fn validation_message(err: Error) -> String {
    match err {
        Error::Validation(message) => message,
        other => other.to_string(),
    }
}

fn join_validation_errors(errors: Vec<ValidationError>) -> Error {
    Error::validation(
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "),
    )
}

/// Parameters for the `generate_image` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GenerateImageParams {
    /// Text prompt describing the image to generate.
    pub prompt: String,

    /// Model to use: "seedream-4.0" (default) or "seedream-3.0".
    #[serde(default = "default_model")]
    pub model: String,

    /// Output size for seedream-4.0: a preset name (square_hd, square,
    /// portrait_4_3, portrait_16_9, landscape_4_3, landscape_16_9) or
    /// explicit {width, height} with both in [1024, 4096].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<SizeSpec>,

    /// Aspect ratio for seedream-3.0: one of 1:1, 3:4, 4:3, 16:9, 9:16,
    /// 2:3, 3:2, 21:9.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,

    /// Number of separate generations to request (1-6).
    #[serde(default = "default_num_images")]
    pub num_images: u8,

    /// Maximum images returned per generation (1-6, seedream-4.0 only).
    #[serde(default = "default_num_images")]
    pub max_images: u8,

    /// Random seed. Omitted means the model picks one and reports it back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,

    /// Return images inline as data URLs instead of hosted URLs.
    #[serde(default)]
    pub sync_mode: bool,

    /// Run the upstream safety checker.
    #[serde(default = "default_true")]
    pub enable_safety_checker: bool,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_num_images() -> u8 {
    1
}

fn default_true() -> bool {
    true
}

impl GenerateImageParams {
    /// Validate the parameters against the active model's constraints.
    ///
    /// # Returns
    /// - `Ok(())` if all parameters are valid
    /// - `Err(Vec<ValidationError>)` with all validation errors
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let model = ModelRegistry::resolve(&self.model);
        if model.is_none() {
            errors.push(field_error(
                "model",
                format!(
                    "Unknown model '{}'. Valid models: {}",
                    self.model,
                    ModelRegistry::valid_ids()
                ),
            ));
        }

        if self.prompt.trim().is_empty() {
            errors.push(field_error("prompt", "Prompt cannot be empty"));
        }

        if let Some(model) = model {
            if let Err(err) =
                resolve_sizing(model, self.image_size.as_ref(), self.aspect_ratio.as_deref())
            {
                let field = match model.sizing {
                    Sizing::Pixels { .. } => "image_size",
                    Sizing::AspectRatio => "aspect_ratio",
                };
                errors.push(field_error(field, validation_message(err)));
            }
        }

        let max_allowed = model.map(|m| m.max_num_images).unwrap_or(6);
        for (field, value) in [("num_images", self.num_images), ("max_images", self.max_images)] {
            if value < MIN_NUM_IMAGES || value > max_allowed {
                errors.push(field_error(
                    field,
                    format!(
                        "{field} must be between {MIN_NUM_IMAGES} and {max_allowed}, got {value}"
                    ),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Get the resolved model definition.
    pub fn resolved_model(&self) -> Option<&'static SeedreamModel> {
        ModelRegistry::resolve(&self.model)
    }
}

/// Parameters for the `generate_image_batch` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GenerateImageBatchParams {
    /// Prompts to generate, one generation per prompt (1-5).
    pub prompts: Vec<String>,

    /// Model to use: "seedream-4.0" (default) or "seedream-3.0".
    #[serde(default = "default_model")]
    pub model: String,

    /// Output size applied to every prompt (seedream-4.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<SizeSpec>,

    /// Aspect ratio applied to every prompt (seedream-3.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,

    /// Run the upstream safety checker.
    #[serde(default = "default_true")]
    pub enable_safety_checker: bool,
}

impl GenerateImageBatchParams {
    /// Validate the batch parameters. Runs before any network call.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.prompts.is_empty() {
            errors.push(field_error("prompts", "At least one prompt is required"));
        } else if self.prompts.len() > MAX_BATCH_PROMPTS {
            errors.push(field_error(
                "prompts",
                format!(
                    "At most {MAX_BATCH_PROMPTS} prompts per batch, got {}",
                    self.prompts.len()
                ),
            ));
        }

        for (index, prompt) in self.prompts.iter().enumerate() {
            if prompt.trim().is_empty() {
                errors.push(field_error(
                    "prompts",
                    format!("Prompt at index {index} is empty"),
                ));
            }
        }

        let model = ModelRegistry::resolve(&self.model);
        if model.is_none() {
            errors.push(field_error(
                "model",
                format!(
                    "Unknown model '{}'. Valid models: {}",
                    self.model,
                    ModelRegistry::valid_ids()
                ),
            ));
        }

        if let Some(model) = model {
            if let Err(err) =
                resolve_sizing(model, self.image_size.as_ref(), self.aspect_ratio.as_deref())
            {
                let field = match model.sizing {
                    Sizing::Pixels { .. } => "image_size",
                    Sizing::AspectRatio => "aspect_ratio",
                };
                errors.push(field_error(field, validation_message(err)));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// One image reported by the upstream result.
#[derive(Debug, Clone)]
pub struct RemoteImage {
    /// Hosted URL (or sync-mode data URL)
    pub url: String,
    /// Width reported by the API, if any
    pub width: Option<u32>,
    /// Height reported by the API, if any
    pub height: Option<u32>,
}

/// Normalized result of one upstream generation call.
#[derive(Debug)]
pub struct GenerationResult {
    /// Images in generation order
    pub images: Vec<RemoteImage>,
    /// The seed the model actually used
    pub seed: i64,
}

/// Where a downloaded image ended up.
#[derive(Debug)]
pub enum DownloadOutcome {
    /// Written to this local path
    Saved(PathBuf),
    /// Persistence failed; the image is still retrievable via its URL
    Failed(String),
}

/// Per-image download record, consumed by the report formatter.
#[derive(Debug)]
pub struct DownloadedImage {
    /// Original remote URL
    pub url: String,
    /// Dimensions label: reported by the API if available, else the
    /// resolved request sizing
    pub dimensions: String,
    /// Local path or failure reason
    pub outcome: DownloadOutcome,
}

/// Everything the single-request report needs.
#[derive(Debug)]
pub struct GenerationOutcome {
    /// The prompt that was generated
    pub prompt: String,
    /// Canonical model id used
    pub model_id: &'static str,
    /// Resolved sizing sent upstream
    pub sizing: ResolvedSizing,
    /// The seed the model actually used
    pub seed: i64,
    /// Whether sync mode was requested
    pub sync_mode: bool,
    /// Whether the safety checker was enabled
    pub safety_checker: bool,
    /// Per-image download records, in generation order
    pub images: Vec<DownloadedImage>,
}

/// One successful batch entry.
#[derive(Debug)]
pub struct BatchSuccess {
    /// The prompt that succeeded
    pub prompt: String,
    /// The seed the model actually used
    pub seed: i64,
    /// Per-image download records
    pub images: Vec<DownloadedImage>,
}

/// One failed batch entry.
#[derive(Debug)]
pub struct BatchFailure {
    /// The prompt that failed
    pub prompt: String,
    /// Error description
    pub error: String,
}

/// Aggregate outcome of a batch call.
///
/// Both partitions follow original prompt order internally; the interleaving
/// between partitions is not preserved.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Canonical model id used
    pub model_id: &'static str,
    /// Resolved sizing shared by every prompt
    pub sizing: ResolvedSizing,
    /// Whether the safety checker was enabled
    pub safety_checker: bool,
    /// Number of prompts submitted
    pub total: usize,
    /// Prompts whose generation succeeded
    pub successful: Vec<BatchSuccess>,
    /// Prompts whose generation failed
    pub failed: Vec<BatchFailure>,
}

/// Per-call options forwarded to the upstream API.
#[derive(Debug, Clone)]
pub struct InvokeOptions {
    /// Number of generations to request
    pub num_images: u8,
    /// Maximum images per generation (pixel-sized models only)
    pub max_images: u8,
    /// Caller-supplied seed, if any
    pub seed: Option<i64>,
    /// Request inline data URLs instead of hosted URLs
    pub sync_mode: bool,
    /// Run the upstream safety checker
    pub enable_safety_checker: bool,
}

/// Handles generation requests against the fal.ai Seedream API.
#[derive(Clone)]
pub struct SeedreamHandler {
    config: Config,
    http: reqwest::Client,
    artifacts: ArtifactStore,
}

impl SeedreamHandler {
    /// Create a new handler from the startup configuration.
    pub fn new(config: Config) -> Self {
        let artifacts = ArtifactStore::new(config.output_dir.clone());
        Self {
            config,
            http: reqwest::Client::new(),
            artifacts,
        }
    }

    /// Endpoint URL for a model.
    pub fn endpoint(&self, model: &SeedreamModel) -> String {
        self.config.model_endpoint(model.endpoint)
    }

    /// Issue one generation call and normalize its result.
    ///
    /// A single attempt per call; retry policy, if any, belongs to the
    /// underlying transport. A nominally successful response carrying zero
    /// images is treated as an upstream error.
    #[instrument(level = "info", name = "seedream_invoke", skip_all, fields(model = model.id))]
    pub async fn invoke(
        &self,
        prompt: &str,
        model: &'static SeedreamModel,
        sizing: &ResolvedSizing,
        opts: &InvokeOptions,
    ) -> Result<GenerationResult, Error> {
        let key = self.config.require_fal_key()?;
        let endpoint = self.endpoint(model);

        let request = SeedreamRequest {
            prompt: prompt.to_string(),
            image_size: match sizing {
                ResolvedSizing::Pixels(size) => Some(*size),
                ResolvedSizing::Ratio(_) => None,
            },
            aspect_ratio: match sizing {
                ResolvedSizing::Ratio(ratio) => Some(ratio.clone()),
                ResolvedSizing::Pixels(_) => None,
            },
            num_images: opts.num_images,
            max_images: model.supports_max_images.then_some(opts.max_images),
            seed: opts.seed,
            sync_mode: opts.sync_mode,
            enable_safety_checker: opts.enable_safety_checker,
        };

        debug!(endpoint = %endpoint, "Calling Seedream API");

        let response = self
            .http
            .post(&endpoint)
            .header("Authorization", format!("Key {key}"))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::upstream(&endpoint, 0, format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream(&endpoint, status.as_u16(), body));
        }

        let api_response: SeedreamResponse = response.json().await.map_err(|e| {
            Error::upstream(
                &endpoint,
                status.as_u16(),
                format!("Failed to parse response: {e}"),
            )
        })?;

        let images: Vec<RemoteImage> = api_response
            .images
            .into_iter()
            .map(|image| RemoteImage {
                url: image.url,
                width: image.width,
                height: image.height,
            })
            .collect();

        if images.is_empty() {
            return Err(Error::upstream(&endpoint, status.as_u16(), "no images produced"));
        }

        info!(count = images.len(), seed = api_response.seed, "Received images");
        Ok(GenerationResult {
            images,
            seed: api_response.seed,
        })
    }

    /// Run the full single-request flow: validate, resolve, invoke, download.
    #[instrument(level = "info", name = "generate_image", skip(self, params), fields(model = %params.model))]
    pub async fn generate(&self, params: GenerateImageParams) -> Result<GenerationOutcome, Error> {
        params.validate().map_err(join_validation_errors)?;
        let model = params
            .resolved_model()
            .ok_or_else(|| Error::validation(format!("Unknown model: {}", params.model)))?;
        let sizing = resolve_sizing(model, params.image_size.as_ref(), params.aspect_ratio.as_deref())?;
        self.config.require_fal_key()?;

        let opts = InvokeOptions {
            num_images: params.num_images,
            max_images: params.max_images,
            seed: params.seed,
            sync_mode: params.sync_mode,
            enable_safety_checker: params.enable_safety_checker,
        };

        let result = self.invoke(&params.prompt, model, &sizing, &opts).await?;
        let images = self
            .download_all(&params.prompt, result.seed, &sizing, result.images)
            .await;

        Ok(GenerationOutcome {
            prompt: params.prompt,
            model_id: model.id,
            sizing,
            seed: result.seed,
            sync_mode: params.sync_mode,
            safety_checker: params.enable_safety_checker,
            images,
        })
    }

    /// Run the batch flow: validate, fan out one call per prompt, collect
    /// every outcome independently, then download for each success.
    #[instrument(level = "info", name = "generate_image_batch", skip(self, params), fields(prompts = params.prompts.len()))]
    pub async fn generate_batch(
        &self,
        params: GenerateImageBatchParams,
    ) -> Result<BatchOutcome, Error> {
        params.validate().map_err(join_validation_errors)?;
        let model = ModelRegistry::resolve(&params.model)
            .ok_or_else(|| Error::validation(format!("Unknown model: {}", params.model)))?;
        let sizing = resolve_sizing(model, params.image_size.as_ref(), params.aspect_ratio.as_deref())?;
        self.config.require_fal_key()?;

        let opts = InvokeOptions {
            num_images: 1,
            max_images: 1,
            seed: None,
            sync_mode: false,
            enable_safety_checker: params.enable_safety_checker,
        };

        // Fire every prompt concurrently; no outcome cancels a sibling.
        let mut handles = Vec::with_capacity(params.prompts.len());
        for prompt in &params.prompts {
            let handler = self.clone();
            let prompt = prompt.clone();
            let task_sizing = sizing.clone();
            let task_opts = opts.clone();
            let handle = tokio::spawn(async move {
                handler
                    .invoke(&prompt, model, &task_sizing, &task_opts)
                    .await
            });
            handles.push(handle);
        }

        let total = handles.len();
        let mut succeeded = Vec::new();
        let mut failed = Vec::new();
        for (prompt, handle) in params.prompts.iter().zip(handles) {
            match handle.await {
                Ok(Ok(result)) => succeeded.push((prompt.clone(), result)),
                Ok(Err(err)) => failed.push(BatchFailure {
                    prompt: prompt.clone(),
                    error: err.to_string(),
                }),
                Err(join_err) => failed.push(BatchFailure {
                    prompt: prompt.clone(),
                    error: format!("generation task failed: {join_err}"),
                }),
            }
        }

        let mut successful = Vec::with_capacity(succeeded.len());
        for (prompt, result) in succeeded {
            let images = self
                .download_all(&prompt, result.seed, &sizing, result.images)
                .await;
            successful.push(BatchSuccess {
                prompt,
                seed: result.seed,
                images,
            });
        }

        info!(
            total,
            succeeded = successful.len(),
            failed = failed.len(),
            "Batch complete"
        );

        Ok(BatchOutcome {
            model_id: model.id,
            sizing,
            safety_checker: params.enable_safety_checker,
            total,
            successful,
            failed,
        })
    }

    /// Download every image of one generation, sequentially and in order.
    /// A failed download is recorded in place and never aborts the rest.
    async fn download_all(
        &self,
        prompt: &str,
        seed: i64,
        sizing: &ResolvedSizing,
        images: Vec<RemoteImage>,
    ) -> Vec<DownloadedImage> {
        let mut downloaded = Vec::with_capacity(images.len());
        for (index, image) in images.into_iter().enumerate() {
            let dimensions = match (image.width, image.height) {
                (Some(width), Some(height)) => format!("{width}x{height}"),
                _ => sizing.to_string(),
            };
            let filename = image_filename(prompt, index, seed);
            let outcome = match self.artifacts.download(&image.url, &filename).await {
                Ok(path) => DownloadOutcome::Saved(path),
                Err(err) => {
                    warn!(url = %image.url, error = %err, "Image download failed");
                    DownloadOutcome::Failed(err.to_string())
                }
            };
            downloaded.push(DownloadedImage {
                url: image.url,
                dimensions,
                outcome,
            });
        }
        downloaded
    }
}

// =============================================================================
// API Request/Response Types
// =============================================================================

/// fal.ai Seedream request body.
#[derive(Debug, Serialize)]
pub struct SeedreamRequest {
    /// Text prompt describing the image
    pub prompt: String,
    /// Output dimensions (pixel-sized models)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size: Option<ImageSize>,
    /// Aspect-ratio token (ratio-sized models)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    /// Number of generations
    pub num_images: u8,
    /// Maximum images per generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_images: Option<u8>,
    /// Random seed for reproducibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Return inline data URLs
    pub sync_mode: bool,
    /// Run the safety checker
    pub enable_safety_checker: bool,
}

/// fal.ai Seedream response body.
#[derive(Debug, Deserialize)]
pub struct SeedreamResponse {
    /// Generated images
    pub images: Vec<SeedreamResponseImage>,
    /// The seed the model actually used
    pub seed: i64,
}

/// One generated image in the API response.
#[derive(Debug, Deserialize)]
pub struct SeedreamResponseImage {
    /// Hosted URL (or data URL in sync mode)
    pub url: String,
    /// Width in pixels, when reported
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels, when reported
    #[serde(default)]
    pub height: Option<u32>,
}
