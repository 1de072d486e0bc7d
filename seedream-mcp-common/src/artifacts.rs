//! Local artifact persistence for generated images.
//!
//! The artifact store owns the output directory: it creates the directory on
//! demand, fetches remote image URLs (or decodes sync-mode `data:` URLs) and
//! writes them to disk. Remote bodies are streamed chunk by chunk rather than
//! buffered whole; a write failure mid-stream removes the partial file.

use crate::error::DownloadError;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Maximum length of the prompt-derived slug in a filename.
const SLUG_MAX_LEN: usize = 50;

/// Derive a local filename from the prompt, image index, and seed.
///
/// The prompt is lowercased, stripped to `[a-z0-9]` and whitespace,
/// whitespace runs become single underscores, and the slug is truncated to
/// 50 characters before `_{seed}_{index}_{timestamp}.png` is appended. The
/// millisecond timestamp is the only disambiguator between calls sharing
/// prompt, seed, and index, so same-millisecond collisions are possible;
/// accepted limitation of the naming scheme.
pub fn image_filename(prompt: &str, index: usize, seed: i64) -> String {
    let lowered = prompt.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();
    let slug: String = cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .take(SLUG_MAX_LEN)
        .collect();
    let timestamp = Utc::now().format("%Y%m%d-%H%M%S%3f");
    format!("{slug}_{seed}_{index}_{timestamp}.png")
}

/// Stores downloaded images under a local output directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    client: reqwest::Client,
    dir: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// first download.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::Client::new(),
            dir: dir.into(),
        }
    }

    /// The output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Download `url` into the output directory as `filename`.
    ///
    /// `data:` URLs are decoded locally without a network round trip; other
    /// URLs are fetched over HTTP(S) and streamed to the file.
    ///
    /// # Errors
    /// Returns `DownloadError` when the remote responds with a non-success
    /// status or the local write fails. Callers treat the failure as
    /// per-image and non-fatal.
    pub async fn download(&self, url: &str, filename: &str) -> Result<PathBuf, DownloadError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DownloadError::write(self.dir.display().to_string(), e.to_string()))?;
        let path = self.dir.join(filename);

        if let Some(encoded) = url.strip_prefix("data:") {
            return self.write_data_url(encoded, &path).await;
        }

        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::request(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::status(url, status.as_u16()));
        }

        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| DownloadError::write(path.display().to_string(), e.to_string()))?;

        loop {
            let chunk = match response.chunk().await {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break,
                Err(e) => {
                    self.discard_partial(&path).await;
                    return Err(DownloadError::request(url, e.to_string()));
                }
            };
            if let Err(e) = file.write_all(&chunk).await {
                self.discard_partial(&path).await;
                return Err(DownloadError::write(path.display().to_string(), e.to_string()));
            }
        }

        if let Err(e) = file.flush().await {
            self.discard_partial(&path).await;
            return Err(DownloadError::write(path.display().to_string(), e.to_string()));
        }

        debug!(path = %path.display(), "Saved image");
        Ok(path)
    }

    /// Decode a sync-mode data URL and write it out in one shot.
    async fn write_data_url(&self, encoded: &str, path: &Path) -> Result<PathBuf, DownloadError> {
        // data:image/png;base64,<payload>
        let payload = encoded
            .split_once("base64,")
            .map(|(_, payload)| payload)
            .ok_or_else(|| DownloadError::DataUrl("missing base64 payload".to_string()))?;
        let bytes = BASE64
            .decode(payload)
            .map_err(|e| DownloadError::DataUrl(e.to_string()))?;
        tokio::fs::write(path, &bytes)
            .await
            .map_err(|e| DownloadError::write(path.display().to_string(), e.to_string()))?;
        debug!(path = %path.display(), "Saved inline image");
        Ok(path.to_path_buf())
    }

    async fn discard_partial(&self, path: &Path) {
        if let Err(e) = tokio::fs::remove_file(path).await {
            warn!(path = %path.display(), error = %e, "Could not remove partial download");
        }
    }
}
