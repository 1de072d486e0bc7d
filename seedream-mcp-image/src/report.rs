//! Text report composition for generation outcomes.
//!
//! Tool results are a single text block plus an error flag; these functions
//! render the success-side text. The per-image lines always carry the
//! original URL so a failed download can be retrieved manually.

use crate::handler::{BatchOutcome, DownloadOutcome, DownloadedImage, GenerationOutcome, ResolvedSizing};
use std::fmt::Write as _;

/// Render the report for a single generation call.
pub fn single_report(outcome: &GenerationOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Image generation successful!");
    let _ = writeln!(out);
    let _ = writeln!(out, "Prompt: {}", outcome.prompt);
    let _ = writeln!(out, "Model: {}", outcome.model_id);
    let _ = writeln!(out, "{}", sizing_line(&outcome.sizing));
    let _ = writeln!(out, "Seed: {}", outcome.seed);
    let _ = writeln!(out, "Safety checker: {}", on_off(outcome.safety_checker));
    let _ = writeln!(out, "Sync mode: {}", on_off(outcome.sync_mode));
    let _ = writeln!(out, "Images: {}", outcome.images.len());

    for (index, image) in outcome.images.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Image {} ({}):", index + 1, image.dimensions);
        write_image_lines(&mut out, image, "  ");
    }

    out
}

/// Render the aggregate report for a batch call.
///
/// The success and failure sections each follow original prompt order and
/// are omitted entirely when empty.
pub fn batch_report(outcome: &BatchOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Batch image generation complete");
    let _ = writeln!(out);
    let _ = writeln!(out, "Model: {}", outcome.model_id);
    let _ = writeln!(out, "{}", sizing_line(&outcome.sizing));
    let _ = writeln!(out, "Safety checker: {}", on_off(outcome.safety_checker));
    let _ = writeln!(
        out,
        "Prompts: {} total, {} succeeded, {} failed",
        outcome.total,
        outcome.successful.len(),
        outcome.failed.len()
    );

    if !outcome.successful.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Successful generations:");
        for (index, success) in outcome.successful.iter().enumerate() {
            let _ = writeln!(out, "{}. \"{}\" (seed {})", index + 1, success.prompt, success.seed);
            for image in &success.images {
                write_image_lines(&mut out, image, "   ");
            }
        }
    }

    if !outcome.failed.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Failed generations:");
        for (index, failure) in outcome.failed.iter().enumerate() {
            let _ = writeln!(out, "{}. \"{}\": {}", index + 1, failure.prompt, failure.error);
        }
    }

    out
}

fn sizing_line(sizing: &ResolvedSizing) -> String {
    match sizing {
        ResolvedSizing::Pixels(size) => format!("Size: {size}"),
        ResolvedSizing::Ratio(ratio) => format!("Aspect ratio: {ratio}"),
    }
}

fn write_image_lines(out: &mut String, image: &DownloadedImage, indent: &str) {
    match &image.outcome {
        DownloadOutcome::Saved(path) => {
            let _ = writeln!(out, "{indent}Saved to: {}", path.display());
        }
        DownloadOutcome::Failed(reason) => {
            let _ = writeln!(
                out,
                "{indent}Download failed ({reason}); retrieve it from the URL below"
            );
        }
    }
    let _ = writeln!(out, "{indent}URL: {}", image.url);
}

fn on_off(flag: bool) -> &'static str {
    if flag { "enabled" } else { "disabled" }
}
