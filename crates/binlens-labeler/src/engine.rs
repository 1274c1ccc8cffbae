//! Engine seam for label inference

use binlens_core::{ClassificationResult, Result};
use image::DynamicImage;

/// A synchronous inference engine bound to one loaded model.
///
/// Engines score the full category set for one image at a time; the
/// confidence filtering and result-count truncation configured by the
/// caller belong to the [`ImageLabeler`](crate::labeler::ImageLabeler)
/// that owns the engine. The engine must not retain the image beyond
/// the duration of the call.
pub trait LabelEngine: Send + Sync {
    /// Score `image` against the full label set.
    fn label(&self, image: &DynamicImage) -> Result<ClassificationResult>;

    /// Engine name for logging
    fn name(&self) -> &str;
}
