//! The label classifier client
//!
//! Owns one loaded engine plus the confidence threshold and result
//! count it was configured with, and exposes a one-shot callback API
//! over it.

use crate::engine::LabelEngine;
use crate::options::LabelerOptions;
use crate::tract::TractEngine;
use binlens_core::{ClassificationResult, ImageLabel, Result};
use image::DynamicImage;
use std::sync::Arc;
use tracing::{debug, warn};

/// Completion callback for one classification call.
///
/// Invoked exactly once with either the filtered label list or the
/// engine's failure.
pub type LabelCallback = Box<dyn FnOnce(Result<ClassificationResult>) + Send + 'static>;

/// A classification client bound to one loaded model.
///
/// Calls are independent; the labeler holds no mutable state between
/// them and can be shared freely.
pub struct ImageLabeler {
    engine: Arc<dyn LabelEngine>,
    options: LabelerOptions,
}

impl std::fmt::Debug for ImageLabeler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageLabeler")
            .field("engine", &self.engine.name())
            .field("options", &self.options)
            .finish()
    }
}

impl ImageLabeler {
    /// Load the model named by `options` and build a labeler over it.
    ///
    /// Fails with [`binlens_core::Error::Config`] for unusable options
    /// and [`binlens_core::Error::ModelLoad`] when the model asset
    /// cannot be read, before any inference is attempted.
    pub fn new(options: LabelerOptions) -> Result<Self> {
        options.validate()?;
        let engine = TractEngine::load(&options)?;
        Ok(Self::with_engine(Arc::new(engine), options))
    }

    /// Build a labeler over an already-constructed engine.
    ///
    /// The model path in `options` is ignored here; the engine is
    /// taken as-is. This is the substitution point for fake engines in
    /// tests.
    pub fn with_engine(engine: Arc<dyn LabelEngine>, options: LabelerOptions) -> Self {
        Self { engine, options }
    }

    /// The options this labeler was built with
    pub fn options(&self) -> &LabelerOptions {
        &self.options
    }

    /// Run one classification. `on_complete` fires exactly once, from
    /// a blocking worker thread, with the labels that cleared the
    /// confidence threshold (at most `max_result_count`, descending by
    /// confidence) or with the engine's failure.
    ///
    /// The image is copied for the call and not retained afterwards.
    pub fn process(&self, image: &DynamicImage, on_complete: LabelCallback) {
        let engine = Arc::clone(&self.engine);
        let threshold = self.options.confidence_threshold;
        let max_results = self.options.max_result_count;
        let image = image.clone();

        // Detached; completion is reported through the callback.
        let _ = tokio::task::spawn_blocking(move || {
            debug!(engine = engine.name(), "running inference");

            let outcome = engine.label(&image).map(|scored| {
                let mut labels: Vec<ImageLabel> = scored
                    .labels()
                    .iter()
                    .copied()
                    .filter(|label| label.confidence >= threshold)
                    .collect();
                labels.truncate(max_results);

                if labels.is_empty() {
                    warn!(threshold, "no label cleared the confidence threshold");
                }

                ClassificationResult::new(labels)
            });

            on_complete(outcome);
        });
    }
}
