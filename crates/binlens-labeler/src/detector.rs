//! Garbage detection over the label classifier
//!
//! Bridges the labeler's one-shot callback into an awaitable result.
//! Each call is a single-shot promise: pending until the callback
//! fires, then resolved with a value or an error, exactly once.

use crate::labeler::ImageLabeler;
use crate::options::LabelerOptions;
use async_trait::async_trait;
use binlens_core::{Category, Error, Result};
use image::DynamicImage;
use tokio::sync::oneshot;

/// Classification surface over a single image
#[async_trait]
pub trait Classify: Send + Sync {
    /// Classify `image` and resolve to the highest-confidence category.
    async fn process_image(&self, image: &DynamicImage) -> Result<Category>;

    /// Whether the image shows garbage.
    ///
    /// Derived from [`process_image`](Classify::process_image): true
    /// unless the resolved category is the reserved non-garbage one.
    async fn is_garbage(&self, image: &DynamicImage) -> Result<bool> {
        Ok(self.process_image(image).await?.is_garbage())
    }
}

/// Classifies one image at a time against the bundled garbage model
#[derive(Debug)]
pub struct GarbageDetector {
    labeler: ImageLabeler,
}

impl GarbageDetector {
    /// Load the model named by `options` and build a detector over it
    pub fn new(options: LabelerOptions) -> Result<Self> {
        Ok(Self {
            labeler: ImageLabeler::new(options)?,
        })
    }

    /// Build a detector over an existing labeler
    pub fn with_labeler(labeler: ImageLabeler) -> Self {
        Self { labeler }
    }

    /// The labeler backing this detector
    pub fn labeler(&self) -> &ImageLabeler {
        &self.labeler
    }
}

#[async_trait]
impl Classify for GarbageDetector {
    async fn process_image(&self, image: &DynamicImage) -> Result<Category> {
        let (tx, rx) = oneshot::channel();

        self.labeler.process(
            image,
            Box::new(move |outcome| {
                // The receiver may have gone away; the computation still
                // ran and its result is discarded.
                let _ = tx.send(outcome);
            }),
        );

        // A dropped sender means the callback never fired.
        let labels = rx.await.map_err(|_| Error::Canceled)??;

        Ok(labels.top()?.category)
    }
}
