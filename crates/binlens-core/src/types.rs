//! Classification result types

use crate::category::Category;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single scored label produced by one inference call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageLabel {
    /// The category this label refers to
    pub category: Category,

    /// Confidence score (0.0-1.0)
    pub confidence: f32,
}

impl ImageLabel {
    /// Create a new scored label
    pub fn new(category: Category, confidence: f32) -> Self {
        Self {
            category,
            confidence,
        }
    }
}

/// The ordered outcome of one classification call.
///
/// Labels are held in descending confidence order. The result is
/// produced once per inference call and never persisted.
#[derive(Debug, Clone, Default)]
pub struct ClassificationResult {
    labels: Vec<ImageLabel>,
}

impl ClassificationResult {
    /// Build a result from unordered labels, sorting by descending
    /// confidence. NaN confidences sort last.
    pub fn new(mut labels: Vec<ImageLabel>) -> Self {
        labels.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self { labels }
    }

    /// An empty result (no label cleared the threshold)
    pub fn empty() -> Self {
        Self::default()
    }

    /// The highest-confidence label.
    ///
    /// Fails with [`Error::NoResult`] when no label qualified; callers
    /// must never index into the sequence directly.
    pub fn top(&self) -> Result<&ImageLabel> {
        self.labels.first().ok_or(Error::NoResult)
    }

    /// All labels in descending confidence order
    pub fn labels(&self) -> &[ImageLabel] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
