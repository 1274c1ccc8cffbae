//! Labeler configuration

use binlens_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for an [`ImageLabeler`](crate::labeler::ImageLabeler).
///
/// Passed explicitly to the constructor; there is no process-wide
/// default labeler. Loadable from a YAML file, with the threshold and
/// result-count defaults matching the bundled model's intended use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelerOptions {
    /// Path to the bundled model asset
    pub model_path: PathBuf,

    /// Minimum confidence a label needs to be reported
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,

    /// Maximum number of labels reported per call
    #[serde(default = "default_max_result_count")]
    pub max_result_count: usize,

    /// Model input size as [width, height]
    #[serde(default = "default_input_size")]
    pub input_size: [u32; 2],
}

fn default_confidence_threshold() -> f32 {
    0.5
}

fn default_max_result_count() -> usize {
    5
}

fn default_input_size() -> [u32; 2] {
    [224, 224]
}

impl LabelerOptions {
    /// Options for the model at `model_path` with default threshold
    /// (0.5) and result count (5)
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            confidence_threshold: default_confidence_threshold(),
            max_result_count: default_max_result_count(),
            input_size: default_input_size(),
        }
    }

    /// Load options from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("failed to read {}: {e}", path.display())))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Set the confidence threshold
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Set the maximum result count
    pub fn with_max_result_count(mut self, count: usize) -> Self {
        self.max_result_count = count;
        self
    }

    /// Set the model input size
    pub fn with_input_size(mut self, width: u32, height: u32) -> Self {
        self.input_size = [width, height];
        self
    }

    /// Check the options for values the labeler cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(Error::config(format!(
                "confidence threshold {} must be within 0.0..=1.0",
                self.confidence_threshold
            )));
        }
        if self.max_result_count == 0 {
            return Err(Error::config("max result count must be at least 1"));
        }
        if self.input_size.iter().any(|&side| side == 0) {
            return Err(Error::config("model input size must be non-zero"));
        }
        Ok(())
    }
}
