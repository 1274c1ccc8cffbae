//! tract-onnx inference engine
//!
//! Runs the bundled ONNX model on CPU. The model's output layer is a
//! vector of seven logits in the training label order; scores are
//! softmax-normalized before they reach the labeler.

use crate::engine::LabelEngine;
use crate::options::LabelerOptions;
use crate::preprocess;
use binlens_core::{Category, ClassificationResult, Error, ImageLabel, Result};
use image::DynamicImage;
use tract_onnx::prelude::*;
use tracing::debug;

type RunnableOnnx = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

/// CPU inference over the bundled ONNX model
pub struct TractEngine {
    plan: RunnableOnnx,
    input_width: u32,
    input_height: u32,
}

impl std::fmt::Debug for TractEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TractEngine")
            .field("input_width", &self.input_width)
            .field("input_height", &self.input_height)
            .finish_non_exhaustive()
    }
}

impl TractEngine {
    /// Load and optimize the model at `options.model_path`.
    ///
    /// A missing or unparseable asset fails here with
    /// [`Error::ModelLoad`]; no inference is ever attempted against a
    /// partially loaded model.
    pub fn load(options: &LabelerOptions) -> Result<Self> {
        let path = &options.model_path;
        if !path.is_file() {
            return Err(Error::model_load(format!(
                "model asset not found: {}",
                path.display()
            )));
        }

        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| Error::model_load(format!("{}: {e}", path.display())))?;

        debug!(model = %path.display(), "model loaded");

        let [input_width, input_height] = options.input_size;
        Ok(Self {
            plan,
            input_width,
            input_height,
        })
    }

    fn scores(&self, image: &DynamicImage) -> Result<Vec<f32>> {
        let input = preprocess::to_tensor(image, self.input_width, self.input_height)?;

        let outputs = self
            .plan
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| Error::inference(format!("model execution failed: {e}")))?;

        let output = outputs
            .first()
            .ok_or_else(|| Error::inference("model produced no output"))?;
        let view = output
            .to_array_view::<f32>()
            .map_err(|e| Error::inference(format!("model output is not f32: {e}")))?;

        let logits: Vec<f32> = view.iter().copied().collect();
        if logits.len() != Category::COUNT {
            return Err(Error::inference(format!(
                "expected {} class scores, got {}",
                Category::COUNT,
                logits.len()
            )));
        }

        Ok(softmax(&logits))
    }
}

impl LabelEngine for TractEngine {
    fn label(&self, image: &DynamicImage) -> Result<ClassificationResult> {
        let scores = self.scores(image)?;

        let mut labels = Vec::with_capacity(Category::COUNT);
        for (index, confidence) in scores.into_iter().enumerate() {
            labels.push(ImageLabel::new(Category::from_index(index)?, confidence));
        }

        Ok(ClassificationResult::new(labels))
    }

    fn name(&self) -> &str {
        "tract-onnx"
    }
}

fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|v| (v - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|v| v / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softmax_is_a_probability_distribution() {
        let scores = softmax(&[1.0, 2.0, 3.0, 0.5, -1.0, 0.0, 2.5]);

        let sum: f32 = scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!(scores.iter().all(|&s| (0.0..=1.0).contains(&s)));
    }

    #[test]
    fn softmax_preserves_ranking() {
        let scores = softmax(&[0.1, 4.0, 2.0]);
        assert!(scores[1] > scores[2]);
        assert!(scores[2] > scores[0]);
    }
}
