//! Labeler filtering and configuration tests
//!
//! Exercises the callback surface directly: threshold filtering,
//! result-count truncation, and option validation.

#[path = "mock_engines.rs"]
mod mocks;

use binlens_core::{Category, ClassificationResult, Error, Result};
use binlens_labeler::{ImageLabeler, LabelEngine, LabelerOptions};
use image::DynamicImage;
use mocks::MockEngine;
use std::sync::Arc;
use tokio::sync::oneshot;

fn test_image() -> DynamicImage {
    DynamicImage::new_rgb8(16, 16)
}

async fn run(labeler: &ImageLabeler, image: &DynamicImage) -> Result<ClassificationResult> {
    let (tx, rx) = oneshot::channel();
    labeler.process(
        image,
        Box::new(move |outcome| {
            let _ = tx.send(outcome);
        }),
    );
    rx.await.expect("callback never fired")
}

#[tokio::test]
async fn labels_below_threshold_are_dropped() {
    let engine = Arc::new(
        MockEngine::new()
            .with_label(Category::Cardboard, 0.9)
            .with_label(Category::Glass, 0.55)
            .with_label(Category::Metal, 0.2)
            .with_label(Category::Paper, 0.05),
    );
    let labeler = ImageLabeler::with_engine(engine, LabelerOptions::new("unused.onnx"));

    let result = run(&labeler, &test_image()).await.unwrap();

    assert_eq!(result.len(), 2);
    assert!(result.labels().iter().all(|l| l.confidence >= 0.5));
    assert_eq!(result.top().unwrap().category, Category::Cardboard);
}

#[tokio::test]
async fn results_are_truncated_to_max_count() {
    let mut engine = MockEngine::new();
    for category in Category::ALL {
        engine = engine.with_label(category, 0.9);
    }
    let options = LabelerOptions::new("unused.onnx").with_confidence_threshold(0.0);
    let labeler = ImageLabeler::with_engine(Arc::new(engine), options);

    let result = run(&labeler, &test_image()).await.unwrap();
    assert_eq!(result.len(), 5);
}

#[tokio::test]
async fn custom_threshold_is_applied() {
    let engine = Arc::new(
        MockEngine::new()
            .with_label(Category::Plastic, 0.7)
            .with_label(Category::Trash, 0.6),
    );
    let options = LabelerOptions::new("unused.onnx").with_confidence_threshold(0.65);
    let labeler = ImageLabeler::with_engine(engine, options);

    let result = run(&labeler, &test_image()).await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.top().unwrap().category, Category::Plastic);
}

#[tokio::test]
async fn labels_come_back_in_descending_confidence_order() {
    let engine = Arc::new(
        MockEngine::new()
            .with_label(Category::Glass, 0.6)
            .with_label(Category::Cardboard, 0.95)
            .with_label(Category::Trash, 0.8),
    );
    let labeler = ImageLabeler::with_engine(engine, LabelerOptions::new("unused.onnx"));

    let result = run(&labeler, &test_image()).await.unwrap();

    let confidences: Vec<f32> = result.labels().iter().map(|l| l.confidence).collect();
    assert_eq!(confidences, vec![0.95, 0.8, 0.6]);
}

#[test]
fn invalid_options_fail_construction() {
    let options = LabelerOptions::new("unused.onnx").with_confidence_threshold(2.0);
    let err = ImageLabeler::new(options).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn options_load_from_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labeler.yaml");
    std::fs::write(
        &path,
        "model_path: models/garbage.onnx\nconfidence_threshold: 0.6\n",
    )
    .unwrap();

    let options = LabelerOptions::from_file(&path).unwrap();
    assert_eq!(options.confidence_threshold, 0.6);
    assert_eq!(options.max_result_count, 5);
}

#[test]
fn malformed_options_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labeler.yaml");
    std::fs::write(&path, "confidence_threshold: [not, a, float]\n").unwrap();

    let err = LabelerOptions::from_file(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn engine_name_is_visible_through_the_seam() {
    let engine: Arc<dyn LabelEngine> = Arc::new(MockEngine::new());
    assert_eq!(engine.name(), "mock");
}
