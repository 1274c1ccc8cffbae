//! Model loading failure tests
//!
//! A missing or corrupt model asset must fail construction, before any
//! inference is attempted.

use binlens_core::Error;
use binlens_labeler::{GarbageDetector, ImageLabeler, LabelerOptions, TractEngine};

#[test]
fn missing_model_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let options = LabelerOptions::new(dir.path().join("garbage.onnx"));

    let err = TractEngine::load(&options).unwrap_err();
    assert!(matches!(err, Error::ModelLoad(_)));
}

#[test]
fn corrupt_model_fails_to_parse() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.onnx");
    std::fs::write(&path, b"not an onnx model").unwrap();

    let err = TractEngine::load(&LabelerOptions::new(path)).unwrap_err();
    assert!(matches!(err, Error::ModelLoad(_)));
}

#[test]
fn labeler_construction_propagates_model_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let options = LabelerOptions::new(dir.path().join("missing.onnx"));

    let err = ImageLabeler::new(options).unwrap_err();
    assert!(matches!(err, Error::ModelLoad(_)));
}

#[test]
fn detector_construction_propagates_model_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let options = LabelerOptions::new(dir.path().join("missing.onnx"));

    let err = GarbageDetector::new(options).unwrap_err();
    assert!(matches!(err, Error::ModelLoad(_)));
}
