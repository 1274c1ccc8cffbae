//! binlens labeler
//!
//! The label classifier client and the garbage detector over it:
//! - [`ImageLabeler`]: a one-shot, callback-based classification
//!   client bound to a bundled model, configured through
//!   [`LabelerOptions`]
//! - [`GarbageDetector`]: the awaitable adapter resolving each call to
//!   the top-ranked [`Category`](binlens_core::Category)
//! - [`LabelEngine`]: the seam behind the labeler, implemented by the
//!   tract-onnx engine and by fakes in tests

pub mod detector;
pub mod engine;
pub mod labeler;
pub mod options;
pub mod preprocess;
pub mod tract;

pub use detector::{Classify, GarbageDetector};
pub use engine::LabelEngine;
pub use labeler::{ImageLabeler, LabelCallback};
pub use options::LabelerOptions;
pub use tract::TractEngine;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::detector::{Classify, GarbageDetector};
    pub use crate::engine::LabelEngine;
    pub use crate::labeler::{ImageLabeler, LabelCallback};
    pub use crate::options::LabelerOptions;
    pub use binlens_core::{Category, ClassificationResult, Error, ImageLabel, Result};
}
