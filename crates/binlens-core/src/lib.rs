//! binlens core
//!
//! Shared types for the binlens garbage classifier:
//! - The fixed seven-category label set and its index contract
//! - Classification result types
//! - Error types and result handling

pub mod category;
pub mod error;
pub mod types;

pub use category::Category;
pub use error::{Error, Result};
pub use types::{ClassificationResult, ImageLabel};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::category::Category;
    pub use crate::error::{Error, Result};
    pub use crate::types::{ClassificationResult, ImageLabel};
}
