//! The fixed garbage category set
//!
//! The model is trained on seven categories with a stable index order.
//! The indices form the wire contract with the model's output layer,
//! so they are kept explicit here rather than relying on declaration
//! order alone.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven categories the bundled model can report.
///
/// Index 3 (`NonGarbage`) is the reserved "not garbage" category; every
/// other category counts as garbage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cardboard = 0,
    Glass = 1,
    Metal = 2,
    NonGarbage = 3,
    Paper = 4,
    Plastic = 5,
    Trash = 6,
}

impl Category {
    /// Number of categories in the label set
    pub const COUNT: usize = 7;

    /// All categories in model index order
    pub const ALL: [Category; Self::COUNT] = [
        Category::Cardboard,
        Category::Glass,
        Category::Metal,
        Category::NonGarbage,
        Category::Paper,
        Category::Plastic,
        Category::Trash,
    ];

    /// Resolve a raw model index into a category.
    ///
    /// Fails with [`Error::InvalidCategory`] for indices outside `0..=6`.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::InvalidCategory(index))
    }

    /// The stable model index for this category
    pub fn index(self) -> usize {
        self as usize
    }

    /// The label string matching the model's training label order
    pub fn label(self) -> &'static str {
        match self {
            Category::Cardboard => "cardboard",
            Category::Glass => "glass",
            Category::Metal => "metal",
            Category::NonGarbage => "non_garbage",
            Category::Paper => "paper",
            Category::Plastic => "plastic",
            Category::Trash => "trash",
        }
    }

    /// Whether this category counts as garbage
    pub fn is_garbage(self) -> bool {
        self != Category::NonGarbage
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<usize> for Category {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Self::from_index(index)
    }
}
