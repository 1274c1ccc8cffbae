//! Error types for binlens

/// Result type alias using the binlens Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for classification operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The bundled model asset could not be read or parsed. Fatal to
    /// any subsequent classification attempt.
    #[error("model load error: {0}")]
    ModelLoad(String),

    /// The inference engine failed while processing a valid image.
    #[error("inference error: {0}")]
    Inference(String),

    /// No label cleared the configured confidence threshold.
    #[error("no label cleared the confidence threshold")]
    NoResult,

    /// The engine reported a category index outside the label set.
    #[error("category index {0} is outside the label set (0..=6)")]
    InvalidCategory(usize),

    /// Image decoding or conversion errors
    #[error("image error: {0}")]
    Image(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine dropped its completion callback without invoking it.
    #[error("classification was abandoned before completing")]
    Canceled,
}

impl Error {
    /// Create a new model load error
    pub fn model_load(msg: impl Into<String>) -> Self {
        Self::ModelLoad(msg.into())
    }

    /// Create a new inference error
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Create a new image error
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
