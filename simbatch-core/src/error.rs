use thiserror::Error;

/// Custom error type for the SimBatch crates.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum SimBatchError {
    #[error("Empty dataset: {operation} requires at least one example")]
    EmptyDataset { operation: String },

    #[error("Length mismatch: {features} feature items but {labels} labels")]
    LengthMismatch { features: usize, labels: usize },

    #[error("Index out of bounds: index {index} for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Augmentation error: {0}")]
    AugmentationError(String),
}
