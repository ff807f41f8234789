//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur when splitting a dataset into stratified folds.
#[derive(Debug, Clone, Error)]
pub enum FoldError {
    #[error("fold count must be at least 1")]
    ZeroFolds,

    #[error("cannot split {len} items into {k} folds")]
    TooManyFolds { k: usize, len: usize },

    #[error("data has {data} items but labels has {labels}")]
    LengthMismatch { data: usize, labels: usize },
}

/// Errors that occur while loading a persisted agent export.
#[derive(Debug, Error)]
pub enum AgentLoadError {
    #[error("failed to read agent export: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed agent export: {0}")]
    Parse(#[from] serde_json::Error),
}
