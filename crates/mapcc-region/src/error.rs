//! Error types for mapcc-region

use thiserror::Error;

/// Errors that can occur during region labeling and ranking
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] mapcc_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A ranking refers to a region id the table does not contain
    #[error("unknown region id: {0}")]
    UnknownRegion(u32),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
