//! Error types for mapcc-core
//!
//! Provides a unified error type for raster construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! the packed storage layout.

use thiserror::Error;

/// mapcc core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Raster dimensions cannot be represented (pixel count overflows)
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Supplied pixel data does not match the stated dimensions
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for mapcc core operations
pub type Result<T> = std::result::Result<T, Error>;
