//! mapcc Core - Basic data structures for region labeling
//!
//! This crate provides the fundamental data structures shared by the
//! labeling, ranking and I/O crates:
//!
//! - [`Raster`] - Bit-packed two-valued pixel field (foreground/background)
//! - [`Coord`] - `(row, col)` pixel position with bounds-checked offsets
//! - [`Error`] / [`Result`] - Error type for construction and access

pub mod coord;
pub mod error;
pub mod raster;

pub use coord::Coord;
pub use error::{Error, Result};
pub use raster::Raster;
