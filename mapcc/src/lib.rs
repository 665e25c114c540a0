//! mapcc - Connected regions of binary map rasters
//!
//! Finds the 8-connected foreground regions of a binary raster, ranks them
//! by pixel count and selects the largest ones.
//!
//! # Overview
//!
//! - Raster and coordinate types ([`Raster`], [`Coord`])
//! - Region labeling by breadth-first flood fill ([`region::label_regions`])
//! - Ranking and top-k selection ([`region::rank_regions`], [`region::top_k`])
//! - PNG colour maps, classification and reports ([`io`])
//!
//! # Example
//!
//! ```
//! use mapcc::Raster;
//! use mapcc::region::{label_regions, rank_regions, top_k};
//!
//! let raster = Raster::from_pattern(
//!     ".##..
//!      ..#.#
//!      .....",
//! )
//! .unwrap();
//! let labeling = label_regions(&raster).unwrap();
//! let ranked = rank_regions(&labeling.table);
//! let top = top_k(&ranked, &labeling.table, 1).unwrap();
//! assert_eq!(top[0].size, 3);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use mapcc_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use mapcc_io as io;
pub use mapcc_region as region;
