//! mapcc-region - Connected region labeling and ranking
//!
//! This crate provides the algorithmic core of mapcc:
//!
//! - **Region labeling** - Partitioning the foreground of a binary raster
//!   into maximal 8-connected regions with a breadth-first traversal
//! - **Label maps** - Per-pixel region ids derived from a labeling
//! - **Region ranking** - Ordering regions by descending size and selecting
//!   the largest ones with their pixel coordinates
//!
//! Everything here works on in-memory data only. Deciding what counts as
//! foreground, decoding images and rendering results belong to `mapcc-io`.
//!
//! # Examples
//!
//! ## Labeling regions
//!
//! ```
//! use mapcc_core::Raster;
//! use mapcc_region::label_regions;
//!
//! let raster = Raster::from_pattern(
//!     "#...
//!      .#..
//!      ...#",
//! )
//! .unwrap();
//!
//! // The two diagonal pixels form one region
//! let labeling = label_regions(&raster).unwrap();
//! assert_eq!(labeling.table.len(), 2);
//! assert_eq!(labeling.table.size(1), Some(2));
//! ```
//!
//! ## Selecting the largest regions
//!
//! ```
//! use mapcc_core::Raster;
//! use mapcc_region::{label_regions, rank_regions, top_k};
//!
//! let raster = Raster::from_pattern(
//!     ".##.#
//!      .##..",
//! )
//! .unwrap();
//! let table = label_regions(&raster).unwrap().table;
//! let ranked = rank_regions(&table);
//! let top = top_k(&ranked, &table, 1).unwrap();
//! assert_eq!(top[0].size, 4);
//! assert_eq!(top[0].coords.len(), 4);
//! ```

pub mod conncomp;
pub mod error;
pub mod label;
pub mod rank;

// Re-export core types
pub use mapcc_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export connectivity
pub use conncomp::ConnectivityType;

// Re-export label types and functions
pub use label::{
    LabelMap, LabelOptions, Labeling, Region, RegionTable, label_regions, label_regions_with,
};

// Re-export rank types and functions
pub use rank::{RankedRegion, TopRegion, rank_regions, sort_by_size_desc, top_k, top_k_count};
