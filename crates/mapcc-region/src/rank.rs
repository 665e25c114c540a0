//! Region ranking
//!
//! Orders the regions of a [`RegionTable`] by descending size and selects
//! the largest ones together with their pixel coordinates.
//!
//! The ordering uses an in-place partition sort with the last element of
//! each sub-range as pivot. It is not stable: regions of equal size end up
//! next to each other, but their relative order is unspecified.

use crate::error::{RegionError, RegionResult};
use crate::label::RegionTable;
use log::trace;
use mapcc_core::Coord;

/// `(id, size)` entry of a ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedRegion {
    /// Region id
    pub id: u32,
    /// Number of pixels
    pub size: usize,
}

impl RankedRegion {
    /// Create a new entry
    pub fn new(id: u32, size: usize) -> Self {
        Self { id, size }
    }
}

/// A selected region with its member pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopRegion<'a> {
    /// Region id
    pub id: u32,
    /// Number of pixels
    pub size: usize,
    /// Member pixels
    pub coords: &'a [Coord],
}

/// Sort entries by descending size, in place.
///
/// Each pass partitions the sub-range around its last element: entries
/// strictly larger than the pivot are swapped to the front in encounter
/// order and the pivot lands right after them. The two sides are then
/// sorted independently. Average cost is `O(n log n)`; already ordered
/// input degrades to `O(n^2)`.
///
/// The smaller side is handled by recursion and the larger one by the loop,
/// which keeps the stack depth logarithmic even in the quadratic case.
pub fn sort_by_size_desc(mut items: &mut [RankedRegion]) {
    while items.len() > 1 {
        let p = partition(items);
        let (left, rest) = std::mem::take(&mut items).split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            sort_by_size_desc(left);
            items = right;
        } else {
            sort_by_size_desc(right);
            items = left;
        }
    }
}

/// Partition around the last element; returns the pivot's final index.
fn partition(items: &mut [RankedRegion]) -> usize {
    let high = items.len() - 1;
    let pivot = items[high].size;
    let mut i = 0;
    for j in 0..high {
        if items[j].size > pivot {
            items.swap(i, j);
            i += 1;
        }
    }
    items.swap(i, high);
    i
}

/// Rank the regions of a table by descending size.
///
/// # Examples
///
/// ```
/// use mapcc_core::Raster;
/// use mapcc_region::{label_regions, rank_regions};
///
/// let raster = Raster::from_pattern("#.###").unwrap();
/// let table = label_regions(&raster).unwrap().table;
/// let ranked = rank_regions(&table);
/// assert_eq!(ranked[0].size, 3);
/// assert_eq!(ranked[1].size, 1);
/// ```
pub fn rank_regions(table: &RegionTable) -> Vec<RankedRegion> {
    let mut ranked: Vec<RankedRegion> = table
        .sizes()
        .map(|(id, size)| RankedRegion { id, size })
        .collect();
    sort_by_size_desc(&mut ranked);
    trace!("ranked {} regions", ranked.len());
    ranked
}

/// Take the first `k` entries of a ranking together with their coordinates.
///
/// If fewer than `k` regions exist, all of them are returned; callers treat
/// a short result as "fewer regions than requested".
///
/// # Errors
///
/// Returns [`RegionError::UnknownRegion`] if an entry in `ranked` is not in
/// `table`, which means the ranking was built from a different table.
pub fn top_k<'a>(
    ranked: &[RankedRegion],
    table: &'a RegionTable,
    k: usize,
) -> RegionResult<Vec<TopRegion<'a>>> {
    ranked
        .iter()
        .take(k)
        .map(|entry| {
            let region = table
                .get(entry.id)
                .ok_or(RegionError::UnknownRegion(entry.id))?;
            Ok(TopRegion {
                id: entry.id,
                size: entry.size,
                coords: &region.coords,
            })
        })
        .collect()
}

/// Validate a signed region count, e.g. one parsed from user input.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if `k` is negative or does not
/// fit in `usize`.
pub fn top_k_count(k: i64) -> RegionResult<usize> {
    usize::try_from(k)
        .map_err(|_| RegionError::InvalidParameters(format!("top-k count must be >= 0, got {k}")))
}

impl RegionTable {
    /// The `k` largest regions, largest first.
    pub fn largest(&self, k: usize) -> Vec<TopRegion<'_>> {
        rank_regions(self)
            .into_iter()
            .take(k)
            .filter_map(|entry| {
                self.get(entry.id).map(|region| TopRegion {
                    id: region.id,
                    size: region.size,
                    coords: &region.coords,
                })
            })
            .collect()
    }
}
