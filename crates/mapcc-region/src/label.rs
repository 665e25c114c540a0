//! Region labeling
//!
//! Partitions the foreground pixels of a [`Raster`] into maximal connected
//! regions. The raster is scanned once in row-major order; every unvisited
//! foreground pixel seeds a breadth-first traversal that discovers one
//! whole region.
//!
//! Region ids are assigned in discovery order starting at 1, so they depend
//! only on the scan order (row 0 first, left to right within a row). The
//! set of region sizes does not depend on the scan order at all.

use crate::conncomp::ConnectivityType;
use crate::error::{RegionError, RegionResult};
use log::debug;
use mapcc_core::{Coord, Raster};
use std::collections::VecDeque;

/// Options for region labeling
#[derive(Debug, Clone, Default)]
pub struct LabelOptions {
    /// Connectivity type (8-way by default)
    pub connectivity: ConnectivityType,
}

impl LabelOptions {
    /// Create new options with the specified connectivity
    pub fn new(connectivity: ConnectivityType) -> Self {
        Self { connectivity }
    }

    /// Set the connectivity
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }
}

/// A connected region of foreground pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Region id, starting at 1 in discovery order
    pub id: u32,
    /// Number of member pixels, seed included
    pub size: usize,
    /// Member pixels in traversal order
    pub coords: Vec<Coord>,
}

/// All regions found by one labeling pass.
///
/// Region `id` is stored at position `id - 1`. The table is immutable once
/// labeling returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionTable {
    regions: Vec<Region>,
}

impl RegionTable {
    /// Number of regions.
    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// `true` if no region was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Look up a region by id.
    pub fn get(&self, id: u32) -> Option<&Region> {
        let index = (id as usize).checked_sub(1)?;
        self.regions.get(index)
    }

    /// Size of region `id`.
    pub fn size(&self, id: u32) -> Option<usize> {
        self.get(id).map(|r| r.size)
    }

    /// Member coordinates of region `id`.
    pub fn coords(&self, id: u32) -> Option<&[Coord]> {
        self.get(id).map(|r| r.coords.as_slice())
    }

    /// Iterate over the regions in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// `(id, size)` pairs in id order.
    pub fn sizes(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.regions.iter().map(|r| (r.id, r.size))
    }

    /// Total number of labeled pixels.
    pub fn total_pixels(&self) -> usize {
        self.regions.iter().map(|r| r.size).sum()
    }
}

impl<'a> IntoIterator for &'a RegionTable {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

/// Result of a labeling pass
#[derive(Debug, Clone)]
pub struct Labeling {
    /// Every foreground pixel reached by the traversal
    pub visited: Raster,
    /// The discovered regions
    pub table: RegionTable,
}

impl Labeling {
    /// Split into `(visited, table)`.
    pub fn into_parts(self) -> (Raster, RegionTable) {
        (self.visited, self.table)
    }

    /// Build the per-pixel region id map.
    pub fn label_map(&self) -> LabelMap {
        let (width, height) = self.visited.dimensions();
        let mut map = LabelMap::empty(width, height);
        for region in &self.table {
            for c in &region.coords {
                map.put(*c, region.id);
            }
        }
        map
    }
}

/// Per-pixel region ids; `0` marks background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
}

impl LabelMap {
    fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            labels: vec![0; width as usize * height as usize],
        }
    }

    /// Build a label map of the given size from a region table.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if a region coordinate
    /// lies outside `width x height`.
    pub fn from_table(table: &RegionTable, width: u32, height: u32) -> RegionResult<Self> {
        let mut map = Self::empty(width, height);
        for region in table {
            for c in &region.coords {
                if c.row >= height || c.col >= width {
                    return Err(RegionError::InvalidParameters(format!(
                        "region {} pixel {} outside {}x{} map",
                        region.id, c, width, height
                    )));
                }
                map.put(*c, region.id);
            }
        }
        Ok(map)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Region id at `(row, col)`, `Some(0)` for background.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.labels[row as usize * self.width as usize + col as usize])
    }

    /// Row-major label values.
    pub fn as_slice(&self) -> &[u32] {
        &self.labels
    }

    /// Largest label present (the region count for a full labeling).
    pub fn max_label(&self) -> u32 {
        self.labels.iter().copied().max().unwrap_or(0)
    }

    fn put(&mut self, c: Coord, id: u32) {
        self.labels[c.row as usize * self.width as usize + c.col as usize] = id;
    }
}

/// Label the 8-connected foreground regions of a raster.
///
/// Returns the visited map together with the region table.
///
/// # Errors
///
/// Only fails if the number of regions cannot be represented as a `u32` id.
///
/// # Examples
///
/// ```
/// use mapcc_core::Raster;
/// use mapcc_region::label_regions;
///
/// let raster = Raster::from_pattern(
///     "##..
///      ...#
///      ...#",
/// )
/// .unwrap();
/// let labeling = label_regions(&raster).unwrap();
/// assert_eq!(labeling.table.len(), 2);
/// assert_eq!(labeling.table.size(1), Some(2));
/// assert_eq!(labeling.table.size(2), Some(2));
/// ```
pub fn label_regions(raster: &Raster) -> RegionResult<Labeling> {
    label_regions_with(raster, &LabelOptions::default())
}

/// Label the connected foreground regions of a raster with explicit options.
pub fn label_regions_with(raster: &Raster, options: &LabelOptions) -> RegionResult<Labeling> {
    let (width, height) = raster.dimensions();
    let mut visited = raster.create_template();
    let mut regions: Vec<Region> = Vec::new();

    for row in 0..height {
        for col in 0..width {
            if !raster.get_unchecked(row, col) || visited.get_unchecked(row, col) {
                continue;
            }

            let id = u32::try_from(regions.len() + 1).map_err(|_| {
                RegionError::InvalidParameters("region count exceeds u32 ids".to_string())
            })?;
            let region = grow_region(
                raster,
                &mut visited,
                Coord::new(row, col),
                id,
                options.connectivity,
            );
            debug!("region {}: {} pixels", region.id, region.size);
            regions.push(region);
        }
    }

    debug!(
        "{} regions in {}x{} raster ({:?})",
        regions.len(),
        width,
        height,
        options.connectivity
    );

    Ok(Labeling {
        visited,
        table: RegionTable { regions },
    })
}

/// Breadth-first traversal of the region containing `seed`.
///
/// A pixel is marked visited when it is enqueued, so each pixel enters the
/// queue at most once.
fn grow_region(
    raster: &Raster,
    visited: &mut Raster,
    seed: Coord,
    id: u32,
    connectivity: ConnectivityType,
) -> Region {
    let (width, height) = raster.dimensions();
    let mut coords = Vec::new();
    let mut queue = VecDeque::new();

    visited.set_unchecked(seed.row, seed.col, true);
    let mut size = 1;
    queue.push_back(seed);

    while let Some(current) = queue.pop_front() {
        coords.push(current);

        for n in connectivity.neighbors(current, height, width) {
            if raster.get_unchecked(n.row, n.col) && !visited.get_unchecked(n.row, n.col) {
                visited.set_unchecked(n.row, n.col, true);
                size += 1;
                queue.push_back(n);
            }
        }
    }

    Region { id, size, coords }
}
