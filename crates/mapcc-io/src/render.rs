//! Rendering of selected regions
//!
//! Paints the pixels of chosen regions onto an empty canvas, producing a
//! raster in which only those regions are foreground.

use crate::error::{IoError, IoResult};
use mapcc_core::{Coord, Raster};
use mapcc_region::{RankedRegion, RegionTable, top_k};

/// Paint the coordinates of `regions` onto a `width x height` canvas.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if a coordinate lies outside the canvas.
pub fn render_regions<'a, I>(width: u32, height: u32, regions: I) -> IoResult<Raster>
where
    I: IntoIterator<Item = &'a [Coord]>,
{
    let mut canvas = Raster::new(width, height)?;
    for coords in regions {
        for c in coords {
            if !canvas.contains(*c) {
                return Err(IoError::InvalidData(format!(
                    "pixel {} outside {}x{} canvas",
                    c, width, height
                )));
            }
            canvas.set_unchecked(c.row, c.col, true);
        }
    }
    Ok(canvas)
}

/// Paint the `k` highest ranked regions onto a `width x height` canvas.
pub fn render_top_regions(
    table: &RegionTable,
    ranked: &[RankedRegion],
    k: usize,
    width: u32,
    height: u32,
) -> IoResult<Raster> {
    let top = top_k(ranked, table, k)?;
    render_regions(width, height, top.iter().map(|t| t.coords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapcc_region::{label_regions, rank_regions};

    #[test]
    fn test_render_top_two() {
        let raster = Raster::from_pattern(
            "
            ###..#
            ......
            ##...#
            ",
        )
        .unwrap();
        let table = label_regions(&raster).unwrap().table;
        let ranked = rank_regions(&table);

        let out = render_top_regions(&table, &ranked, 2, 6, 3).unwrap();
        let expected = Raster::from_pattern(
            "
            ###...
            ......
            ##....
            ",
        )
        .unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_all_when_k_too_large() {
        let raster = Raster::from_pattern("#.#.#").unwrap();
        let table = label_regions(&raster).unwrap().table;
        let ranked = rank_regions(&table);
        let out = render_top_regions(&table, &ranked, 10, 5, 1).unwrap();
        assert_eq!(out, raster);
    }

    #[test]
    fn test_render_outside_canvas() {
        let coords = [Coord::new(0, 5)];
        assert!(matches!(
            render_regions(3, 3, [&coords[..]]),
            Err(IoError::InvalidData(_))
        ));
    }
}
