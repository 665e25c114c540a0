//! Raster - two-valued pixel field
//!
//! A `Raster` holds one boolean per pixel: `true` for foreground, `false`
//! for background. It is the input of the region labeler and also serves as
//! the labeler's visited map.
//!
//! # Pixel layout
//!
//! - Pixels are stored one bit each in 32-bit words
//! - Every row starts on a 32-bit boundary
//! - Pixels are packed MSB to LSB within each word
//! - Padding bits at the end of a row are always zero
//!
//! A raster with zero rows or zero columns is valid and simply has no
//! pixels.

use crate::coord::Coord;
use crate::error::{Error, Result};

/// Binary raster of `height x width` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    /// 32-bit words per line
    wpl: u32,
    data: Vec<u32>,
}

impl Raster {
    /// Create an all-background raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the packed buffer size cannot
    /// be represented.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let wpl = width.div_ceil(32);
        let words = (wpl as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            wpl,
            data: vec![0; words],
        })
    }

    /// Create a raster from a row-major slice of pixel values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `bits.len() != width * height`.
    /// The reported actual size is `bits` read as rows of `width` pixels.
    pub fn from_bits(width: u32, height: u32, bits: &[bool]) -> Result<Self> {
        let mut raster = Self::new(width, height)?;
        if bits.len() != raster.pixel_count() {
            let actual = match width {
                0 => (u32::try_from(bits.len()).unwrap_or(u32::MAX), 1),
                w => (
                    w,
                    u32::try_from(bits.len().div_ceil(w as usize)).unwrap_or(u32::MAX),
                ),
            };
            return Err(Error::DimensionMismatch {
                expected: (width, height),
                actual,
            });
        }
        for (i, _) in bits.iter().enumerate().filter(|(_, b)| **b) {
            let row = (i / width as usize) as u32;
            let col = (i % width as usize) as u32;
            raster.put(row, col, true);
        }
        Ok(raster)
    }

    /// Create a raster from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the rows do not all have the
    /// same length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let height = u32::try_from(rows.len()).map_err(|_| Error::InvalidDimension {
            width: 0,
            height: u32::MAX,
        })?;
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let width = u32::try_from(width).map_err(|_| Error::InvalidDimension {
            width: u32::MAX,
            height,
        })?;

        let mut raster = Self::new(width, height)?;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width as usize {
                return Err(Error::DimensionMismatch {
                    expected: (width, height),
                    actual: (values.len() as u32, height),
                });
            }
            for (col, _) in values.iter().enumerate().filter(|(_, v)| **v) {
                raster.put(row as u32, col as u32, true);
            }
        }
        Ok(raster)
    }

    /// Parse a raster from a text picture.
    ///
    /// Each non-blank line is one row. `#` and `1` mark foreground pixels,
    /// `.` and `0` mark background pixels. Leading and trailing whitespace
    /// on a line is ignored.
    ///
    /// ```
    /// use mapcc_core::Raster;
    ///
    /// let r = Raster::from_pattern(
    ///     "#..
    ///      .#.
    ///      ..#",
    /// )
    /// .unwrap();
    /// assert_eq!(r.count_foreground(), 3);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for any other character and
    /// [`Error::DimensionMismatch`] for ragged rows.
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let rows = pattern
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '#' | '1' => Ok(true),
                        '.' | '0' => Ok(false),
                        other => Err(Error::InvalidParameter(format!(
                            "unexpected raster pattern character {other:?}"
                        ))),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(&rows)
    }

    /// Create an all-background raster with the same dimensions as `self`.
    pub fn create_template(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            wpl: self.wpl,
            data: vec![0; self.data.len()],
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Words per line of packed storage.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.wpl
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `true` if the raster has zero rows or zero columns.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check whether `other` has the same dimensions.
    pub fn same_dimensions(&self, other: &Raster) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Check whether a coordinate lies inside the raster.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row < self.height && c.col < self.width
    }

    /// Get the pixel at `(row, col)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<bool> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.get_unchecked(row, col))
    }

    /// Get the pixel at `(row, col)` without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `row >= height` or `col >= width`; release
    /// builds may panic or read a padding bit.
    #[inline]
    pub fn get_unchecked(&self, row: u32, col: u32) -> bool {
        debug_assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) outside {}x{} raster",
            self.width,
            self.height
        );
        let (word, mask) = self.locate(row, col);
        self.data[word] & mask != 0
    }

    /// Get the pixel at `c`; out-of-bounds coordinates read as `false`.
    #[inline]
    pub fn is_foreground(&self, c: Coord) -> bool {
        self.get(c.row, c.col).unwrap_or(false)
    }

    /// Set the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of
    /// bounds.
    pub fn set(&mut self, row: u32, col: u32, value: bool) -> Result<()> {
        if row >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: row as usize,
                len: self.height as usize,
            });
        }
        if col >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: col as usize,
                len: self.width as usize,
            });
        }
        self.put(row, col, value);
        Ok(())
    }

    /// Set the pixel at `(row, col)` without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug builds panic if the coordinates are out of bounds; release
    /// builds may panic or set a padding bit, which breaks
    /// [`count_foreground`](Self::count_foreground).
    #[inline]
    pub fn set_unchecked(&mut self, row: u32, col: u32, value: bool) {
        debug_assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) outside {}x{} raster",
            self.width,
            self.height
        );
        self.put(row, col, value);
    }

    /// Number of foreground pixels.
    pub fn count_foreground(&self) -> usize {
        self.data.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate over the foreground pixels in row-major order.
    pub fn foreground(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width)
                .filter(move |&col| self.get_unchecked(row, col))
                .map(move |col| Coord::new(row, col))
        })
    }

    /// Rows as vectors of booleans (top to bottom).
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.height)
            .map(|row| (0..self.width).map(|col| self.get_unchecked(row, col)).collect())
            .collect()
    }

    /// Raw packed data.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    #[inline]
    fn locate(&self, row: u32, col: u32) -> (usize, u32) {
        let word = row as usize * self.wpl as usize + (col / 32) as usize;
        let mask = 0x8000_0000u32 >> (col % 32);
        (word, mask)
    }

    #[inline]
    fn put(&mut self, row: u32, col: u32, value: bool) {
        let (word, mask) = self.locate(row, col);
        if value {
            self.data[word] |= mask;
        } else {
            self.data[word] &= !mask;
        }
    }
}
