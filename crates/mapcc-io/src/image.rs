//! ColorImage - decoded 8-bit RGB image
//!
//! The colour map a raster is classified from. Samples are stored row-major,
//! three bytes per pixel in R, G, B order.

use crate::error::{IoError, IoResult};

/// 8-bit RGB image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ColorImage {
    /// Create an image from interleaved RGB samples.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidData`] if `data.len() != width * height * 3`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> IoResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .ok_or_else(|| IoError::InvalidData(format!("image too large: {width}x{height}")))?;
        if data.len() != expected {
            return Err(IoError::InvalidData(format!(
                "expected {} RGB bytes for {}x{}, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create an image filled with one colour.
    pub fn filled(width: u32, height: u32, rgb: (u8, u8, u8)) -> Self {
        let n = width as usize * height as usize;
        let mut data = Vec::with_capacity(n * 3);
        for _ in 0..n {
            data.extend_from_slice(&[rgb.0, rgb.1, rgb.2]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Interleaved RGB samples.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the RGB value at `(row, col)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get_rgb(&self, row: u32, col: u32) -> Option<(u8, u8, u8)> {
        let i = self.offset(row, col)?;
        Some((self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Set the RGB value at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidData`] if the coordinates are out of bounds.
    pub fn set_rgb(&mut self, row: u32, col: u32, rgb: (u8, u8, u8)) -> IoResult<()> {
        let i = self.offset(row, col).ok_or_else(|| {
            IoError::InvalidData(format!(
                "pixel ({row}, {col}) outside {}x{} image",
                self.width, self.height
            ))
        })?;
        self.data[i..i + 3].copy_from_slice(&[rgb.0, rgb.1, rgb.2]);
        Ok(())
    }

    fn offset(&self, row: u32, col: u32) -> Option<usize> {
        (row < self.height && col < self.width)
            .then(|| (row as usize * self.width as usize + col as usize) * 3)
    }
}
