//! Colour classification
//!
//! Turns a colour map into a binary raster by testing every pixel against
//! per-channel ranges. A pixel is foreground when all three channels fall
//! inside their range.
//!
//! Two presets match the feature colours of the city maps the pipeline was
//! built for: [`ColorThreshold::red`] and [`ColorThreshold::cyan`].

use crate::error::IoResult;
use crate::image::ColorImage;
use log::debug;
use mapcc_core::Raster;

/// Inclusive range of 8-bit channel values.
///
/// A range with `min > max` matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRange {
    /// Smallest accepted value
    pub min: u8,
    /// Largest accepted value
    pub max: u8,
}

impl ChannelRange {
    /// Range accepting every value
    pub const ANY: ChannelRange = ChannelRange { min: 0, max: 255 };

    /// Range accepting no value
    pub const NONE: ChannelRange = ChannelRange { min: 1, max: 0 };

    /// Create a range `[min, max]`
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Values strictly greater than `value`
    pub const fn above(value: u8) -> Self {
        match value.checked_add(1) {
            Some(min) => Self { min, max: 255 },
            None => Self::NONE,
        }
    }

    /// Values strictly less than `value`
    pub const fn below(value: u8) -> Self {
        match value.checked_sub(1) {
            Some(max) => Self { min: 0, max },
            None => Self::NONE,
        }
    }

    /// Check whether `value` is in range
    #[inline]
    pub fn contains(self, value: u8) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Per-channel thresholds selecting foreground pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorThreshold {
    /// Accepted red values
    pub red: ChannelRange,
    /// Accepted green values
    pub green: ChannelRange,
    /// Accepted blue values
    pub blue: ChannelRange,
}

impl Default for ColorThreshold {
    fn default() -> Self {
        Self::red()
    }
}

impl ColorThreshold {
    /// Threshold accepting every colour
    pub fn any() -> Self {
        Self {
            red: ChannelRange::ANY,
            green: ChannelRange::ANY,
            blue: ChannelRange::ANY,
        }
    }

    /// Red features: R > 100, G < 50, B < 50
    pub fn red() -> Self {
        Self {
            red: ChannelRange::above(100),
            green: ChannelRange::below(50),
            blue: ChannelRange::below(50),
        }
    }

    /// Cyan features: R < 50, G > 100, B > 100
    pub fn cyan() -> Self {
        Self {
            red: ChannelRange::below(50),
            green: ChannelRange::above(100),
            blue: ChannelRange::above(100),
        }
    }

    /// Set the red range
    pub fn with_red(mut self, range: ChannelRange) -> Self {
        self.red = range;
        self
    }

    /// Set the green range
    pub fn with_green(mut self, range: ChannelRange) -> Self {
        self.green = range;
        self
    }

    /// Set the blue range
    pub fn with_blue(mut self, range: ChannelRange) -> Self {
        self.blue = range;
        self
    }

    /// Check whether a colour is accepted
    #[inline]
    pub fn matches(&self, (r, g, b): (u8, u8, u8)) -> bool {
        self.red.contains(r) && self.green.contains(g) && self.blue.contains(b)
    }
}

/// Classify every pixel of `image` as foreground or background.
///
/// The returned raster has the dimensions of the image.
pub fn classify(image: &ColorImage, threshold: &ColorThreshold) -> IoResult<Raster> {
    let (width, height) = (image.width(), image.height());
    let mut raster = Raster::new(width, height)?;

    for (i, px) in image.data().chunks_exact(3).enumerate() {
        if threshold.matches((px[0], px[1], px[2])) {
            let row = (i / width as usize) as u32;
            let col = (i % width as usize) as u32;
            raster.set_unchecked(row, col, true);
        }
    }

    debug!(
        "classified {}x{} image: {} foreground pixels",
        width,
        height,
        raster.count_foreground()
    );
    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_range_bounds() {
        let r = ChannelRange::above(100);
        assert!(!r.contains(100));
        assert!(r.contains(101));
        assert!(r.contains(255));

        let r = ChannelRange::below(50);
        assert!(r.contains(0));
        assert!(r.contains(49));
        assert!(!r.contains(50));

        assert!(!ChannelRange::above(255).contains(255));
        assert!(!ChannelRange::below(0).contains(0));
    }

    #[test]
    fn test_presets() {
        let red = ColorThreshold::red();
        assert!(red.matches((200, 10, 10)));
        assert!(!red.matches((100, 10, 10)));
        assert!(!red.matches((200, 50, 10)));
        assert!(!red.matches((0, 255, 255)));

        let cyan = ColorThreshold::cyan();
        assert!(cyan.matches((0, 200, 200)));
        assert!(!cyan.matches((50, 200, 200)));
        assert!(!cyan.matches((200, 10, 10)));
    }

    #[test]
    fn test_builder() {
        let t = ColorThreshold::any().with_blue(ChannelRange::new(10, 20));
        assert!(t.matches((255, 0, 15)));
        assert!(!t.matches((255, 0, 21)));
        assert_eq!(ColorThreshold::default(), ColorThreshold::red());
    }

    #[test]
    fn test_classify() {
        let mut img = ColorImage::filled(4, 3, (255, 255, 255));
        img.set_rgb(0, 0, (220, 0, 0)).unwrap();
        img.set_rgb(2, 3, (180, 20, 30)).unwrap();
        img.set_rgb(1, 1, (0, 200, 200)).unwrap();

        let raster = classify(&img, &ColorThreshold::red()).unwrap();
        assert_eq!(raster.dimensions(), (4, 3));
        assert_eq!(raster.count_foreground(), 2);
        assert_eq!(raster.get(0, 0), Some(true));
        assert_eq!(raster.get(2, 3), Some(true));

        let raster = classify(&img, &ColorThreshold::cyan()).unwrap();
        assert_eq!(raster.count_foreground(), 1);
        assert_eq!(raster.get(1, 1), Some(true));
    }
}
