//! mapcc-io - Image I/O and collaborators of the region core
//!
//! This crate connects the in-memory region core to files and people:
//!
//! - **Decoding** colour maps from PNG ([`read_image`], [`png::read_png`])
//! - **Classification** of colour pixels into a binary raster
//!   ([`classify()`], [`ColorThreshold`])
//! - **Rendering** of selected regions back into a raster
//!   ([`render_regions`], [`render_top_regions`])
//! - **Encoding** rasters as PNG ([`write_raster`])
//! - **Reporting** region sizes as text ([`ComponentReport`])
//!
//! # Example
//!
//! ```
//! use mapcc_io::{ColorImage, ColorThreshold, classify, render_top_regions};
//! use mapcc_region::{label_regions, rank_regions};
//!
//! let mut map = ColorImage::filled(8, 4, (255, 255, 255));
//! for col in 0..3 {
//!     map.set_rgb(1, col, (200, 0, 0)).unwrap();
//! }
//! map.set_rgb(3, 7, (200, 0, 0)).unwrap();
//!
//! let raster = classify(&map, &ColorThreshold::red()).unwrap();
//! let table = label_regions(&raster).unwrap().table;
//! let ranked = rank_regions(&table);
//! let top = render_top_regions(&table, &ranked, 1, 8, 4).unwrap();
//! assert_eq!(top.count_foreground(), 3);
//! ```

pub mod classify;
pub mod error;
pub mod image;
#[cfg(feature = "png-format")]
pub mod png;
pub mod render;
pub mod report;

pub use classify::{ChannelRange, ColorThreshold, classify};
pub use error::{IoError, IoResult};
pub use image::ColorImage;
pub use render::{render_regions, render_top_regions};
pub use report::ComponentReport;

use mapcc_core::Raster;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

/// PNG file signature
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Read a colour image from a file path.
///
/// The format is detected from the file contents.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<ColorImage> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);

    let mut signature = [0u8; 8];
    let is_png = match reader.read_exact(&mut signature) {
        Ok(()) => signature == PNG_SIGNATURE,
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => false,
        Err(e) => return Err(e.into()),
    };
    reader.seek(SeekFrom::Start(0))?;

    if is_png {
        return read_png_file(reader);
    }
    Err(IoError::UnsupportedFormat(format!(
        "unrecognized image format: {}",
        path.as_ref().display()
    )))
}

#[cfg(feature = "png-format")]
fn read_png_file(reader: BufReader<File>) -> IoResult<ColorImage> {
    png::read_png(reader)
}

#[cfg(not(feature = "png-format"))]
fn read_png_file(_reader: BufReader<File>) -> IoResult<ColorImage> {
    Err(IoError::UnsupportedFormat(
        "PNG support not enabled (feature \"png-format\")".to_string(),
    ))
}

/// Write a colour image to a PNG file.
pub fn write_image<P: AsRef<Path>>(image: &ColorImage, path: P) -> IoResult<()> {
    #[cfg(feature = "png-format")]
    {
        let mut data = Vec::new();
        png::write_png(image, &mut data)?;
        std::fs::write(path, data)?;
        Ok(())
    }
    #[cfg(not(feature = "png-format"))]
    {
        let _ = (image, path);
        Err(IoError::UnsupportedFormat(
            "PNG support not enabled (feature \"png-format\")".to_string(),
        ))
    }
}

/// Write a raster to a PNG file: foreground white, background black.
pub fn write_raster<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    #[cfg(feature = "png-format")]
    {
        let mut data = Vec::new();
        png::write_png_raster(raster, &mut data)?;
        std::fs::write(path, data)?;
        Ok(())
    }
    #[cfg(not(feature = "png-format"))]
    {
        let _ = (raster, path);
        Err(IoError::UnsupportedFormat(
            "PNG support not enabled (feature \"png-format\")".to_string(),
        ))
    }
}
