//! PNG image format support

use crate::error::{IoError, IoResult};
use crate::image::ColorImage;
use log::debug;
use mapcc_core::Raster;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image as 8-bit RGB.
///
/// Palette and low bit-depth images are expanded, grayscale is replicated
/// into all three channels, alpha is dropped and 16-bit samples keep their
/// high byte.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<ColorImage> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let channels = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };
    let bytes_per_sample = match output_info.bit_depth {
        BitDepth::Eight => 1,
        BitDepth::Sixteen => 2,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG bit depth after expansion: {:?}",
                other
            )));
        }
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);

    for row in data.chunks(bytes_per_row).take(height as usize) {
        for px in row
            .chunks_exact(channels * bytes_per_sample)
            .take(width as usize)
        {
            // 16-bit samples are big-endian; the first byte is the high byte
            let sample = |ch: usize| px[ch * bytes_per_sample];
            if channels < 3 {
                let v = sample(0);
                rgb.extend_from_slice(&[v, v, v]);
            } else {
                rgb.extend_from_slice(&[sample(0), sample(1), sample(2)]);
            }
        }
    }

    debug!(
        "decoded {}x{} PNG ({:?}, {:?})",
        width, height, output_info.color_type, output_info.bit_depth
    );
    ColorImage::new(width, height, rgb)
}

/// Write an RGB image as 8-bit PNG.
pub fn write_png<W: Write>(image: &ColorImage, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(image.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    debug!("encoded {}x{} RGB PNG", image.width(), image.height());
    Ok(())
}

/// Write a raster as 8-bit grayscale PNG: foreground white, background black.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] for a raster with zero rows or columns,
/// which PNG cannot represent.
pub fn write_png_raster<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    if raster.is_degenerate() {
        return Err(IoError::EncodeError(format!(
            "cannot encode {}x{} raster as PNG",
            raster.width(),
            raster.height()
        )));
    }

    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(raster.pixel_count());
    for row in 0..raster.height() {
        for col in 0..raster.width() {
            data.push(if raster.get_unchecked(row, col) { 255 } else { 0 });
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    debug!(
        "encoded {}x{} raster PNG",
        raster.width(),
        raster.height()
    );
    Ok(())
}
