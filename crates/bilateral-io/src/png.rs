//! PNG image format support
//!
//! Every PNG color type is decoded into an RGBA [`Raster`]: palettes and
//! sub-byte gray are expanded, 16-bit samples are stripped to 8 bits, gray
//! is replicated into red, green and blue, and images without alpha get an
//! opaque alpha channel. Rasters are always written as 8-bit RGBA.

use crate::{IoError, IoResult};
use bilateral_core::{Raster, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output: {:?} {:?}",
            color_type, bit_depth
        )));
    }

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "palette was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    if bytes_per_row < width as usize * samples
        || data.len() < bytes_per_row * height as usize
    {
        return Err(IoError::InvalidData(format!(
            "PNG frame too small for {}x{} with {} samples",
            width, height, samples
        )));
    }

    let mut raster = Raster::new(width, height)?;
    for (y, row) in raster.rows_mut().enumerate() {
        let line = &data[y * bytes_per_row..][..width as usize * samples];
        for (dst, px) in row.iter_mut().zip(line.chunks_exact(samples)) {
            *dst = match *px {
                [g] => color::compose_rgb(g, g, g),
                [g, a] => color::compose_rgba(g, g, g, a),
                [r, g, b] => color::compose_rgb(r, g, b),
                [r, g, b, a] => color::compose_rgba(r, g, b, a),
                _ => unreachable!(),
            };
        }
    }

    Ok(raster)
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(raster.len() * 4);
    for &pixel in raster.data() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        data.extend_from_slice(&[r, g, b, a]);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
