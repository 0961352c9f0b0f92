//! bilateral-core - Raster container for the bilateral filter
//!
//! This crate provides the data structures shared by every other crate in
//! the workspace:
//!
//! - [`Raster`] - Owned RGBA image, fixed width and height
//! - [`color`] - Packing helpers for 32-bit `0xRRGGBBAA` pixels
//! - [`Error`] / [`Result`] - Core error type
//!
//! The filter only needs `width`, `height`, `get_pixel` and `set_pixel`
//! from a raster; decoding and encoding live in `bilateral-io`.

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::Raster;

/// Color channel indices and helper functions for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Red channel (MSB, byte 0)
    pub const RED: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Blue channel (byte 2)
    pub const BLUE: usize = 2;
    /// Alpha channel (LSB, byte 3)
    pub const ALPHA: usize = 3;

    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Fully opaque alpha.
    pub const OPAQUE: u8 = 255;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose an opaque 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, OPAQUE)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Extract one channel by index ([`RED`], [`GREEN`], [`BLUE`], [`ALPHA`]).
    ///
    /// # Panics
    ///
    /// Panics if `channel > 3`.
    #[inline]
    pub fn channel(pixel: u32, channel: usize) -> u8 {
        match channel {
            RED => red(pixel),
            GREEN => green(pixel),
            BLUE => blue(pixel),
            ALPHA => alpha(pixel),
            _ => panic!("channel index {channel} out of range"),
        }
    }

}
