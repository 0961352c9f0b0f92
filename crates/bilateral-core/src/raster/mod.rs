//! Raster - The RGBA image container
//!
//! # Pixel layout
//!
//! - One packed 32-bit word per pixel, `0xRRGGBBAA` (see [`crate::color`])
//! - Rows are stored top to bottom, each exactly `width` words long
//!
//! Width and height are fixed when the raster is created. Filters never
//! mutate their input: they allocate a fresh raster of the same size and
//! write each cell of it once.

mod access;

use crate::error::{Error, Result};

/// Owned RGBA raster
///
/// # Examples
///
/// ```
/// use bilateral_core::{Raster, color};
///
/// let mut raster = Raster::new(4, 3).unwrap();
/// raster.set_rgba(1, 2, 10, 20, 30, 255).unwrap();
/// assert_eq!(raster.get_rgba(1, 2), Some((10, 20, 30, 255)));
/// assert_eq!(raster.get_pixel(0, 0), Some(color::compose_rgba(0, 0, 0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Packed pixels, row-major
    data: Vec<u32>,
}

impl Raster {
    /// Create a new raster; every pixel is transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, 0)
    }

    /// Create a raster with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: u32) -> Result<Self> {
        let len = Self::pixel_count(width, height)?;
        Ok(Raster {
            width,
            height,
            data: vec![pixel; len],
        })
    }

    /// Wrap an existing row-major buffer of packed pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if a side is 0 and
    /// [`Error::DimensionMismatch`] if `data` is not `width * height` long.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let expected = Self::pixel_count(width, height)?;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Raster {
            width,
            height,
            data,
        })
    }

    /// Build a raster by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u32) -> Result<Self> {
        let len = Self::pixel_count(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Raster {
            width,
            height,
            data,
        })
    }

    fn pixel_count(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(width as usize * height as usize)
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: rasters have at least one pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get raw access to the packed pixels.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Get mutable access to the packed pixels.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u32] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Iterate over mutable rows, top to bottom.
    ///
    /// The rows are disjoint slices, so they can be handed to different
    /// workers without synchronization.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u32> {
        self.data.chunks_exact_mut(self.width as usize)
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Create a raster of the same size with every pixel zeroed.
    pub fn create_template(&self) -> Self {
        Raster {
            width: self.width,
            height: self.height,
            data: vec![0; self.data.len()],
        }
    }
}
