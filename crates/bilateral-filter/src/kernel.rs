//! Spatial kernels
//!
//! A [`Kernel`] is a square, odd-sized table of non-negative weights
//! centered on its middle element. The bilateral filter looks weights up
//! by signed offset from that center.
//!
//! API:
//! - `Kernel::spatial` -> unnormalized Gaussian of the distance to center
//! - `Kernel::from_slice` -> caller-supplied weights
//! - `Kernel::get` / `Kernel::at` -> lookup by position / by offset

use crate::{FilterError, FilterResult};

/// Largest half-width accepted by [`Kernel::spatial`].
///
/// A half-width of 1024 already means a 2049x2049 window per pixel.
pub const MAX_HALF_WIDTH: u32 = 1024;

/// A square 2D kernel with odd side length
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length (always odd)
    size: u32,
    /// Weights, row-major
    data: Vec<f64>,
}

impl Kernel {
    /// Side length used for a spatial kernel of the given sigma.
    ///
    /// `1 + 2 * floor(1.5 * sigma)`
    pub fn spatial_size(sigma: f64) -> FilterResult<u32> {
        check_sigma("spatial sigma", sigma)?;
        let half = (1.5 * sigma).floor();
        if half > MAX_HALF_WIDTH as f64 {
            return Err(FilterError::InvalidParameter(format!(
                "spatial sigma {sigma} gives a half-width above {MAX_HALF_WIDTH}"
            )));
        }
        Ok(1 + 2 * half as u32)
    }

    /// Create the spatial Gaussian kernel for `sigma`.
    ///
    /// The weight at offset (r, c) is `exp(-(r² + c²) / (2σ²))`, unnormalized.
    /// The filter divides by the sum of the combined weights at every pixel.
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidParameter`] if `sigma` is not a positive
    /// finite number.
    pub fn spatial(sigma: f64) -> FilterResult<Self> {
        let size = Self::spatial_size(sigma)?;
        let half = (size / 2) as i64;

        let mut data = Vec::with_capacity((size * size) as usize);
        for r in -half..=half {
            for c in -half..=half {
                // Scale before squaring: the center stays exactly 1.0 for any sigma
                let t = ((r * r + c * c) as f64).sqrt() / sigma;
                data.push((-0.5 * t * t).exp());
            }
        }

        Ok(Kernel { size, data })
    }

    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidKernel`] if `size` is even, `data` does not
    /// hold `size * size` values, or a weight is negative or not finite.
    pub fn from_slice(size: u32, data: &[f64]) -> FilterResult<Self> {
        if size % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "side length must be odd, got {size}"
            )));
        }
        let expected = size as usize * size as usize;
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {expected} weights for a {size}x{size} kernel, got {}",
                data.len()
            )));
        }
        if let Some(bad) = data.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(FilterError::InvalidKernel(format!(
                "weights must be finite and non-negative, found {bad}"
            )));
        }
        Ok(Kernel {
            size,
            data: data.to_vec(),
        })
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Distance from the center to an edge (`size / 2`).
    #[inline]
    pub fn half(&self) -> u32 {
        self.size / 2
    }

    /// Weights, row-major.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Weight at (row, col), both measured from the top-left corner.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<f64> {
        if row < self.size && col < self.size {
            Some(self.data[(row * self.size + col) as usize])
        } else {
            None
        }
    }

    /// Weight at a signed offset from the center.
    ///
    /// # Panics
    ///
    /// Panics if either offset exceeds [`Kernel::half`].
    #[inline]
    pub fn at(&self, dy: i32, dx: i32) -> f64 {
        let half = self.half() as i32;
        let row = (dy + half) as usize;
        let col = (dx + half) as usize;
        self.data[row * self.size as usize + col]
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// Reject sigmas that are not positive finite numbers.
pub(crate) fn check_sigma(name: &str, sigma: f64) -> FilterResult<()> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(FilterError::InvalidParameter(format!(
            "{name} must be positive, got {sigma}"
        )));
    }
    Ok(())
}
