//! Bilateral filtering (edge-preserving smoothing)
//!
//! Bilateral filtering is a non-linear, edge-preserving smoothing filter.
//! It combines a spatial Gaussian filter with a range (intensity) Gaussian
//! filter.
//!
//! # Algorithm
//!
//! For each pixel, the output is a weighted average of neighboring pixels
//! where:
//! - Spatial weight: looked up in a precomputed [`Kernel`]
//! - Intensity weight: Gaussian of the absolute luminance difference
//!   between the neighbor and the center pixel
//!
//! Red, green and blue are averaged with the same combined weight. Alpha is
//! not filtered; every output pixel is fully opaque.
//!
//! Neighbors outside the raster are replaced by the nearest edge pixel.
//!
//! # Example
//!
//! ```
//! use bilateral_core::{Raster, color};
//! use bilateral_filter::bilateral_exact;
//!
//! let raster = Raster::filled(8, 8, color::compose_rgb(40, 80, 120)).unwrap();
//! let smoothed = bilateral_exact(&raster, 2.0, 5.0).unwrap();
//! assert_eq!(smoothed.get_rgba(3, 3), Some((40, 80, 120, 255)));
//! ```

use crate::kernel::check_sigma;
use crate::parallel::{self, ExecutionStrategy};
use crate::{BilateralParams, FilterError, FilterResult, Kernel};
use bilateral_core::{Raster, color};
use log::debug;
use std::time::Instant;

/// NTSC luma weight of red.
pub const LUMA_RED: f64 = 0.299;
/// NTSC luma weight of green.
pub const LUMA_GREEN: f64 = 0.587;
/// NTSC luma weight of blue.
pub const LUMA_BLUE: f64 = 0.114;

/// Luminance of a packed pixel: `0.299 R + 0.587 G + 0.114 B`.
#[inline]
pub fn luminance(pixel: u32) -> f64 {
    let (r, g, b) = color::extract_rgb(pixel);
    LUMA_RED * r as f64 + LUMA_GREEN * g as f64 + LUMA_BLUE * b as f64
}

/// Gaussian weight of a luminance difference: `exp(-diff² / (2σ²))`.
///
/// The difference is scaled by sigma before squaring, so a zero difference
/// weighs exactly 1.0 even when `σ²` underflows.
#[inline]
pub fn intensity_weight(diff: f64, sigma: f64) -> f64 {
    let t = diff / sigma;
    (-0.5 * t * t).exp()
}

/// Apply the bilateral filter to an image
///
/// Builds the spatial kernel from `spatial_sigma` and runs on rayon's
/// global pool.
///
/// # Arguments
/// * `raster` - Input image
/// * `spatial_sigma` - Standard deviation of the spatial Gaussian (must be > 0.0)
/// * `intensity_sigma` - Standard deviation of the intensity Gaussian (must be > 0.0)
///
/// # Returns
/// Filtered opaque raster with the same dimensions as the input
pub fn bilateral_exact(
    raster: &Raster,
    spatial_sigma: f64,
    intensity_sigma: f64,
) -> FilterResult<Raster> {
    let params = BilateralParams::new(spatial_sigma, intensity_sigma);
    bilateral_with_params(raster, &params, ExecutionStrategy::default())
}

/// Apply the bilateral filter described by `params` using `strategy`.
pub fn bilateral_with_params(
    raster: &Raster,
    params: &BilateralParams,
    strategy: ExecutionStrategy,
) -> FilterResult<Raster> {
    params.validate()?;
    let kernel = params.kernel()?;
    debug!(
        "spatial kernel {0}x{0} for sigma {1}",
        kernel.size(),
        params.spatial_sigma
    );
    bilateral_with_kernel(raster, &kernel, params.intensity_sigma, strategy)
}

/// Apply the bilateral filter with a prebuilt spatial kernel
///
/// The kernel is only read. It can be reused across calls and rasters.
///
/// # Errors
/// * [`FilterError::InvalidParameter`] if `intensity_sigma` is not positive
/// * [`FilterError::DegenerateKernel`] if the weights around a pixel sum
///   to zero (only possible with a caller-built kernel)
/// * [`FilterError::InvalidThreadCount`] / [`FilterError::ThreadPool`] from
///   `strategy`
pub fn bilateral_with_kernel(
    raster: &Raster,
    kernel: &Kernel,
    intensity_sigma: f64,
    strategy: ExecutionStrategy,
) -> FilterResult<Raster> {
    check_sigma("intensity sigma", intensity_sigma)?;

    let start = Instant::now();
    let width = raster.width();
    let mut out = raster.create_template();

    parallel::for_each_row(strategy, out.data_mut(), width as usize, |y, row| {
        for (x, dst) in (0..width).zip(row.iter_mut()) {
            *dst = filter_pixel(raster, kernel, intensity_sigma, x, y)?;
        }
        Ok(())
    })?;

    debug!(
        "bilateral {}x{} with {:?}: {:?}",
        raster.width(),
        raster.height(),
        strategy,
        start.elapsed()
    );
    Ok(out)
}

/// Compute one output pixel from the input neighborhood of (x, y).
fn filter_pixel(
    src: &Raster,
    kernel: &Kernel,
    intensity_sigma: f64,
    x: u32,
    y: u32,
) -> FilterResult<u32> {
    let max_x = src.width() as i64 - 1;
    let max_y = src.height() as i64 - 1;
    let half = kernel.half() as i64;
    let center_lum = luminance(src.get_pixel_unchecked(x, y));

    let mut sum_r = 0.0f64;
    let mut sum_g = 0.0f64;
    let mut sum_b = 0.0f64;
    let mut weight_sum = 0.0f64;

    for dy in -half..=half {
        // Clamp to image boundaries (replicate border)
        let sy = (y as i64 + dy).clamp(0, max_y) as u32;
        let line = src.row(sy);

        for dx in -half..=half {
            let sx = (x as i64 + dx).clamp(0, max_x) as usize;
            let neighbor = line[sx];

            let spatial_weight = kernel.at(dy as i32, dx as i32);
            let diff = (luminance(neighbor) - center_lum).abs();
            let weight = spatial_weight * intensity_weight(diff, intensity_sigma);

            let (r, g, b) = color::extract_rgb(neighbor);
            sum_r += weight * r as f64;
            sum_g += weight * g as f64;
            sum_b += weight * b as f64;
            weight_sum += weight;
        }
    }

    if !(weight_sum > 0.0 && weight_sum.is_finite()) {
        return Err(FilterError::DegenerateKernel { x, y });
    }

    Ok(color::compose_rgb(
        to_channel(sum_r / weight_sum),
        to_channel(sum_g / weight_sum),
        to_channel(sum_b / weight_sum),
    ))
}

#[inline]
fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
