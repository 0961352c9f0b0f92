//! Filter configuration

use crate::kernel::{Kernel, check_sigma};
use crate::FilterResult;

/// Default standard deviation of the spatial Gaussian, in pixels.
pub const DEFAULT_SPATIAL_SIGMA: f64 = 2.0;

/// Default standard deviation of the intensity Gaussian, in luma units.
pub const DEFAULT_INTENSITY_SIGMA: f64 = 5.0;

/// Sigmas for one bilateral filtering run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BilateralParams {
    /// Spatial standard deviation (must be > 0.0)
    pub spatial_sigma: f64,
    /// Intensity standard deviation (must be > 0.0)
    pub intensity_sigma: f64,
}

impl Default for BilateralParams {
    fn default() -> Self {
        Self {
            spatial_sigma: DEFAULT_SPATIAL_SIGMA,
            intensity_sigma: DEFAULT_INTENSITY_SIGMA,
        }
    }
}

impl BilateralParams {
    pub fn new(spatial_sigma: f64, intensity_sigma: f64) -> Self {
        Self {
            spatial_sigma,
            intensity_sigma,
        }
    }

    /// Check both sigmas are positive finite numbers and that the spatial
    /// window stays within [`MAX_HALF_WIDTH`](crate::kernel::MAX_HALF_WIDTH).
    pub fn validate(&self) -> FilterResult<()> {
        Kernel::spatial_size(self.spatial_sigma)?;
        check_sigma("intensity sigma", self.intensity_sigma)
    }

    /// Side length of the spatial kernel these params produce.
    pub fn kernel_size(&self) -> FilterResult<u32> {
        Kernel::spatial_size(self.spatial_sigma)
    }

    /// Build the spatial kernel.
    pub fn kernel(&self) -> FilterResult<Kernel> {
        Kernel::spatial(self.spatial_sigma)
    }
}
