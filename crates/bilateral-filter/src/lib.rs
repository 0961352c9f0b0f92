//! bilateral-filter - Edge-preserving smoothing
//!
//! This crate provides:
//!
//! - Spatial Gaussian kernel construction ([`Kernel`])
//! - The bilateral filter engine ([`bilateral`])
//! - Row scheduling across threads ([`ExecutionStrategy`])
//!
//! Parameters are passed explicitly through [`BilateralParams`]; nothing is
//! kept in global state.

pub mod bilateral;
mod error;
pub mod kernel;
pub mod parallel;
mod params;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
pub use parallel::ExecutionStrategy;
pub use params::{BilateralParams, DEFAULT_INTENSITY_SIGMA, DEFAULT_SPATIAL_SIGMA};

// Re-export commonly used functions
pub use bilateral::{
    bilateral_exact, bilateral_with_kernel, bilateral_with_params, intensity_weight, luminance,
};
