//! Error types for bilateral-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bilateral_core::Error),

    /// A sigma (or other numeric parameter) is non-positive or not finite
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Caller-supplied kernel is malformed
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// The weights around a pixel summed to zero
    #[error("degenerate kernel: normalization term is zero at ({x}, {y})")]
    DegenerateKernel {
        /// Column of the failing output pixel
        x: u32,
        /// Row of the failing output pixel
        y: u32,
    },

    /// A fixed worker pool was requested with no workers
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The worker pool failed to build
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
