//! bilateral - Edge-preserving smoothing for PNG images
//!
//! Facade over the workspace crates:
//!
//! - [`Raster`] and [`color`] from `bilateral-core`
//! - [`filter`]: spatial kernels and the bilateral filter engine
//! - [`io`]: PNG decoding and encoding
//! - [`cli`]: argument parsing for the `bilateral` binary
//!
//! # Example
//!
//! ```
//! use bilateral::{Raster, color};
//! use bilateral::filter::bilateral_exact;
//!
//! let raster = Raster::filled(16, 16, color::compose_rgb(90, 60, 30)).unwrap();
//! let smoothed = bilateral_exact(&raster, 2.0, 5.0).unwrap();
//! assert_eq!(smoothed.width(), 16);
//! assert_eq!(smoothed.height(), 16);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bilateral_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use bilateral_filter as filter;
pub use bilateral_io as io;

pub mod cli;
