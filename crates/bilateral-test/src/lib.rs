//! bilateral-test - Regression test framework for bilateral-rs
//!
//! Supports two modes:
//!
//! - **Compare** (default): check values and rasters, report failures
//! - **Display**: additionally write result images to `tests/regout/`
//!   for visual inspection
//!
//! Test inputs are generated by [`synth`] rather than loaded from disk.
//!
//! # Usage
//!
//! ```ignore
//! use bilateral_test::{RegParams, synth};
//!
//! let mut rp = RegParams::new("bilateral_flat");
//! rp.compare_values(64.0, width as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // bilateral-test is at crates/bilateral-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Get the path of a scratch file inside the regout directory
pub fn regout_path(name: &str) -> String {
    format!("{}/{}", regout_dir(), name)
}
