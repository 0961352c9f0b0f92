//! Command line arguments for the `bilateral` binary
//!
//! The historical single-dash spellings `-gaussian_kernel_sigma` and
//! `-intensity_sigma` are rewritten to their `--` forms before clap sees
//! them, so both styles are accepted.

use bilateral_filter::{
    BilateralParams, DEFAULT_INTENSITY_SIGMA, DEFAULT_SPATIAL_SIGMA, ExecutionStrategy,
};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;

/// Long options that may also be written with a single dash.
pub const SINGLE_DASH_OPTIONS: &[&str] = &["gaussian_kernel_sigma", "intensity_sigma"];

/// Classic bilateral filter: edge-preserving smoothing that weighs each
/// neighbor by both spatial distance and luminance difference.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "bilateral", author, version, about, long_about = None)]
pub struct Args {
    /// Input image (PNG)
    pub input_path: PathBuf,

    /// Output image (PNG)
    pub output_path: PathBuf,

    /// Standard deviation of the spatial Gaussian, in pixels
    #[arg(
        long = "gaussian_kernel_sigma",
        value_name = "SIGMA",
        default_value_t = DEFAULT_SPATIAL_SIGMA,
        allow_negative_numbers = true
    )]
    pub gaussian_kernel_sigma: f64,

    /// Standard deviation of the intensity Gaussian, in luma units (0-255)
    #[arg(
        long = "intensity_sigma",
        value_name = "SIGMA",
        default_value_t = DEFAULT_INTENSITY_SIGMA,
        allow_negative_numbers = true
    )]
    pub intensity_sigma: f64,

    /// Number of worker threads [default: one per core]
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Filter parameters from the parsed sigmas.
    pub fn params(&self) -> BilateralParams {
        BilateralParams::new(self.gaussian_kernel_sigma, self.intensity_sigma)
    }

    /// Row scheduling from `--threads`.
    pub fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::from_threads(self.threads)
    }

    /// Log level implied by the `-v` count.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Rewrite `-gaussian_kernel_sigma` style options to `--gaussian_kernel_sigma`.
///
/// Also handles the `-name=value` form. Everything else passes through.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = text.strip_prefix('-') else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if SINGLE_DASH_OPTIONS.contains(&name) {
                format!("-{text}").into()
            } else {
                arg
            }
        })
        .collect()
}

/// Parse command line arguments, accepting the single-dash option style.
pub fn parse_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Args::try_parse_from(normalize_args(args))
}
