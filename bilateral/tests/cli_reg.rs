//! Command line regression test
//!
//! Runs the `bilateral` binary end to end. A successful run writes an
//! opaque PNG matching the library result; every failure exits with
//! status 1 and leaves no output file behind.

use bilateral::color;
use bilateral::filter::bilateral_exact;
use bilateral::io::{ImageFormat, read_image, write_image};
use bilateral_test::{RegParams, regout_dir, regout_path, synth};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_bilateral(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bilateral"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch bilateral")
}

/// Path in the regout directory with any file from an earlier run removed.
fn fresh_path(name: &str) -> String {
    fs::create_dir_all(regout_dir()).unwrap();
    let path = regout_path(name);
    let _ = fs::remove_file(&path);
    path
}

fn write_input(name: &str) -> String {
    let path = fresh_path(name);
    let pixs = synth::with_alpha(&synth::texture(19, 11), 40);
    write_image(&pixs, &path, ImageFormat::Png).expect("write input");
    path
}

#[test]
fn cli_reg_filters_png() {
    let mut rp = RegParams::new("cli_filter");

    let input = write_input("cli_filter_in.png");
    let output = fresh_path("cli_filter_out.png");
    let out = run_bilateral(&[
        &input,
        &output,
        "-gaussian_kernel_sigma",
        "1.5",
        "--intensity_sigma=25",
    ]);
    rp.compare_values(0.0, out.status.code().unwrap_or(-1) as f64, 0.0);

    let stdout = String::from_utf8_lossy(&out.stdout);
    let banner = stdout.contains("Running bilateral filter on") && stdout.contains("(209 pixels)");
    rp.compare_values(1.0, if banner { 1.0 } else { 0.0 }, 0.0);
    let timing = stdout.contains("Total Run Time:");
    rp.compare_values(1.0, if timing { 1.0 } else { 0.0 }, 0.0);

    let source = read_image(&input).expect("read input");
    let result = read_image(&output).expect("read output");
    let expected = bilateral_exact(&source, 1.5, 25.0).expect("bilateral_exact");
    rp.compare_raster(&expected, &result);
    let opaque = result.data().iter().all(|&p| color::alpha(p) == 255);
    rp.compare_values(1.0, if opaque { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "cli_filter regression test failed");
}

#[test]
fn cli_reg_invalid_sigma() {
    let input = write_input("cli_sigma_in.png");

    for sigma_args in [
        ["--intensity_sigma", "0"],
        ["-gaussian_kernel_sigma", "-2"],
        ["-intensity_sigma", "nan"],
        ["--gaussian_kernel_sigma", "5000"],
    ] {
        let output = fresh_path("cli_sigma_out.png");
        let out = run_bilateral(&[&input, &output, sigma_args[0], sigma_args[1]]);
        assert_eq!(out.status.code(), Some(1), "{sigma_args:?}");
        assert!(String::from_utf8_lossy(&out.stderr).contains("error:"));
        assert!(!Path::new(&output).exists(), "{sigma_args:?}");
    }
}

#[test]
fn cli_reg_bad_input() {
    let missing = fresh_path("cli_missing_in.png");
    let output = fresh_path("cli_missing_out.png");
    let out = run_bilateral(&[&missing, &output]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!Path::new(&output).exists());

    let not_png = fresh_path("cli_not_png_in.png");
    fs::write(&not_png, b"P6\n1 1\n255\n\0\0\0").unwrap();
    let out = run_bilateral(&[&not_png, &output]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("not a PNG"));
    assert!(!Path::new(&output).exists());
}

#[test]
fn cli_reg_usage() {
    let out = run_bilateral(&[]);
    assert_eq!(out.status.code(), Some(1));

    let out = run_bilateral(&["only_input.png"]);
    assert_eq!(out.status.code(), Some(1));

    let out = run_bilateral(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("gaussian_kernel_sigma"));
}
