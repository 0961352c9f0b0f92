//! Bilateral filtering regression test
//!
//! Checks the defining properties of the filter on synthetic images:
//!   (1) uniform regions are left unchanged and alpha becomes opaque
//!   (2) every output channel is a convex combination of its window
//!   (3) a very large intensity sigma reduces to a spatial Gaussian blur
//!   (4) a very small intensity sigma leaves the image untouched
//!   (5) edges survive moderate intensity sigmas

use bilateral_core::{Raster, color};
use bilateral_filter::{ExecutionStrategy, Kernel, bilateral_exact, bilateral_with_kernel};
use bilateral_test::{RegParams, synth};

/// Spatial-only Gaussian blur with edge replication, written independently
/// of the filter engine.
fn spatial_blur(src: &Raster, sigma: f64) -> Raster {
    let half = (1.5 * sigma).floor() as i64;
    let (w, h) = (src.width() as i64, src.height() as i64);
    Raster::from_fn(src.width(), src.height(), |x, y| {
        let mut acc = [0.0f64; 3];
        let mut norm = 0.0f64;
        for r in -half..=half {
            for c in -half..=half {
                let sx = (x as i64 + c).max(0).min(w - 1) as u32;
                let sy = (y as i64 + r).max(0).min(h - 1) as u32;
                let weight = (-((r * r + c * c) as f64) / (2.0 * sigma * sigma)).exp();
                let (pr, pg, pb) = src.get_rgb(sx, sy).unwrap();
                acc[0] += weight * pr as f64;
                acc[1] += weight * pg as f64;
                acc[2] += weight * pb as f64;
                norm += weight;
            }
        }
        let ch = |v: f64| (v / norm).round().clamp(0.0, 255.0) as u8;
        color::compose_rgb(ch(acc[0]), ch(acc[1]), ch(acc[2]))
    })
    .unwrap()
}

#[test]
fn bilateral_reg_uniform_is_identity() {
    let mut rp = RegParams::new("bilateral_uniform");

    let pixel = color::compose_rgba(12, 200, 99, 40);
    let pixs = synth::uniform(17, 9, pixel);
    let expected = synth::uniform(17, 9, color::compose_rgb(12, 200, 99));

    for &(ss, si) in &[(0.5, 0.1), (2.0, 5.0), (4.0, 1000.0)] {
        let result = bilateral_exact(&pixs, ss, si).expect("bilateral_exact");
        rp.compare_raster(&expected, &result);
    }

    assert!(rp.cleanup(), "bilateral_uniform regression test failed");
}

#[test]
fn bilateral_reg_single_pixel() {
    let mut rp = RegParams::new("bilateral_single_pixel");

    let pixs = synth::uniform(1, 1, color::compose_rgba(1, 2, 3, 4));
    for &(ss, si) in &[(0.1, 0.1), (2.0, 5.0), (30.0, 1e6)] {
        let result = bilateral_exact(&pixs, ss, si).expect("bilateral_exact");
        let (r, g, b, a) = result.get_rgba(0, 0).unwrap();
        rp.compare_values(1.0, r as f64, 0.0);
        rp.compare_values(2.0, g as f64, 0.0);
        rp.compare_values(3.0, b as f64, 0.0);
        rp.compare_values(255.0, a as f64, 0.0);
    }

    assert!(rp.cleanup(), "bilateral_single_pixel regression test failed");
}

#[test]
fn bilateral_reg_window_bounds() {
    let mut rp = RegParams::new("bilateral_window_bounds");

    let pixs = synth::texture(23, 15);
    for &(ss, si) in &[(1.0, 1.0), (2.0, 10.0), (3.0, 80.0)] {
        let result = bilateral_exact(&pixs, ss, si).expect("bilateral_exact");
        rp.write_raster(&result).expect("write_raster");
        let half = Kernel::spatial_size(ss).unwrap() as i64 / 2;

        let mut inside = true;
        for y in 0..pixs.height() {
            for x in 0..pixs.width() {
                let out = result.get_pixel(x, y).unwrap();
                inside &= color::alpha(out) == 255;
                for ch in [color::RED, color::GREEN, color::BLUE] {
                    let (mut lo, mut hi) = (255u8, 0u8);
                    for dy in -half..=half {
                        for dx in -half..=half {
                            let sx = (x as i64 + dx).clamp(0, pixs.width() as i64 - 1) as u32;
                            let sy = (y as i64 + dy).clamp(0, pixs.height() as i64 - 1) as u32;
                            let v = color::channel(pixs.get_pixel(sx, sy).unwrap(), ch);
                            lo = lo.min(v);
                            hi = hi.max(v);
                        }
                    }
                    let v = color::channel(out, ch);
                    inside &= lo <= v && v <= hi;
                }
            }
        }
        rp.compare_values(1.0, if inside { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "bilateral_window_bounds regression test failed");
}

#[test]
fn bilateral_reg_large_intensity_sigma_is_gaussian_blur() {
    let mut rp = RegParams::new("bilateral_large_sigma");

    let pixs = synth::texture(31, 19);
    for &ss in &[1.0, 2.0, 3.5] {
        let result = bilateral_exact(&pixs, ss, 1e12).expect("bilateral_exact");
        let expected = spatial_blur(&pixs, ss);
        rp.compare_raster_rgb(&expected, &result, 1);
        rp.write_raster(&result).expect("write_raster");
    }

    assert!(rp.cleanup(), "bilateral_large_sigma regression test failed");
}

#[test]
fn bilateral_reg_small_intensity_sigma_is_identity() {
    let mut rp = RegParams::new("bilateral_small_sigma");

    let black = color::compose_rgb(0, 0, 0);
    let orange = color::compose_rgb(250, 140, 10);
    let inputs = [
        synth::gradient(24, 16),
        synth::checkerboard(24, 16, 3, black, orange),
        synth::step_edge(24, 16, orange, black),
    ];

    for pixs in &inputs {
        let result = bilateral_exact(pixs, 3.0, 1e-3).expect("bilateral_exact");
        rp.compare_raster(pixs, &result);
    }

    assert!(rp.cleanup(), "bilateral_small_sigma regression test failed");
}

#[test]
fn bilateral_reg_vanishing_sigmas() {
    let mut rp = RegParams::new("bilateral_vanishing_sigma");

    // Sigmas whose square underflows to zero are still valid: the center
    // weight stays 1.0 and every other neighbor weighs 0.0
    let flat = synth::uniform(3, 3, color::compose_rgb(10, 20, 30));
    let single = synth::uniform(1, 1, color::compose_rgba(200, 100, 50, 9));
    let busy = synth::texture(11, 7);
    for &(ss, si) in &[(1.0, 1e-170), (1.0, 1e-200), (1e-200, 5.0), (1e-200, 1e-200)] {
        let result = bilateral_exact(&flat, ss, si).expect("flat input");
        rp.compare_raster(&flat, &result);

        let result = bilateral_exact(&single, ss, si).expect("single pixel");
        rp.compare_raster(&synth::uniform(1, 1, color::compose_rgb(200, 100, 50)), &result);

        let result = bilateral_exact(&busy, ss, si).expect("textured input");
        rp.compare_raster(&busy, &result);
    }

    assert!(rp.cleanup(), "bilateral_vanishing_sigma regression test failed");
}

#[test]
fn bilateral_reg_edge_preserved() {
    let mut rp = RegParams::new("bilateral_edge");

    let dark = color::compose_rgb(30, 40, 50);
    let light = color::compose_rgb(220, 210, 200);
    let pixs = synth::step_edge(40, 10, dark, light);

    let smoothed = bilateral_exact(&pixs, 3.0, 20.0).expect("bilateral_exact");
    rp.compare_raster(&pixs, &smoothed);

    // A plain blur of the same extent smears the edge
    let blurred = spatial_blur(&pixs, 3.0);
    let (left, _, _) = blurred.get_rgb(19, 5).unwrap();
    rp.compare_values(1.0, if left > 30 { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "bilateral_edge regression test failed");
}

#[test]
fn bilateral_reg_shared_kernel() {
    let mut rp = RegParams::new("bilateral_shared_kernel");

    // One kernel reused across rasters gives the same result as building
    // it per call
    let kernel = Kernel::spatial(2.0).unwrap();
    for pixs in [synth::texture(12, 12), synth::gradient(9, 14)] {
        let a = bilateral_with_kernel(&pixs, &kernel, 15.0, ExecutionStrategy::Serial).unwrap();
        let b = bilateral_exact(&pixs, 2.0, 15.0).unwrap();
        rp.compare_raster(&a, &b);
    }

    assert!(rp.cleanup(), "bilateral_shared_kernel regression test failed");
}
