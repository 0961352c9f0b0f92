//! Synthetic test rasters
//!
//! Small deterministic images with known structure, used instead of
//! checked-in image files.

use bilateral_core::{Raster, color};

/// Every pixel equal to `pixel`.
pub fn uniform(width: u32, height: u32, pixel: u32) -> Raster {
    Raster::filled(width, height, pixel).expect("non-zero test dimensions")
}

/// Vertical edge: `left` for `x < width / 2`, `right` otherwise.
pub fn step_edge(width: u32, height: u32, left: u32, right: u32) -> Raster {
    Raster::from_fn(width, height, |x, _| if x < width / 2 { left } else { right })
        .expect("non-zero test dimensions")
}

/// Checkerboard of `cell`-sized squares alternating `a` and `b`.
pub fn checkerboard(width: u32, height: u32, cell: u32, a: u32, b: u32) -> Raster {
    Raster::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 { a } else { b }
    })
    .expect("non-zero test dimensions")
}

/// Opaque gradient: red rises left to right, green top to bottom.
pub fn gradient(width: u32, height: u32) -> Raster {
    let scale = |v: u32, n: u32| (v * 255 / n.saturating_sub(1).max(1)) as u8;
    Raster::from_fn(width, height, |x, y| {
        color::compose_rgb(scale(x, width), scale(y, height), 128)
    })
    .expect("non-zero test dimensions")
}

/// Busy opaque texture with unrelated values in every channel.
pub fn texture(width: u32, height: u32) -> Raster {
    Raster::from_fn(width, height, |x, y| {
        let r = (x * 37 + y * 91) % 256;
        let g = (x * x + 3 * y) % 256;
        let b = ((x ^ y) * 29) % 256;
        color::compose_rgb(r as u8, g as u8, b as u8)
    })
    .expect("non-zero test dimensions")
}

/// Copy of `raster` with every alpha set to `alpha`.
pub fn with_alpha(raster: &Raster, alpha: u8) -> Raster {
    let data = raster
        .data()
        .iter()
        .map(|&p| {
            let (r, g, b) = color::extract_rgb(p);
            color::compose_rgba(r, g, b, alpha)
        })
        .collect();
    Raster::from_pixels(raster.width(), raster.height(), data).expect("same dimensions")
}
