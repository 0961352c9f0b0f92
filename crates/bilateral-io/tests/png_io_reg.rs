//! PNG file I/O regression test
//!
//! Writes synthetic rasters to `tests/regout/`, reads them back, and checks
//! the error paths of `read_image` / `write_image`.

use bilateral_core::color;
use bilateral_io::{ImageFormat, IoError, detect_format, read_image, write_image};
use bilateral_test::{RegParams, regout_dir, regout_path, synth};
use std::fs;
use std::path::Path;

#[test]
fn png_io_reg_file_roundtrip() {
    let mut rp = RegParams::new("png_io_roundtrip");
    fs::create_dir_all(regout_dir()).unwrap();

    let inputs = [
        ("png_io_texture.png", synth::texture(21, 13)),
        ("png_io_alpha.png", synth::with_alpha(&synth::gradient(8, 5), 90)),
        ("png_io_single.png", synth::uniform(1, 1, color::compose_rgba(1, 2, 3, 4))),
    ];

    for (name, pixs) in &inputs {
        let path = regout_path(name);
        write_image(pixs, &path, ImageFormat::Png).expect("write_image");
        let is_png = detect_format(&path).unwrap() == ImageFormat::Png;
        rp.compare_values(1.0, if is_png { 1.0 } else { 0.0 }, 0.0);
        let back = read_image(&path).expect("read_image");
        rp.compare_raster(pixs, &back);

        // No temporary file is left next to the output
        let leftover = format!("{path}.partial");
        rp.compare_values(0.0, if Path::new(&leftover).exists() { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "png_io_roundtrip regression test failed");
}

#[test]
fn png_io_reg_errors() {
    fs::create_dir_all(regout_dir()).unwrap();

    let missing = regout_path("png_io_does_not_exist.png");
    assert!(matches!(read_image(&missing), Err(IoError::Io(_))));

    let not_png = regout_path("png_io_not_a_png.png");
    fs::write(&not_png, b"GIF89a and then some").unwrap();
    assert!(matches!(
        read_image(&not_png),
        Err(IoError::UnsupportedFormat(_))
    ));

    let pixs = synth::uniform(2, 2, 0);
    let unknown = regout_path("png_io_unknown.dat");
    assert!(matches!(
        write_image(&pixs, &unknown, ImageFormat::Unknown),
        Err(IoError::UnsupportedFormat(_))
    ));
    assert!(!Path::new(&unknown).exists());

    // Destination directory does not exist: nothing gets written
    let bad_dir = regout_path("png_io_missing_dir/out.png");
    assert!(matches!(
        write_image(&pixs, &bad_dir, ImageFormat::Png),
        Err(IoError::Io(_))
    ));
    assert!(!Path::new(&bad_dir).exists());
}
