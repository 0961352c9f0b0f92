//! bilateral-io - Image I/O for bilateral-rs
//!
//! Reads and writes [`Raster`]s as PNG files. The filter crates never touch
//! the filesystem; this crate is the only place that does.

mod error;
pub mod format;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use self::png::{read_png, write_png};

use bilateral_core::Raster;
use log::debug;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Read an image from a file path.
///
/// # Errors
///
/// [`IoError::Io`] if the file cannot be read, [`IoError::UnsupportedFormat`]
/// if it is not a PNG, and [`IoError::DecodeError`] if decoding fails.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    match detect_format_from_bytes(&bytes)? {
        ImageFormat::Png => {
            let raster = read_png(Cursor::new(bytes))?;
            debug!(
                "read {} ({}x{})",
                path.display(),
                raster.width(),
                raster.height()
            );
            Ok(raster)
        }
        ImageFormat::Unknown => Err(IoError::UnsupportedFormat(format!(
            "{} is not a PNG file",
            path.display()
        ))),
    }
}

/// Write an image to a file path.
///
/// The image is encoded in memory and written to a sibling temporary file
/// that is renamed over `path` once complete, so a failed write never
/// leaves a partial image at `path`.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let mut buffer = Vec::new();
    match format {
        ImageFormat::Png => write_png(raster, &mut buffer)?,
        ImageFormat::Unknown => {
            return Err(IoError::UnsupportedFormat(format!(
                "cannot choose an encoder for {}",
                path.display()
            )));
        }
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".partial");
    let tmp_path = Path::new(&tmp_name);

    if let Err(e) = fs::write(tmp_path, &buffer).and_then(|()| fs::rename(tmp_path, path)) {
        let _ = fs::remove_file(tmp_path);
        return Err(e.into());
    }
    debug!("wrote {} ({} bytes)", path.display(), buffer.len());
    Ok(())
}
