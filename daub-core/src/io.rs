//! # Image codec
//!
//! Reading and writing canvas pixels as ordinary raster files. The format is picked from the
//! file extension.

use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Append `extension` if the path has none. Mirrors a save dialog's default extension.
#[must_use]
pub fn with_default_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension(extension);
    }
    path
}

/// Write pixels to `path`, in the format named by its extension.
///
/// The whole file is encoded in memory first. The file on disk is only touched once encoding
/// succeeded, so a failure leaves any existing file as it was.
pub fn encode(pixels: &image::RgbaImage, path: &Path) -> Result<(), CodecError> {
    let format = image::ImageFormat::from_path(path)?;
    let mut encoded = std::io::Cursor::new(Vec::new());
    match format {
        // No alpha channel to write into. Captures are opaque anyway.
        image::ImageFormat::Jpeg => {
            image::DynamicImage::ImageRgba8(pixels.clone())
                .into_rgb8()
                .write_to(&mut encoded, format)?;
        }
        _ => pixels.write_to(&mut encoded, format)?,
    }
    std::fs::write(path, encoded.into_inner())?;
    Ok(())
}

/// Read an image file of any supported format as RGBA8.
pub fn decode(path: &Path) -> Result<image::RgbaImage, CodecError> {
    let reader = image::ImageReader::open(path)?.with_guessed_format()?;
    Ok(reader.decode()?.into_rgba8())
}
