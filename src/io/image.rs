//! Image decoding, collage export and output file naming

use crate::io::configuration::{OUTPUT_EXTENSION, OUTPUT_PREFIX, RUN_STAMP_FORMAT};
use crate::io::error::{CollageError, Result};
use chrono::{DateTime, Utc};
use image::{ImageError, ImageReader, RgbImage};
use std::fmt;
use std::path::{Path, PathBuf};

/// Decode an image as 8-bit RGB
///
/// The container format is sniffed from the file contents, so a PNG saved
/// with a `.jpg` name still loads.
///
/// # Errors
///
/// Returns [`CollageError::ImageLoad`] if the file cannot be opened or decoded
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let load_error = |source| CollageError::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| load_error(ImageError::IoError(e)))?
        .decode()
        .map_err(load_error)?;

    Ok(image.into_rgb8())
}

/// Encode a finished collage, picking the format from the file extension
///
/// # Errors
///
/// Returns [`CollageError::ImageExport`] if encoding or writing fails
pub fn save_collage(canvas: &RgbImage, path: &Path) -> Result<()> {
    canvas.save(path).map_err(|source| CollageError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}

/// Timestamp token shared by every collage written in one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStamp(String);

impl RunStamp {
    /// Stamp for the current UTC time
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// Stamp for a specific instant
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant.format(RUN_STAMP_FORMAT).to_string())
    }

    /// The raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RunStamp {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Display for RunStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// File name of the `index`-th collage (1-based) of a run
pub fn collage_file_name(stamp: &RunStamp, index: usize) -> String {
    format!("{OUTPUT_PREFIX}-{stamp}-{index:02}.{OUTPUT_EXTENSION}")
}

/// Full output path of the `index`-th collage (1-based) of a run
pub fn collage_path(output: &Path, stamp: &RunStamp, index: usize) -> PathBuf {
    output.join(collage_file_name(stamp, index))
}
