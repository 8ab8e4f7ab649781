//! Error types for collage runs

use std::fmt;
use std::path::PathBuf;

/// Main error type for every stage of a collage run
#[derive(Debug)]
pub enum CollageError {
    /// One or more requested source directories do not exist
    MissingInputs {
        /// Every directory that was not found
        paths: Vec<PathBuf>,
    },

    /// No file in any source directory matched the accepted suffixes
    NoFilesFound {
        /// Suffixes that were searched for
        extensions: Vec<String>,
    },

    /// The output directory could not be created
    OutputCreation {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Walking a source directory failed part way through
    Traversal {
        /// Source directory being walked
        root: PathBuf,
        /// Underlying traversal error
        source: walkdir::Error,
    },

    /// Failed to open or decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or write a finished collage
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInputs { paths } => {
                let listed = paths
                    .iter()
                    .map(|path| format!("\"{}\"", path.display()))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Directory not found: {listed}")
            }
            Self::NoFilesFound { extensions } => {
                write!(f, "No files were found (looked for {})", extensions.join(" "))
            }
            Self::OutputCreation { path, source } => {
                write!(
                    f,
                    "Failed to create directory \"{}\": {source}",
                    path.display()
                )
            }
            Self::Traversal { root, source } => {
                write!(f, "Failed to scan \"{}\": {source}", root.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for CollageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::OutputCreation { source, .. } => Some(source),
            Self::Traversal { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for collage results
pub type Result<T> = std::result::Result<T, CollageError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollageError {
    CollageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
