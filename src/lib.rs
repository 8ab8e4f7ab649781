//! Random photo collage compositor
//!
//! Collects images from a set of directories, samples them into groups of
//! sixteen and lays each group out as a square 4×4 collage with even margins,
//! optionally stamping a small checkbox marker on every tile.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Crop, canvas and paste-position arithmetic
pub mod layout;
/// Tile and collage rendering
pub mod render;
/// Random grouping of source files
pub mod sampling;

pub use io::error::{CollageError, Result};
