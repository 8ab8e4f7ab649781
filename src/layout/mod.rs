//! Collage layout arithmetic
//!
//! This module contains the geometry behind every collage:
//! - Crop squares for arbitrary aspect ratios
//! - Canvas sizing from tile size and margin
//! - Paste cursor advancement and row wrapping

/// Paste cursor that walks the grid
pub mod cursor;
/// Sizes, points, rectangles and sizing formulas
pub mod geometry;

pub use cursor::PasteCursor;
pub use geometry::{Point, Rect, Size};
