//! Pixel-space primitives and the collage sizing arithmetic
//!
//! All coordinates are unsigned pixel offsets from the top-left corner.

use crate::io::configuration::{GRID_SIDE, MARGIN_DIVISOR};
use std::fmt;

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    /// Horizontal extent
    pub width: u32,
    /// Vertical extent
    pub height: u32,
}

impl Size {
    /// Create a size from explicit dimensions
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Create a square size
    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Wider than tall
    pub const fn is_album_like(self) -> bool {
        self.width > self.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Top-left anchored pixel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column offset
    pub x: u32,
    /// Row offset
    pub y: u32,
}

impl Point {
    /// Create a point
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// Axis-aligned rectangle given by its origin and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Top-left corner
    pub origin: Point,
    /// Extent from the origin
    pub size: Size,
}

impl Rect {
    /// Create a rectangle
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }
}

/// Largest centered square that fits inside an image of the given size
///
/// Album-like sources keep their full height and are trimmed evenly left and
/// right; everything else (square sources included) keeps the full width and
/// is trimmed top and bottom. Odd leftovers round the offset down.
pub const fn crop_square(source: Size) -> Rect {
    if source.is_album_like() {
        Rect::new(
            Point::new((source.width - source.height) / 2, 0),
            Size::square(source.height),
        )
    } else {
        Rect::new(
            Point::new(0, (source.height - source.width) / 2),
            Size::square(source.width),
        )
    }
}

/// Side length of a square collage holding a `GRID_SIDE`×`GRID_SIDE` grid
///
/// Margins surround every tile, so one more margin than tiles per axis.
pub const fn canvas_side(tile: u32, margin: u32) -> u32 {
    GRID_SIDE * tile + (GRID_SIDE + 1) * margin
}

/// [`canvas_side`] that returns `None` instead of overflowing
pub const fn checked_canvas_side(tile: u32, margin: u32) -> Option<u32> {
    match (GRID_SIDE.checked_mul(tile), (GRID_SIDE + 1).checked_mul(margin)) {
        (Some(tiles), Some(margins)) => tiles.checked_add(margins),
        _ => None,
    }
}

/// Canvas size for the given tile size and margin
pub const fn canvas_size(tile: u32, margin: u32) -> Size {
    Size::square(canvas_side(tile, margin))
}

/// Margin used when none (or a negative one) was requested
///
/// Halfway values round to the nearest even number.
pub fn default_margin(tile: u32) -> u32 {
    (f64::from(tile) / f64::from(MARGIN_DIVISOR)).round_ties_even() as u32
}

/// Resolve a requested margin, falling back to [`default_margin`]
pub fn resolve_margin(requested: Option<i64>, tile: u32) -> u32 {
    match requested {
        Some(margin) if margin >= 0 => u32::try_from(margin).unwrap_or(u32::MAX),
        _ => default_margin(tile),
    }
}
