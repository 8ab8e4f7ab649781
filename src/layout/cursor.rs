//! Left-to-right, top-to-bottom paste position tracking

use crate::layout::geometry::{Point, canvas_side};

/// Running paste position across a collage canvas
///
/// Moves one tile plus one margin to the right after every paste and wraps to
/// the next row as soon as the column would reach the canvas edge. No row or
/// column indices are kept; the grid shape falls out of the canvas width.
///
/// As an iterator it yields successive paste positions without end.
#[derive(Debug, Clone)]
pub struct PasteCursor {
    position: Point,
    margin: u32,
    step: u32,
    canvas_width: u32,
    wraps: usize,
}

impl PasteCursor {
    /// Start at the top-left margin of a canvas sized for `tile` and `margin`
    pub const fn new(tile: u32, margin: u32) -> Self {
        Self::with_canvas_width(tile, margin, canvas_side(tile, margin))
    }

    /// Start at the top-left margin of a canvas with an explicit width
    pub const fn with_canvas_width(tile: u32, margin: u32, canvas_width: u32) -> Self {
        Self {
            position: Point::new(margin, margin),
            margin,
            step: tile.saturating_add(margin),
            canvas_width,
            wraps: 0,
        }
    }

    /// Where the next tile goes
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Number of row wraps performed so far
    pub const fn wraps(&self) -> usize {
        self.wraps
    }

    /// Move past the tile just pasted, returning true if the cursor wrapped
    pub const fn advance(&mut self) -> bool {
        self.position.x = self.position.x.saturating_add(self.step);
        if self.position.x >= self.canvas_width {
            self.position.x = self.margin;
            self.position.y = self.position.y.saturating_add(self.step);
            self.wraps = self.wraps.saturating_add(1);
            true
        } else {
            false
        }
    }
}

impl Iterator for PasteCursor {
    type Item = Point;

    /// Yield the current position and advance past it
    fn next(&mut self) -> Option<Point> {
        let position = self.position;
        self.advance();
        Some(position)
    }
}
