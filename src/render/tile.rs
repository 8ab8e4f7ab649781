//! Per-image tile pipeline: square crop, scale, optional marker overlay
//!
//! Every step takes its input by reference or by value and hands back a new
//! buffer, so one source image's pixels are released as soon as its tile is
//! pasted.

use crate::io::configuration::{
    MARKER_FILL, MARKER_OFFSET_RATIO, MARKER_RADIUS_RATIO, MARKER_STROKE, MARKER_STROKE_DIVISOR,
};
use crate::layout::geometry::{Rect, Size, crop_square};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use std::fmt;

/// How one source image becomes one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePlan {
    /// Dimensions of the decoded source
    pub source: Size,
    /// Centered square cut from the source
    pub crop: Rect,
    /// Final tile dimensions
    pub target: Size,
}

impl TilePlan {
    /// Plan the crop and scale for a source of the given size
    pub const fn new(source: Size, tile_size: u32) -> Self {
        Self {
            source,
            crop: crop_square(source),
            target: Size::square(tile_size),
        }
    }
}

impl fmt::Display for TilePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>9} --> crop: {:>9}, {:>9} --> scale: {:>9}",
            self.source.to_string(),
            self.crop.origin.to_string(),
            self.crop.size.to_string(),
            self.target.to_string()
        )
    }
}

/// Cut a rectangle out of an image
pub fn crop(image: &RgbImage, rect: Rect) -> RgbImage {
    imageops::crop_imm(
        image,
        rect.origin.x,
        rect.origin.y,
        rect.size.width,
        rect.size.height,
    )
    .to_image()
}

/// Resample an image to exactly `size`
pub fn scale(image: &RgbImage, size: Size) -> RgbImage {
    imageops::resize(image, size.width, size.height, FilterType::CatmullRom)
}

/// Which part of the marker a pixel falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPixel {
    /// Untouched
    Outside,
    /// Inside the disc, multiplied by the fill colour
    Fill,
    /// On the outline ring, painted with the stroke colour
    Stroke,
}

/// Circular checkbox-style marker near a tile's top-right corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Circle center in tile coordinates
    pub center: (f32, f32),
    /// Circle radius
    pub radius: f32,
    /// Outline thickness, centered on the circle edge
    pub stroke: f32,
}

impl Marker {
    /// Marker proportioned for a square tile of side `tile_size`
    pub fn for_tile(tile_size: u32) -> Self {
        let side = tile_size as f32;
        let offset = side * MARKER_OFFSET_RATIO;
        Self {
            center: (side - offset - 1.0, offset),
            radius: side * MARKER_RADIUS_RATIO,
            stroke: side / MARKER_STROKE_DIVISOR,
        }
    }

    /// Classify the pixel whose top-left corner is at `(x, y)`
    pub fn classify(&self, x: u32, y: u32) -> MarkerPixel {
        let dx = x as f32 + 0.5 - self.center.0;
        let dy = y as f32 + 0.5 - self.center.1;
        let distance = dx.hypot(dy);

        if (distance - self.radius).abs() <= self.stroke / 2.0 {
            MarkerPixel::Stroke
        } else if distance < self.radius {
            MarkerPixel::Fill
        } else {
            MarkerPixel::Outside
        }
    }
}

// Multiply blend of one channel, rounded
fn multiply(channel: u8, factor: u8) -> u8 {
    ((u16::from(channel) * u16::from(factor) + 127) / 255) as u8
}

/// Draw the decorative marker onto a tile
pub fn overlay_marker(mut tile: RgbImage) -> RgbImage {
    let marker = Marker::for_tile(tile.width().min(tile.height()));

    for (x, y, pixel) in tile.enumerate_pixels_mut() {
        match marker.classify(x, y) {
            MarkerPixel::Outside => {}
            MarkerPixel::Fill => {
                let Rgb([r, g, b]) = *pixel;
                let [fr, fg, fb] = MARKER_FILL;
                *pixel = Rgb([multiply(r, fr), multiply(g, fg), multiply(b, fb)]);
            }
            MarkerPixel::Stroke => *pixel = Rgb(MARKER_STROKE),
        }
    }

    tile
}

/// Run the full crop, scale and decorate pipeline for one source image
pub fn render_tile(source: &RgbImage, plan: &TilePlan, decorate: bool) -> RgbImage {
    let tile = scale(&crop(source, plan.crop), plan.target);
    if decorate {
        overlay_marker(tile)
    } else {
        tile
    }
}
