//! Collage canvas assembly and per-group rendering

use crate::io::configuration::{BACKGROUND, CollageConfig};
use crate::io::error::Result;
use crate::io::image::{RunStamp, collage_path, load_rgb, save_collage};
use crate::io::progress::ProgressManager;
use crate::layout::cursor::PasteCursor;
use crate::layout::geometry::{Point, Size, canvas_size};
use crate::render::tile::{TilePlan, render_tile};
use crate::sampling::FileGroup;
use image::imageops;
use image::{Rgb, RgbImage};
use std::path::PathBuf;
use tracing::info;

/// White canvas of the given size
pub fn blank_canvas(size: Size) -> RgbImage {
    RgbImage::from_pixel(size.width, size.height, Rgb(BACKGROUND))
}

/// Overwrite the canvas region at `at` with the tile's pixels
///
/// Parts of the tile that fall outside the canvas are dropped.
pub fn paste(mut canvas: RgbImage, tile: &RgbImage, at: Point) -> RgbImage {
    imageops::replace(&mut canvas, tile, i64::from(at.x), i64::from(at.y));
    canvas
}

/// Lay ready-made tiles out on a fresh canvas in cursor order
pub fn compose_collage<I>(tiles: I, tile_size: u32, margin: u32) -> RgbImage
where
    I: IntoIterator<Item = RgbImage>,
{
    tiles
        .into_iter()
        .zip(PasteCursor::new(tile_size, margin))
        .fold(
            blank_canvas(canvas_size(tile_size, margin)),
            |canvas, (tile, at)| paste(canvas, &tile, at),
        )
}

/// Renders sampled groups into collage files for one run
pub struct CollageRenderer<'a> {
    config: &'a CollageConfig,
    stamp: RunStamp,
    progress: Option<&'a ProgressManager>,
}

impl<'a> CollageRenderer<'a> {
    /// Create a renderer writing files tagged with `stamp`
    pub const fn new(config: &'a CollageConfig, stamp: RunStamp) -> Self {
        Self {
            config,
            stamp,
            progress: None,
        }
    }

    /// Report every finished tile to a progress display
    #[must_use]
    pub fn with_progress(mut self, progress: &'a ProgressManager) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Stamp shared by every collage of this run
    pub const fn stamp(&self) -> &RunStamp {
        &self.stamp
    }

    /// Build one collage in memory from a group of source files
    ///
    /// Sources are decoded one at a time and each tile is pasted as soon as
    /// it is cut. `number` is the 1-based collage index used in log lines.
    ///
    /// # Errors
    ///
    /// Returns an error if any source image cannot be loaded
    pub fn render_group(&self, number: usize, group: &FileGroup) -> Result<RgbImage> {
        let tile_size = self.config.tile_size;
        let margin = self.config.margin;
        let size = canvas_size(tile_size, margin);

        info!("COLLAGE #{number:02}: {:>9}", size.to_string());

        let mut canvas = blank_canvas(size);
        let positions = PasteCursor::new(tile_size, margin);

        for ((image_index, path), at) in group.iter().enumerate().zip(positions) {
            let source = load_rgb(path)?;
            let plan = TilePlan::new(Size::new(source.width(), source.height()), tile_size);
            info!(
                "\tIMAGE #{:02}: {plan} --> paste: {:>9}",
                image_index + 1,
                at.to_string()
            );
            let tile = render_tile(&source, &plan, self.config.decorate);
            canvas = paste(canvas, &tile, at);

            if let Some(progress) = self.progress {
                progress.tile_done();
            }
        }

        Ok(canvas)
    }

    /// Render a group and write it to the output directory
    ///
    /// # Errors
    ///
    /// Returns an error if a source image cannot be loaded or the collage
    /// cannot be saved
    pub fn render_to_file(&self, number: usize, group: &FileGroup) -> Result<PathBuf> {
        if let Some(progress) = self.progress {
            progress.start_collage(number);
        }

        let canvas = self.render_group(number, group)?;
        let path = collage_path(&self.config.output, &self.stamp, number);
        save_collage(&canvas, &path)?;

        Ok(path)
    }
}
