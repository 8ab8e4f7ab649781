//! Run-wide progress display for collage rendering

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

/// Tracks rendered tiles across every collage of a run
///
/// Owns the [`MultiProgress`] that log output is routed around, so the bar
/// and log lines never overwrite each other.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    tile_bar: Option<ProgressBar>,
    collage_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {msg} [{bar:40.cyan/blue}] {pos}/{len} tiles")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Create a progress manager that never draws
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(target),
            tile_bar: None,
            collage_count: 0,
        }
    }

    /// Handle used to suspend the display while other output is written
    pub fn multi_progress(&self) -> MultiProgress {
        self.multi_progress.clone()
    }

    /// Create the tile bar for `collage_count` collages of `tiles_per_collage` each
    pub fn initialize(&mut self, collage_count: usize, tiles_per_collage: usize) {
        self.collage_count = collage_count;

        let bar = ProgressBar::new((collage_count * tiles_per_collage) as u64);
        bar.set_style(TILE_STYLE.clone());
        self.tile_bar = Some(self.multi_progress.add(bar));
    }

    /// Label the bar with the collage now being rendered (1-based)
    pub fn start_collage(&self, number: usize) {
        if let Some(ref bar) = self.tile_bar {
            bar.set_message(format!("collage {number:02}/{:02}", self.collage_count));
        }
    }

    /// Count one pasted tile
    pub fn tile_done(&self) {
        if let Some(ref bar) = self.tile_bar {
            bar.inc(1);
        }
    }

    /// Tiles counted so far
    pub fn position(&self) -> u64 {
        self.tile_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.tile_bar {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }
}
