//! Command-line interface and the collage run pipeline

use crate::io::configuration::{
    CollageConfig, DEFAULT_COLLAGE_COUNT, DEFAULT_EXTENSIONS, DEFAULT_INPUT, DEFAULT_OUTPUT,
    DEFAULT_TILE_SIZE, GROUP_SIZE, MAX_CANVAS_SIDE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::files::{collect_files, prepare_output, validate_inputs};
use crate::io::image::RunStamp;
use crate::io::progress::ProgressManager;
use crate::layout::geometry::{checked_canvas_side, resolve_margin};
use crate::render::CollageRenderer;
use crate::sampling::sample_groups;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fugaco")]
#[command(
    author,
    version,
    about = "Compose random 4x4 photo collages from image directories"
)]
/// Command-line arguments for the collage tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directories to grab images from
    #[arg(
        short,
        long = "input",
        value_name = "DIR",
        num_args = 1..,
        default_value = DEFAULT_INPUT
    )]
    pub inputs: Vec<PathBuf>,

    /// Directory to put results to
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Filename suffixes accepted as images (case-sensitive)
    #[arg(
        short,
        long,
        value_name = "SUFFIX",
        num_args = 1..,
        default_values_t = DEFAULT_EXTENSIONS.map(String::from)
    )]
    pub extensions: Vec<String>,

    /// Grab images from subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Number of output collages
    #[arg(short, long, default_value_t = DEFAULT_COLLAGE_COUNT)]
    pub number: usize,

    /// Width and height of photos in the collage
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_TILE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub size: u32,

    /// Spacing between photos; negative or omitted means size/24
    #[arg(short, long, allow_negative_numbers = true)]
    pub margin: Option<i64>,

    /// Add decorative checkboxes
    #[arg(short, long)]
    pub checkbox: bool,

    /// Seed for reproducible image selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolve arguments into a run configuration
    pub fn to_config(&self) -> CollageConfig {
        CollageConfig {
            inputs: self.inputs.clone(),
            output: self.output.clone(),
            extensions: self.extensions.clone(),
            recursive: self.recursive,
            collage_count: self.number,
            tile_size: self.size,
            margin: resolve_margin(self.margin, self.size),
            decorate: self.checkbox,
            seed: self.seed,
        }
    }
}

/// Runs the whole pipeline: validate, collect, prepare, sample, render
pub struct CollageProcessor {
    config: CollageConfig,
    progress_manager: ProgressManager,
}

impl CollageProcessor {
    /// Create a processor with a hidden progress display
    pub fn new(config: CollageConfig) -> Self {
        Self::with_progress(config, ProgressManager::hidden())
    }

    /// Create a processor reporting to the given progress display
    pub const fn with_progress(config: CollageConfig, progress_manager: ProgressManager) -> Self {
        Self {
            config,
            progress_manager,
        }
    }

    /// The configuration this processor runs with
    pub const fn config(&self) -> &CollageConfig {
        &self.config
    }

    /// Run with the seed from the configuration, or OS entropy without one
    ///
    /// # Errors
    ///
    /// Returns an error if any pipeline stage fails; see [`Self::process_with_rng`]
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let mut rng = self
            .config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        self.process_with_rng(&mut rng)
    }

    /// Run the full pipeline with an explicit random source
    ///
    /// Returns the paths of the written collages in order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile size is zero, or tile size and margin give a canvas wider
    ///   than [`MAX_CANVAS_SIDE`]
    /// - Any source directory is missing
    /// - No file matches the accepted suffixes
    /// - The output directory cannot be created
    /// - A source image cannot be decoded or a collage cannot be saved
    pub fn process_with_rng<R: rand::Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<PathBuf>> {
        self.check_dimensions()?;

        validate_inputs(&self.config.inputs)?;

        let files = collect_files(
            &self.config.inputs,
            &self.config.extensions,
            self.config.recursive,
        )?;
        info!("FILES FOUND: {}", files.len());

        let groups = sample_groups(&files, self.config.collage_count, rng)?;

        prepare_output(&self.config.output)?;

        info!(
            "IMAGE SIZE: {:>4} px    SPACING: {:>4} px",
            self.config.tile_size, self.config.margin
        );

        self.progress_manager.initialize(groups.len(), GROUP_SIZE);

        let renderer = CollageRenderer::new(&self.config, RunStamp::now())
            .with_progress(&self.progress_manager);

        let written = groups
            .iter()
            .enumerate()
            .map(|(index, group)| renderer.render_to_file(index + 1, group))
            .collect::<Result<Vec<_>>>();

        self.progress_manager.finish();

        written
    }

    // Tile size and margin must yield a canvas the encoder can write
    fn check_dimensions(&self) -> Result<()> {
        let tile_size = self.config.tile_size;
        let margin = self.config.margin;

        if tile_size == 0 {
            return Err(invalid_parameter(
                "size",
                &tile_size,
                &"tile size must be at least one pixel",
            ));
        }

        let fits = |side: Option<u32>| side.is_some_and(|px| px <= MAX_CANVAS_SIDE);
        let too_wide = format!("collage side would exceed {MAX_CANVAS_SIDE} px");

        if !fits(checked_canvas_side(tile_size, 0)) {
            return Err(invalid_parameter("size", &tile_size, &too_wide));
        }
        if !fits(checked_canvas_side(tile_size, margin)) {
            return Err(invalid_parameter("margin", &margin, &too_wide));
        }

        Ok(())
    }
}
