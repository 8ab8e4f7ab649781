//! Layout constants, command-line defaults and the resolved run configuration

use std::path::PathBuf;

// Grid shape
/// Tiles per row and per column
pub const GRID_SIDE: u32 = 4;
/// Source images per collage
pub const GROUP_SIZE: usize = (GRID_SIDE * GRID_SIDE) as usize;

// Defaults for configurable parameters
/// Directory scanned when no input is given
pub const DEFAULT_INPUT: &str = ".";
/// Directory collages are written to
pub const DEFAULT_OUTPUT: &str = "./fugaco";
/// Filename suffixes accepted as images
pub const DEFAULT_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".jpeg"];
/// Collages produced per run
pub const DEFAULT_COLLAGE_COUNT: usize = 4;
/// Tile width and height in pixels
pub const DEFAULT_TILE_SIZE: u32 = 240;
/// Default margin is the tile size divided by this
pub const MARGIN_DIVISOR: u32 = 24;

// Canvas
/// Largest collage side the JPEG encoder can write
pub const MAX_CANVAS_SIDE: u32 = 65_535;
/// Canvas background (white)
pub const BACKGROUND: [u8; 3] = [255, 255, 255];

// Decorative marker, proportional to the tile size
/// Distance of the marker center from the top and right tile edges
pub const MARKER_OFFSET_RATIO: f32 = 0.15;
/// Marker radius
pub const MARKER_RADIUS_RATIO: f32 = 0.088;
/// Outline thickness is the tile size divided by this
pub const MARKER_STROKE_DIVISOR: f32 = 75.0;
/// Fill colour, multiplied into the tile
pub const MARKER_FILL: [u8; 3] = [243, 243, 243];
/// Outline colour
pub const MARKER_STROKE: [u8; 3] = [255, 255, 255];

// Output naming
/// Leading part of every collage filename
pub const OUTPUT_PREFIX: &str = "FUGACO";
/// Container format of written collages
pub const OUTPUT_EXTENSION: &str = "jpg";
/// Timestamp layout shared by every collage of one run
pub const RUN_STAMP_FORMAT: &str = "%Y%m%d%H%M%S%6f";

// Logging
/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Filter used in quiet mode when `RUST_LOG` is unset
pub const QUIET_LOG_FILTER: &str = "warn";

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollageConfig {
    /// Directories to collect images from
    pub inputs: Vec<PathBuf>,
    /// Directory collages are written to
    pub output: PathBuf,
    /// Accepted filename suffixes (case-sensitive)
    pub extensions: Vec<String>,
    /// Descend into subdirectories
    pub recursive: bool,
    /// Number of collages to produce
    pub collage_count: usize,
    /// Tile width and height in pixels
    pub tile_size: u32,
    /// Spacing between tiles and around the canvas edge
    pub margin: u32,
    /// Draw the decorative marker on each tile
    pub decorate: bool,
    /// Seed for group sampling; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            inputs: vec![PathBuf::from(DEFAULT_INPUT)],
            output: PathBuf::from(DEFAULT_OUTPUT),
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            recursive: false,
            collage_count: DEFAULT_COLLAGE_COUNT,
            tile_size: DEFAULT_TILE_SIZE,
            margin: crate::layout::geometry::default_margin(DEFAULT_TILE_SIZE),
            decorate: false,
            seed: None,
        }
    }
}
