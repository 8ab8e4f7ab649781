//! Turning file groups into collage images

/// Canvas assembly and group rendering
pub mod collage;
/// Crop, scale and marker overlay for single tiles
pub mod tile;

pub use collage::CollageRenderer;
