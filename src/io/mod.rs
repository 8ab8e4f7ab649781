//! Input/output operations and run orchestration

/// Command-line parsing and pipeline orchestration
pub mod cli;
/// Constants, defaults and the resolved run configuration
pub mod configuration;
/// Error types for every pipeline stage
pub mod error;
/// Directory validation, file discovery and output preparation
pub mod files;
/// Image decoding, collage export and file naming
pub mod image;
/// Console logging setup
pub mod logging;
/// Progress display
pub mod progress;
