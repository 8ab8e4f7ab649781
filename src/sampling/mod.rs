//! Random grouping of collected files

/// Group sampling with an injected random source
pub mod groups;

pub use groups::{FileGroup, sample_groups};
