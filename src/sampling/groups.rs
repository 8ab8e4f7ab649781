//! Random assignment of pool files to collage groups

use crate::io::configuration::GROUP_SIZE;
use crate::io::error::{CollageError, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};

/// The source files behind one collage, in paste order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    paths: Vec<PathBuf>,
}

impl FileGroup {
    /// Draw [`GROUP_SIZE`] paths uniformly with replacement
    ///
    /// Returns `None` if the pool is empty.
    pub fn sample<R: Rng + ?Sized>(pool: &[PathBuf], rng: &mut R) -> Option<Self> {
        let paths = (0..GROUP_SIZE)
            .map(|_| pool.choose(rng).cloned())
            .collect::<Option<Vec<_>>>()?;
        Some(Self { paths })
    }

    /// Paths in paste order
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Iterate over the paths in paste order
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    /// Always [`GROUP_SIZE`]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Never true for a sampled group
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Sample `count` independent groups from the pool
///
/// Every slot of every group is an independent uniform draw, so the same file
/// may repeat within a group and across groups.
///
/// # Errors
///
/// Returns [`CollageError::NoFilesFound`] if the pool is empty
pub fn sample_groups<R: Rng + ?Sized>(
    pool: &[PathBuf],
    count: usize,
    rng: &mut R,
) -> Result<Vec<FileGroup>> {
    let empty_pool = || CollageError::NoFilesFound {
        extensions: Vec::new(),
    };
    if pool.is_empty() {
        return Err(empty_pool());
    }

    (0..count)
        .map(|_| FileGroup::sample(pool, rng).ok_or_else(empty_pool))
        .collect()
}
