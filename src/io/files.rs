//! Source directory validation, image discovery and output directory setup

use crate::io::error::{CollageError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Check that every source directory exists
///
/// All directories are checked before failing, so the error names every
/// missing one at once.
///
/// # Errors
///
/// Returns [`CollageError::MissingInputs`] listing every missing directory
pub fn validate_inputs<P: AsRef<Path>>(inputs: &[P]) -> Result<()> {
    let missing: Vec<PathBuf> = inputs
        .iter()
        .map(AsRef::as_ref)
        .filter(|dir| !dir.is_dir())
        .map(Path::to_path_buf)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CollageError::MissingInputs { paths: missing })
    }
}

/// Whether a file name ends with any accepted suffix
///
/// Plain case-sensitive suffix comparison on the whole name, so
/// `holiday.jpg` matches `.jpg` while `holiday.jpg.bak` and `HOLIDAY.JPG` do not.
pub fn matches_extension<S: AsRef<str>>(file_name: &str, extensions: &[S]) -> bool {
    extensions
        .iter()
        .any(|suffix| file_name.ends_with(suffix.as_ref()))
}

/// Gather every matching file below the source directories into one pool
///
/// Directories are visited in the order given; within a directory entries are
/// sorted by file name. Subdirectories are only entered when `recursive` is set.
/// Symlinks to files are collected under the link's own path.
///
/// # Errors
///
/// Returns an error if:
/// - Walking a directory fails (permissions, vanished entries)
/// - No file matched in any directory
pub fn collect_files<P: AsRef<Path>, S: AsRef<str>>(
    inputs: &[P],
    extensions: &[S],
    recursive: bool,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for root in inputs.iter().map(AsRef::as_ref) {
        let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
        if !recursive {
            walker = walker.max_depth(1);
        }

        for entry in walker {
            let entry = entry.map_err(|source| CollageError::Traversal {
                root: root.to_path_buf(),
                source,
            })?;

            // Follows symlinks, so linked photos count as files
            if entry.path().is_file()
                && matches_extension(&entry.file_name().to_string_lossy(), extensions)
            {
                files.push(entry.into_path());
            }
        }

        debug!("scanned {}: {} files so far", root.display(), files.len());
    }

    if files.is_empty() {
        return Err(CollageError::NoFilesFound {
            extensions: extensions.iter().map(|s| s.as_ref().to_string()).collect(),
        });
    }

    Ok(files)
}

/// Create the output directory and any missing parents
///
/// # Errors
///
/// Returns [`CollageError::OutputCreation`] if the directory cannot be created
pub fn prepare_output(output: &Path) -> Result<()> {
    std::fs::create_dir_all(output).map_err(|source| CollageError::OutputCreation {
        path: output.to_path_buf(),
        source,
    })
}
