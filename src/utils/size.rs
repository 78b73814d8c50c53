//! On-disk size measurement.
//!
//! This module walks files and directories and sums the sizes of the regular
//! files it finds. Symlinks inside a tree are not followed and do not count
//! towards the total. Any entry that cannot be read aborts the walk with its
//! error: a partial total would be misleading.

use std::{fs, path::Path};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::{Result, StorageError};

/// Calculate the size of a file or directory, in bytes.
///
/// A file reports its length. A directory reports the recursive sum over the
/// regular files it contains. A symlink given as `path` itself is resolved.
///
/// # Errors
///
/// - [`StorageError::NotFound`] if `path` does not exist
/// - [`StorageError::PermissionDenied`] if `path` or an entry below it cannot be read
/// - [`StorageError::Io`] for any other I/O failure
pub fn path_size(path: &Path) -> Result<u64> {
    let metadata = fs::metadata(path).map_err(|e| StorageError::from_io(path, e))?;

    if metadata.is_dir() {
        directory_size(path)
    } else {
        Ok(metadata.len())
    }
}

/// Like [`path_size`], but directories are measured by walking their
/// top-level entries in parallel on the rayon thread pool.
///
/// # Errors
///
/// Same as [`path_size`].
pub fn parallel_path_size(path: &Path) -> Result<u64> {
    let metadata = fs::metadata(path).map_err(|e| StorageError::from_io(path, e))?;

    if !metadata.is_dir() {
        return Ok(metadata.len());
    }

    let children = fs::read_dir(path)
        .map_err(|e| StorageError::from_io(path, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| StorageError::from_io(path, e))?;

    let sizes = children
        .into_par_iter()
        .map(|child| entry_size(&child))
        .collect::<Result<Vec<u64>>>()?;

    Ok(sizes.into_iter().sum())
}

/// Size of one directory entry without following it if it is a symlink.
fn entry_size(path: &Path) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| StorageError::from_io(path, e))?;
    let file_type = metadata.file_type();

    if file_type.is_dir() {
        directory_size(path)
    } else if file_type.is_file() {
        Ok(metadata.len())
    } else {
        Ok(0)
    }
}

/// Recursively sum the regular files below `root`, failing on the first error.
fn directory_size(root: &Path) -> Result<u64> {
    let mut total = 0u64;

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| walk_error(root, e))?;

        if entry.file_type().is_file() {
            let metadata = entry.metadata().map_err(|e| walk_error(root, e))?;
            total += metadata.len();
        }
    }

    Ok(total)
}

/// Convert a `walkdir` error into a [`StorageError`] naming the offending path.
fn walk_error(root: &Path, err: walkdir::Error) -> StorageError {
    let path = err.path().unwrap_or(root).to_path_buf();

    match err.into_io_error() {
        Some(io_err) => StorageError::from_io(path, io_err),
        None => StorageError::Io {
            path,
            source: std::io::Error::other("filesystem loop detected"),
        },
    }
}
