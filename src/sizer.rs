//! Platform-specific path sizers.
//!
//! All sizers honour the same contract as [`crate::utils::size::path_size`]:
//! same totals, same errors. They only differ in how the tree is traversed.
//!
//! ## Main Parts
//!
//! - [`PathSizer`] - The sizing capability
//! - [`LinuxStorage`], [`MacStorage`], [`WindowsStorage`] - Per-OS implementations
//! - [`platform_sizer`] - Picks the implementation for the running OS

use std::{fmt::Debug, path::Path};

use crate::{
    error::{Result, StorageError},
    storage::Storage,
    utils::size::{parallel_path_size, path_size},
};

/// Measures the on-disk size of files and directories.
pub trait PathSizer: Debug + Send + Sync {
    /// Name of the operating system this sizer targets.
    fn platform(&self) -> &'static str;

    /// Size of `path` in bytes.
    ///
    /// # Errors
    ///
    /// Returns a not-found, permission or I/O error for the first entry
    /// that cannot be read.
    fn size_in_bytes(&self, path: &Path) -> Result<u64>;

    /// Size of `path` as a [`Storage`] in bytes.
    ///
    /// # Errors
    ///
    /// Same as [`PathSizer::size_in_bytes`].
    fn get_size_from_path(&self, path: &Path) -> Result<Storage> {
        self.size_in_bytes(path).map(Storage::from_byte_count)
    }
}

/// Sizer for Linux: walks top-level entries in parallel.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinuxStorage;

/// Sizer for macOS: walks top-level entries in parallel.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacStorage;

/// Sizer for Windows: walks the tree sequentially.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsStorage;

impl PathSizer for LinuxStorage {
    fn platform(&self) -> &'static str {
        "linux"
    }

    fn size_in_bytes(&self, path: &Path) -> Result<u64> {
        parallel_path_size(path)
    }
}

impl PathSizer for MacStorage {
    fn platform(&self) -> &'static str {
        "macos"
    }

    fn size_in_bytes(&self, path: &Path) -> Result<u64> {
        parallel_path_size(path)
    }
}

impl PathSizer for WindowsStorage {
    fn platform(&self) -> &'static str {
        "windows"
    }

    fn size_in_bytes(&self, path: &Path) -> Result<u64> {
        path_size(path)
    }
}

/// The sizer for the operating system named `os` (as in [`std::env::consts::OS`]).
///
/// # Errors
///
/// Returns [`StorageError::UnsupportedPlatform`] for any other name.
pub fn sizer_for_os(os: &str) -> Result<Box<dyn PathSizer>> {
    match os {
        "linux" => Ok(Box::new(LinuxStorage)),
        "macos" => Ok(Box::new(MacStorage)),
        "windows" => Ok(Box::new(WindowsStorage)),
        other => Err(StorageError::UnsupportedPlatform(other.to_string())),
    }
}

/// The sizer for the running operating system.
///
/// # Errors
///
/// Returns [`StorageError::UnsupportedPlatform`] when no sizer exists for it.
pub fn platform_sizer() -> Result<Box<dyn PathSizer>> {
    sizer_for_os(std::env::consts::OS)
}
