//! Utility functions and helpers.
//!
//! This module contains the file-system helpers used by the path sizers.

pub mod size;

pub use size::{parallel_path_size, path_size};
