//! Sizing configuration for path measurement.
//!
//! This module defines the options that control how files and directories
//! are measured by the command-line front end.

/// Configuration for path sizing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizingOptions {
    /// Number of threads for the parallel sizers (0 = rayon default)
    pub threads: usize,

    /// Use the sizer selected for the running OS instead of the portable walk
    pub platform: bool,
}
