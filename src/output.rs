//! Structured JSON output for scripting and piping.
//!
//! This module provides serializable data structures that represent the
//! result of a `size` run. When the `--json` flag is passed, these
//! structures are serialized to stdout as a single JSON object, replacing
//! all human-readable output.

use serde::Serialize;

use crate::{config::DisplayOptions, error::Result, storage::Storage, unit::StorageUnit};

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// One entry per measured path, in the order they were given.
    pub entries: Vec<JsonSizeEntry>,

    /// Aggregated totals across all entries.
    pub summary: JsonSummary,
}

/// A single measured path.
#[derive(Serialize, Debug)]
pub struct JsonSizeEntry {
    /// The path as given on the command line.
    pub path: String,

    /// Size in bytes.
    pub bytes: u64,

    /// Size as displayed (auto-scaled or converted).
    pub size: Storage,

    /// Human-readable formatted size (e.g. `"1.5 MIB"`).
    pub formatted: String,
}

/// Totals across all measured paths.
#[derive(Serialize, Debug)]
pub struct JsonSummary {
    /// Number of paths measured.
    pub total_paths: usize,

    /// Sum of all sizes in bytes.
    pub total_bytes: u64,

    /// Human-readable formatted total.
    pub total_formatted: String,
}

impl JsonOutput {
    /// Build a `JsonOutput` from measured `(path, bytes)` pairs.
    ///
    /// Each size is shown the way `present` turns a byte [`Storage`] into
    /// its displayed form.
    ///
    /// # Errors
    ///
    /// Returns a value-kind error if the total overflows.
    pub fn from_sizes<F>(sizes: &[(String, Storage)], present: F) -> Result<Self>
    where
        F: Fn(&Storage) -> Storage,
    {
        let entries: Vec<JsonSizeEntry> = sizes
            .iter()
            .map(|(path, size)| {
                let shown = present(size);
                JsonSizeEntry {
                    path: path.clone(),
                    bytes: size.as_bytes_u64(),
                    size: shown,
                    formatted: shown.to_string(),
                }
            })
            .collect();

        let total = sizes.iter().map(|(_, size)| *size).sum::<Result<Storage>>()?;

        Ok(Self {
            summary: JsonSummary {
                total_paths: entries.len(),
                total_bytes: total.as_bytes_u64(),
                total_formatted: present(&total).to_string(),
            },
            entries,
        })
    }
}

/// Shape a measured size according to the display options.
///
/// With `target` set, the size is converted to that unit; otherwise it is
/// auto-scaled when [`DisplayOptions::auto_scale`] is on, and left in bytes
/// when it is off.
#[must_use]
pub fn present(size: &Storage, target: Option<StorageUnit>, opts: &DisplayOptions) -> Storage {
    match target {
        Some(unit) => size.convert_to(unit),
        None if opts.auto_scale => size.auto_scale(opts.prefer_binary),
        None => *size,
    }
}
