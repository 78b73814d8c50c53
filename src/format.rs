//! Rendering of storage values and auto-scaling unit selection.
//!
//! Numbers are written in fixed-point notation only. The number of fractional
//! digits shown is capped by a process-wide precision setting (default
//! [`DEFAULT_DECIMAL_PRECISION`]).
//!
//! The precision lives in an atomic, so reading and writing it from several
//! threads is sound, but which write a concurrent formatter observes is up to
//! the caller to coordinate.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::unit::StorageUnit;

/// Fractional digits shown when nothing else has been configured.
pub const DEFAULT_DECIMAL_PRECISION: usize = 20;

static DECIMAL_PRECISION: AtomicUsize = AtomicUsize::new(DEFAULT_DECIMAL_PRECISION);

/// Set the maximum number of fractional digits used when rendering values.
///
/// Affects every subsequent call to [`render`] and every `Display` of a
/// [`crate::Storage`] without an explicit precision.
pub fn set_decimal_precision(precision: usize) {
    DECIMAL_PRECISION.store(precision, Ordering::Relaxed);
}

/// The current maximum number of fractional digits.
#[must_use]
pub fn get_decimal_precision() -> usize {
    DECIMAL_PRECISION.load(Ordering::Relaxed)
}

/// Format `value` in fixed-point notation with at most `precision` fractional digits.
///
/// The shortest representation that round-trips is used when it fits within
/// `precision`; otherwise the value is rounded to `precision` digits. Trailing
/// zeros and a dangling decimal point are removed.
///
/// # Examples
///
/// ```
/// # use storage_size::format_value;
/// assert_eq!(format_value(1024.0, 20), "1024");
/// assert_eq!(format_value(1.5, 20), "1.5");
/// assert_eq!(format_value(9.872019291e-05, 10), "0.0000987202");
/// assert_eq!(format_value(2.0004, 2), "2");
/// ```
#[must_use]
pub fn format_value(value: f64, precision: usize) -> String {
    let shortest = value.to_string();

    match shortest.split_once('.') {
        Some((_, fraction)) if fraction.len() > precision => {
            trim_fraction(format!("{value:.precision$}"))
        }
        _ => shortest,
    }
}

/// Drop trailing zeros after the decimal point, and the point itself if nothing remains.
fn trim_fraction(formatted: String) -> String {
    if !formatted.contains('.') {
        return formatted;
    }

    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Render a value and unit as `"<number> <UNIT>"` using the global precision.
#[must_use]
pub fn render(value: f64, unit: StorageUnit) -> String {
    format!("{} {}", format_value(value, get_decimal_precision()), unit.name())
}

/// Pick the most readable unit for a byte total.
///
/// Returns the largest unit of the chosen family whose scaled value is at
/// least 1, or [`StorageUnit::Bytes`] when none qualifies.
#[must_use]
pub fn optimal_unit(bytes: f64, prefer_binary: bool) -> StorageUnit {
    let scale = if prefer_binary {
        StorageUnit::BINARY_SCALE
    } else {
        StorageUnit::DECIMAL_SCALE
    };

    scale
        .into_iter()
        .rev()
        .find(|unit| bytes / unit.multiplier() >= 1.0)
        .unwrap_or(StorageUnit::Bytes)
}
