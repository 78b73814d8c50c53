//! Parsing of human-readable storage strings.
//!
//! Accepts inputs like `"1024"`, `"1.5 MB"`, `"1,5mb"` or `"2 gibibytes"`:
//! a non-negative number, an optional run of spaces, and an optional unit
//! label resolved through [`StorageUnit::from_alias`].

use crate::{
    error::{Result, StorageError},
    unit::StorageUnit,
};

/// Parse `text` into a numeric value and its unit.
///
/// When no unit label is present, `default_unit` is used.
///
/// # Errors
///
/// Returns a parse-kind [`StorageError`] if:
/// - The input is empty or only whitespace
/// - The number is negative (`"-1 MB"`)
/// - The text does not have the shape `number [unit]` (`"MB1"`, `"1.2.3MB"`)
/// - The unit label is not a known alias (`"1 XB"`)
///
/// # Examples
///
/// ```
/// # use storage_size::{parse_parts, StorageUnit};
/// assert_eq!(parse_parts("1,5 GB", StorageUnit::Bytes).unwrap(), (1.5, StorageUnit::Gb));
/// assert_eq!(parse_parts("1024", StorageUnit::Bytes).unwrap(), (1024.0, StorageUnit::Bytes));
/// ```
pub fn parse_parts(text: &str, default_unit: StorageUnit) -> Result<(f64, StorageUnit)> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StorageError::EmptyInput);
    }

    let (number_str, label) = split_number_and_label(trimmed);

    let number_str = strip_sign(number_str, text)?;
    let normalized = normalize_number(number_str, text)?;

    let unit = resolve_unit(label, text, default_unit)?;
    let value = parse_number(&normalized)?;

    Ok((value, unit))
}

/// Split at the first alphabetic character: `"1.5 MB"` → `("1.5", "MB")`.
fn split_number_and_label(text: &str) -> (&str, &str) {
    let split_at = text
        .char_indices()
        .find(|(_, c)| c.is_alphabetic())
        .map_or(text.len(), |(i, _)| i);

    let (number, label) = text.split_at(split_at);
    (number.trim_end(), label.trim())
}

/// Remove an optional leading `+`; a leading `-` is rejected.
fn strip_sign<'a>(number_str: &'a str, original: &str) -> Result<&'a str> {
    if number_str.starts_with('-') {
        return Err(StorageError::NegativeInput(original.trim().to_string()));
    }

    Ok(number_str.strip_prefix('+').unwrap_or(number_str))
}

/// Check the numeric run and turn a `,` decimal separator into `.`.
fn normalize_number(number_str: &str, original: &str) -> Result<String> {
    let invalid = || StorageError::InvalidFormat(original.trim().to_string());

    let mut separators = 0;
    let mut digits = 0;
    for c in number_str.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' | ',' => separators += 1,
            _ => return Err(invalid()),
        }
    }

    if digits == 0 || separators > 1 {
        return Err(invalid());
    }

    Ok(number_str.replace(',', "."))
}

/// Resolve the unit label, falling back to `default_unit` when it is absent.
fn resolve_unit(label: &str, original: &str, default_unit: StorageUnit) -> Result<StorageUnit> {
    if label.is_empty() {
        return Ok(default_unit);
    }

    if !label.chars().all(char::is_alphabetic) {
        return Err(StorageError::InvalidFormat(original.trim().to_string()));
    }

    StorageUnit::from_alias(label).ok_or_else(|| StorageError::UnknownUnit(label.to_string()))
}

fn parse_number(number_str: &str) -> Result<f64> {
    let invalid = || StorageError::InvalidNumber(number_str.to_string());
    let value = number_str.parse::<f64>().map_err(|_| invalid())?;

    // Digit runs past the f64 range parse to infinity.
    if value.is_finite() { Ok(value) } else { Err(invalid()) }
}
