//! Error types for storage values, parsing and path sizing.
//!
//! Every fallible operation in the library returns [`StorageError`]. Callers
//! that only care about the broad category of a failure can match on
//! [`StorageError::kind`] instead of the individual variants.

use std::{io, path::PathBuf};

/// Broad category of a [`StorageError`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// An invalid value: negative size, negative result, bad scalar.
    Value,

    /// Text that could not be parsed into a storage value.
    Parse,

    /// Division or remainder by zero.
    ZeroDivision,

    /// A path that does not exist.
    NotFound,

    /// A path that could not be accessed.
    PermissionDenied,

    /// Any other I/O failure while sizing a path.
    Io,

    /// No path sizer exists for the running operating system.
    UnsupportedPlatform,
}

/// Errors produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage value cannot be negative: {0}")]
    NegativeValue(f64),

    #[error("Storage value must be finite, got: {0}")]
    NonFiniteValue(f64),

    #[error("Storage value exceeds the largest representable byte total")]
    Overflow,

    #[error("Storage subtraction result cannot be negative")]
    NegativeResult,

    #[error("Scalar operand must be finite and non-negative, got: {0}")]
    InvalidScalar(f64),

    #[error("Input string cannot be empty")]
    EmptyInput,

    #[error("Invalid format: '{0}'. Expected format: 'number [unit]'")]
    InvalidFormat(String),

    #[error("Negative sizes are not allowed: '{0}'")]
    NegativeInput(String),

    #[error("Invalid numeric value: '{0}'")]
    InvalidNumber(String),

    #[error("Unrecognized unit: '{0}'")]
    UnknownUnit(String),

    #[error("Cannot divide storage by zero")]
    DivisionByZero,

    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied accessing: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Error accessing path {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

impl StorageError {
    /// Classify the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NegativeValue(_)
            | Self::NonFiniteValue(_)
            | Self::Overflow
            | Self::NegativeResult
            | Self::InvalidScalar(_) => ErrorKind::Value,
            Self::EmptyInput
            | Self::InvalidFormat(_)
            | Self::NegativeInput(_)
            | Self::InvalidNumber(_)
            | Self::UnknownUnit(_) => ErrorKind::Parse,
            Self::DivisionByZero => ErrorKind::ZeroDivision,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Self::Io { .. } => ErrorKind::Io,
            Self::UnsupportedPlatform(_) => ErrorKind::UnsupportedPlatform,
        }
    }

    /// Map an I/O error raised while accessing `path` onto the matching variant.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Io { path, source },
        }
    }
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, StorageError>;
