//! # storage-size
//!
//! Storage quantities as values: parse them from human-readable text,
//! convert them between binary, decimal and bit units, do arithmetic on
//! them, and measure files and directories on disk.
//!
//! ## Main Parts
//!
//! - [`Storage`] - A non-negative quantity with its unit
//! - [`StorageUnit`] - The unit table (bytes, KiB..YiB, KB..YB, bits..yottabits)
//! - [`parser`] - Text to value/unit pairs
//! - [`format`] - Value rendering and the global decimal precision
//! - [`sizer`] - Per-platform path sizers
//! - [`config`] and [`output`] - Support for the command-line front end
//!
//! ## Example
//!
//! ```
//! use storage_size::{Storage, StorageUnit};
//!
//! let size = Storage::parse("1.5 MiB")?;
//! assert_eq!(size.convert_to(StorageUnit::Kib).to_string(), "1536 KIB");
//! # Ok::<(), storage_size::StorageError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod parser;
pub mod sizer;
pub mod storage;
pub mod unit;
pub mod utils;

pub use config::{DisplayOptions, SizingOptions};
pub use error::{ErrorKind, Result, StorageError};
pub use format::{
    DEFAULT_DECIMAL_PRECISION, format_value, get_decimal_precision, set_decimal_precision,
};
pub use parser::parse_parts;
pub use sizer::{LinuxStorage, MacStorage, PathSizer, WindowsStorage, platform_sizer, sizer_for_os};
pub use storage::Storage;
pub use unit::{StorageUnit, UnitFamily};
