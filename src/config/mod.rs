//! Configuration for the `storage-size` binary.
//!
//! - [`file`] - Persistent TOML configuration file
//! - [`display`] - How sizes are rendered
//! - [`sizing`] - How paths are measured

pub mod display;
pub mod file;
pub mod sizing;

pub use display::DisplayOptions;
pub use file::FileConfig;
pub use sizing::SizingOptions;
