//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their validation
//! using the [clap](https://docs.rs/clap/) library. It provides structured access
//! to user input and handles argument conflicts and defaults.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use storage_size::{
    DEFAULT_DECIMAL_PRECISION, StorageUnit,
    config::{DisplayOptions, FileConfig, SizingOptions},
};

/// Arguments for the `parse` subcommand.
#[derive(Args)]
pub struct ParseArgs {
    /// One or more sizes to parse (e.g. `"1.5 GiB"`, `500MB`, `1024`)
    #[arg(required = true, num_args = 1..)]
    pub texts: Vec<String>,

    /// Unit assumed when a size has no unit label
    #[arg(short = 'u', long, default_value = "bytes")]
    pub default_unit: StorageUnit,

    /// Convert every parsed size to this unit
    ///
    /// Accepts any unit alias: `kib`, `MB`, `gigabytes`, `kbit`, ...
    #[arg(long, conflicts_with = "auto")]
    pub to: Option<StorageUnit>,

    /// Re-express every parsed size in its most readable unit
    #[arg(short = 'a', long)]
    pub auto: bool,

    /// Scale to decimal units (KB, MB, ...) instead of binary ones (KiB, MiB, ...)
    #[arg(long)]
    pub decimal: bool,
}

/// Arguments for the `size` subcommand.
#[derive(Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct SizeArgs {
    /// Files or directories to measure
    #[arg(required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Show every size in this unit
    #[arg(long, conflicts_with = "raw")]
    pub to: Option<StorageUnit>,

    /// Show sizes in bytes instead of auto-scaling them
    #[arg(long)]
    pub raw: bool,

    /// Scale to decimal units (KB, MB, ...) instead of binary ones (KiB, MiB, ...)
    #[arg(long)]
    pub decimal: bool,

    /// Measure with the sizer selected for the running operating system
    #[arg(long)]
    pub platform: bool,

    /// The number of threads to use for the parallel sizers
    ///
    /// A value of 0 uses the default number of threads (typically the number of CPU cores).
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output (colors, spinner) is suppressed
    /// and a single JSON document is printed to stdout.
    #[arg(long)]
    pub json: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse human-readable sizes and print them, optionally converted
    Parse(ParseArgs),

    /// Measure the on-disk size of files and directories
    Size(SizeArgs),

    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file values act as
/// defaults when the corresponding CLI argument is not provided.
#[derive(Parser)]
#[command(name = "storage-size")]
#[command(about = "Parse, convert and measure storage sizes (bytes, KiB..YiB, KB..YB, bits)")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Maximum number of fractional digits shown in sizes
    #[arg(short = 'p', long, global = true)]
    precision: Option<usize>,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        matches!(&self.command, Commands::Size(size) if size.json)
    }

    /// Extract display options from CLI args and config file.
    ///
    /// - **precision**: CLI > config > `20`
    /// - **prefer_binary**: `false` when `--decimal` is given, else config > `true`
    /// - **auto_scale**: for `size`, `false` when `--raw` is given, else
    ///   config > `true`; for `parse`, only when `--auto` is given
    #[must_use]
    pub fn display_options(&self, config: &FileConfig) -> DisplayOptions {
        let precision = self
            .precision
            .or(config.display.precision)
            .unwrap_or(DEFAULT_DECIMAL_PRECISION);
        let configured_binary = config.display.prefer_binary.unwrap_or(true);

        let (decimal, auto_scale) = match &self.command {
            Commands::Parse(parse) => (parse.decimal, parse.auto),
            Commands::Size(size) => (
                size.decimal,
                !size.raw && config.display.auto_scale.unwrap_or(true),
            ),
            Commands::Config { .. } => (false, config.display.auto_scale.unwrap_or(true)),
        };

        DisplayOptions {
            precision,
            prefer_binary: !decimal && configured_binary,
            auto_scale,
        }
    }

    /// Extract sizing options from CLI args and config file.
    ///
    /// - **threads**: CLI > config > `0` (default)
    /// - **platform**: CLI flag `||` config value `||` `false`
    #[must_use]
    pub fn sizing_options(&self, config: &FileConfig) -> SizingOptions {
        let (threads, platform) = match &self.command {
            Commands::Size(size) => (size.threads, size.platform),
            _ => (None, false),
        };

        SizingOptions {
            threads: threads.or(config.sizing.threads).unwrap_or(0),
            platform: platform || config.sizing.platform.unwrap_or(false),
        }
    }
}
