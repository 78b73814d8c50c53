//! # storage-size
//!
//! A small CLI for parsing, converting and measuring storage sizes.
//!
//! ## Features
//!
//! - Parse sizes written as `1.5 GiB`, `500MB`, `1,5 gb` or plain byte counts
//! - Convert between binary (KiB..YiB), decimal (KB..YB) and bit units
//! - Measure files and directories, optionally with the per-OS parallel sizer
//! - Human-readable output with progress indicators, or JSON for scripting
//! - Persistent configuration via `~/.config/storage-size/config.toml`
//!
//! ## Usage
//!
//! ```bash
//! # Parse and convert
//! storage-size parse "1.5 GiB" --to mb
//!
//! # Measure directories
//! storage-size size ~/Downloads ~/Projects --decimal
//!
//! # Scripting
//! storage-size size target --json
//! ```

mod cli;

use std::{path::PathBuf, process::exit, time::Duration};

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand, ParseArgs, SizeArgs};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use storage_size::{
    Storage,
    config::{DisplayOptions, FileConfig, SizingOptions},
    format_value,
    output::{JsonOutput, present},
    set_decimal_precision,
};

/// Entry point for the storage-size application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns errors from parsing, path sizing, thread-pool configuration,
/// config file handling, or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let file_config = match &args.command {
        Commands::Config { command } => return handle_config_command(command),
        _ => load_config(args.json()),
    };

    let display = args.display_options(&file_config);
    set_decimal_precision(display.precision);

    match &args.command {
        Commands::Parse(parse_args) => run_parse(parse_args, &display),
        Commands::Size(size_args) => {
            run_size(size_args, &display, &args.sizing_options(&file_config))
        }
        Commands::Config { .. } => Ok(()),
    }
}

// ── Parse subcommand ─────────────────────────────────────────────────

/// Parse every input, then print it converted as requested.
fn run_parse(args: &ParseArgs, display: &DisplayOptions) -> Result<()> {
    for text in &args.texts {
        let size = Storage::parse_with_default(text, args.default_unit)
            .map_err(|e| anyhow::anyhow!("Failed to parse '{text}': {e}"))?;

        let shown = match args.to {
            Some(unit) => size.convert_to(unit),
            None if display.auto_scale => size.auto_scale(display.prefer_binary),
            None => size,
        };

        println!(
            "{} {} {}  {}",
            text.bold(),
            "=>".dimmed(),
            shown.to_string().bright_white(),
            format!(
                "({} bytes)",
                format_value(size.convert_to_bytes(), display.precision)
            )
            .dimmed()
        );
    }

    Ok(())
}

// ── Size subcommand ──────────────────────────────────────────────────

/// Measure every path and print one line per path plus a total.
fn run_size(args: &SizeArgs, display: &DisplayOptions, sizing: &SizingOptions) -> Result<()> {
    if sizing.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(sizing.threads)
            .build_global()?;
    }

    let progress = if args.json {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let sizes = measure_all(&args.paths, sizing, &progress);
    progress.finish_and_clear();
    let sizes = sizes?;

    let shape = |size: &Storage| present(size, args.to, display);

    if args.json {
        let output = JsonOutput::from_sizes(&sizes, shape)?;
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let width = sizes.iter().map(|(path, _)| path.len()).max().unwrap_or(0);
    for (path, size) in &sizes {
        println!("  {path:<width$}  {}", shape(size).to_string().bright_white());
    }

    let total = sizes
        .iter()
        .map(|(_, size)| *size)
        .sum::<storage_size::Result<Storage>>()?;
    println!(
        "\n{} {}",
        "💾 Total:".bold(),
        shape(&total).to_string().bright_green().bold()
    );

    Ok(())
}

/// Size each path in order, stopping at the first failure.
fn measure_all(
    paths: &[PathBuf],
    sizing: &SizingOptions,
    progress: &ProgressBar,
) -> Result<Vec<(String, Storage)>> {
    let sizer = if sizing.platform {
        Some(Storage::get_platform_storage()?)
    } else {
        None
    };

    paths
        .iter()
        .map(|path| -> Result<(String, Storage)> {
            let label = path.display().to_string();
            progress.set_message(format!("Measuring {label}..."));

            let size = match &sizer {
                Some(sizer) => sizer.get_size_from_path(path)?,
                None => Storage::get_size_from_path(path)?,
            };

            Ok((label, size))
        })
        .collect()
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r"# storage-size configuration
# All values shown are their defaults. Uncomment and change as needed.

[display]
# Maximum number of fractional digits shown in sizes
# precision = 20

# Auto-scale to binary units (KiB, MiB, ...) instead of decimal ones (KB, MB, ...)
# prefer_binary = true

# Show `size` results in their most readable unit instead of bytes
# auto_scale = true

[sizing]
# Number of threads for the parallel sizers (0 = all CPU cores)
# threads = 0

# Measure with the sizer selected for the running operating system
# platform = false
";

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_usize(val: Option<usize>, default: &str) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    format!(
        "\
[display]
precision     = {precision}
prefer_binary = {prefer_binary}
auto_scale    = {auto_scale}

[sizing]
threads       = {threads}
platform      = {platform}",
        precision = show_usize(config.display.precision, "20"),
        prefer_binary = show_bool(config.display.prefer_binary, true),
        auto_scale = show_bool(config.display.auto_scale, true),
        threads = show_usize(config.sizing.threads, "0 (all cores)"),
        platform = show_bool(config.sizing.platform, false),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_template_parses_to_defaults() {
        let config: FileConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();

        assert!(config.display.precision.is_none());
        assert!(config.sizing.threads.is_none());
    }

    #[test]
    fn test_config_template_uncommented_is_valid() {
        let uncommented: String = CONFIG_TEMPLATE
            .lines()
            .map(|line| line.strip_prefix("# ").filter(|l| l.contains(" = ")).unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n");

        let config: FileConfig = toml::from_str(&uncommented).unwrap();
        assert_eq!(config.display.precision, Some(20));
        assert_eq!(config.display.prefer_binary, Some(true));
        assert_eq!(config.sizing.threads, Some(0));
        assert_eq!(config.sizing.platform, Some(false));
    }

    #[test]
    fn test_format_config_marks_defaults() {
        let text = format_config(&FileConfig::default());

        assert!(text.contains("precision     = 20  (default)"));
        assert!(text.contains("platform      = false  (default)"));
    }

    #[test]
    fn test_format_config_shows_values() {
        let config: FileConfig = toml::from_str("[display]\nprecision = 3\n").unwrap();
        let text = format_config(&config);

        assert!(text.contains("precision     = 3\n"));
    }
}
