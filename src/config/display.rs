//! Display configuration for rendered sizes.
//!
//! This module defines the options that control how sizes are rendered by
//! the command-line front end.

use crate::format::DEFAULT_DECIMAL_PRECISION;

/// Configuration for rendering sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Maximum number of fractional digits shown
    pub precision: usize,

    /// Scale to binary units (KiB, MiB, ...) instead of decimal ones (KB, MB, ...)
    pub prefer_binary: bool,

    /// Re-express results in the most readable unit before printing
    pub auto_scale: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_DECIMAL_PRECISION,
            prefer_binary: true,
            auto_scale: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_options_default() {
        let opts = DisplayOptions::default();

        assert_eq!(opts.precision, 20);
        assert!(opts.prefer_binary);
        assert!(opts.auto_scale);
    }

    #[test]
    fn test_display_options_copy() {
        let original = DisplayOptions {
            precision: 3,
            prefer_binary: false,
            auto_scale: false,
        };
        let copied = original;

        assert_eq!(original, copied);
    }
}
