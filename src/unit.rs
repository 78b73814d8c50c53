//! Storage units and their alias table.
//!
//! Each [`StorageUnit`] knows its multiplier in bytes, its canonical display
//! name and the set of lower-case spellings accepted by the parser. The alias
//! table is static; uniqueness across units is checked by the tests below.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Family a unit belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnitFamily {
    /// Powers of 1024 (BYTES is reported here).
    Binary,

    /// Powers of 1000.
    Decimal,

    /// Powers of 1000 bits.
    Bit,
}

/// A storage denomination.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StorageUnit {
    Bytes,
    Kib,
    Mib,
    Gib,
    Tib,
    Pib,
    Eib,
    Zib,
    Yib,
    Kb,
    Mb,
    Gb,
    Tb,
    Pb,
    Eb,
    Zb,
    Yb,
    Bits,
    Kilobits,
    Megabits,
    Gigabits,
    Terabits,
    Petabits,
    Exabits,
    Zettabits,
    Yottabits,
}

impl StorageUnit {
    /// Every unit, in declaration order.
    pub const ALL: [Self; 26] = [
        Self::Bytes,
        Self::Kib,
        Self::Mib,
        Self::Gib,
        Self::Tib,
        Self::Pib,
        Self::Eib,
        Self::Zib,
        Self::Yib,
        Self::Kb,
        Self::Mb,
        Self::Gb,
        Self::Tb,
        Self::Pb,
        Self::Eb,
        Self::Zb,
        Self::Yb,
        Self::Bits,
        Self::Kilobits,
        Self::Megabits,
        Self::Gigabits,
        Self::Terabits,
        Self::Petabits,
        Self::Exabits,
        Self::Zettabits,
        Self::Yottabits,
    ];

    /// BYTES followed by the binary units, smallest first.
    pub const BINARY_SCALE: [Self; 9] = [
        Self::Bytes,
        Self::Kib,
        Self::Mib,
        Self::Gib,
        Self::Tib,
        Self::Pib,
        Self::Eib,
        Self::Zib,
        Self::Yib,
    ];

    /// BYTES followed by the decimal units, smallest first.
    pub const DECIMAL_SCALE: [Self; 9] = [
        Self::Bytes,
        Self::Kb,
        Self::Mb,
        Self::Gb,
        Self::Tb,
        Self::Pb,
        Self::Eb,
        Self::Zb,
        Self::Yb,
    ];

    /// Number of bytes in one of this unit.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Bytes => 1.0,
            Self::Kib => 1_024.0,
            Self::Mib => 1_048_576.0,
            Self::Gib => 1_073_741_824.0,
            Self::Tib => 1_099_511_627_776.0,
            Self::Pib => 1_125_899_906_842_624.0,
            Self::Eib => 1_152_921_504_606_846_976.0,
            Self::Zib => 1_180_591_620_717_411_303_424.0,
            Self::Yib => 1_208_925_819_614_629_174_706_176.0,
            Self::Kb => 1e3,
            Self::Mb => 1e6,
            Self::Gb => 1e9,
            Self::Tb => 1e12,
            Self::Pb => 1e15,
            Self::Eb => 1e18,
            Self::Zb => 1e21,
            Self::Yb => 1e24,
            Self::Bits => 0.125,
            Self::Kilobits => 125.0,
            Self::Megabits => 125_000.0,
            Self::Gigabits => 1.25e8,
            Self::Terabits => 1.25e11,
            Self::Petabits => 1.25e14,
            Self::Exabits => 1.25e17,
            Self::Zettabits => 1.25e20,
            Self::Yottabits => 1.25e23,
        }
    }

    /// Canonical upper-case display name, e.g. `"KIB"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bytes => "BYTES",
            Self::Kib => "KIB",
            Self::Mib => "MIB",
            Self::Gib => "GIB",
            Self::Tib => "TIB",
            Self::Pib => "PIB",
            Self::Eib => "EIB",
            Self::Zib => "ZIB",
            Self::Yib => "YIB",
            Self::Kb => "KB",
            Self::Mb => "MB",
            Self::Gb => "GB",
            Self::Tb => "TB",
            Self::Pb => "PB",
            Self::Eb => "EB",
            Self::Zb => "ZB",
            Self::Yb => "YB",
            Self::Bits => "BITS",
            Self::Kilobits => "KILOBITS",
            Self::Megabits => "MEGABITS",
            Self::Gigabits => "GIGABITS",
            Self::Terabits => "TERABITS",
            Self::Petabits => "PETABITS",
            Self::Exabits => "EXABITS",
            Self::Zettabits => "ZETTABITS",
            Self::Yottabits => "YOTTABITS",
        }
    }

    /// Lower-case spellings that resolve to this unit.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Bytes => &["b", "byte", "bytes"],
            Self::Kib => &["k", "kib", "kibibyte", "kibibytes"],
            Self::Mib => &["m", "mib", "mebibyte", "mebibytes"],
            Self::Gib => &["g", "gib", "gibibyte", "gibibytes"],
            Self::Tib => &["t", "tib", "tebibyte", "tebibytes"],
            Self::Pib => &["p", "pib", "pebibyte", "pebibytes"],
            Self::Eib => &["e", "eib", "exbibyte", "exbibytes"],
            Self::Zib => &["z", "zib", "zebibyte", "zebibytes"],
            Self::Yib => &["y", "yib", "yobibyte", "yobibytes"],
            Self::Kb => &["kb", "kilobyte", "kilobytes"],
            Self::Mb => &["mb", "megabyte", "megabytes"],
            Self::Gb => &["gb", "gigabyte", "gigabytes"],
            Self::Tb => &["tb", "terabyte", "terabytes"],
            Self::Pb => &["pb", "petabyte", "petabytes"],
            Self::Eb => &["eb", "exabyte", "exabytes"],
            Self::Zb => &["zb", "zettabyte", "zettabytes"],
            Self::Yb => &["yb", "yottabyte", "yottabytes"],
            Self::Bits => &["bit", "bits"],
            Self::Kilobits => &["kbit", "kbits", "kilobit", "kilobits"],
            Self::Megabits => &["mbit", "mbits", "megabit", "megabits"],
            Self::Gigabits => &["gbit", "gbits", "gigabit", "gigabits"],
            Self::Terabits => &["tbit", "tbits", "terabit", "terabits"],
            Self::Petabits => &["pbit", "pbits", "petabit", "petabits"],
            Self::Exabits => &["ebit", "ebits", "exabit", "exabits"],
            Self::Zettabits => &["zbit", "zbits", "zettabit", "zettabits"],
            Self::Yottabits => &["ybit", "ybits", "yottabit", "yottabits"],
        }
    }

    /// Which family this unit belongs to.
    #[must_use]
    pub const fn family(self) -> UnitFamily {
        match self {
            Self::Bytes
            | Self::Kib
            | Self::Mib
            | Self::Gib
            | Self::Tib
            | Self::Pib
            | Self::Eib
            | Self::Zib
            | Self::Yib => UnitFamily::Binary,
            Self::Kb
            | Self::Mb
            | Self::Gb
            | Self::Tb
            | Self::Pb
            | Self::Eb
            | Self::Zb
            | Self::Yb => UnitFamily::Decimal,
            Self::Bits
            | Self::Kilobits
            | Self::Megabits
            | Self::Gigabits
            | Self::Terabits
            | Self::Petabits
            | Self::Exabits
            | Self::Zettabits
            | Self::Yottabits => UnitFamily::Bit,
        }
    }

    /// Resolve a unit label, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// # use storage_size::StorageUnit;
    /// assert_eq!(StorageUnit::from_alias("KiB"), Some(StorageUnit::Kib));
    /// assert_eq!(StorageUnit::from_alias(" megabytes "), Some(StorageUnit::Mb));
    /// assert_eq!(StorageUnit::from_alias("furlong"), None);
    /// ```
    #[must_use]
    pub fn from_alias(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();

        Self::ALL
            .into_iter()
            .find(|unit| unit.aliases().contains(&label.as_str()))
    }
}

impl fmt::Display for StorageUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for StorageUnit {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alias(s).ok_or_else(|| StorageError::UnknownUnit(s.trim().to_string()))
    }
}
