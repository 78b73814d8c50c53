//! The [`Storage`] value type.
//!
//! A `Storage` is an immutable, non-negative quantity paired with a
//! [`StorageUnit`]. Arithmetic keeps the unit when both operands share it and
//! falls back to bytes otherwise. Comparisons always go through the byte
//! total, so `1 KIB == 1024 BYTES`.

use std::{
    cmp::Ordering,
    fmt,
    iter::Sum,
    ops::{Add, Div, Mul, Rem, Sub},
    path::Path,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, StorageError},
    format::{self, optimal_unit},
    parser::parse_parts,
    sizer::{self, PathSizer},
    unit::StorageUnit,
    utils::size::path_size,
};

/// Absolute tolerance, in bytes, under which two totals are considered equal.
const ABSOLUTE_TOLERANCE: f64 = 1e-10;

/// Relative tolerance for comparing large byte totals.
const RELATIVE_TOLERANCE: f64 = 1e-12;

/// A quantity of digital storage.
///
/// # Examples
///
/// ```
/// # use storage_size::{Storage, StorageUnit};
/// let size = Storage::new(1.5, StorageUnit::Mb).unwrap();
/// assert_eq!(size.to_string(), "1.5 MB");
/// assert_eq!(size.convert_to_bytes(), 1_500_000.0);
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawStorage")]
pub struct Storage {
    value: f64,
    unit: StorageUnit,
}

/// Unvalidated mirror of [`Storage`] used when deserializing.
#[derive(Deserialize)]
struct RawStorage {
    value: f64,
    unit: StorageUnit,
}

impl TryFrom<RawStorage> for Storage {
    type Error = StorageError;

    fn try_from(raw: RawStorage) -> Result<Self> {
        Self::new(raw.value, raw.unit)
    }
}

macro_rules! convert_to_methods {
    ($($method:ident => $unit:ident),* $(,)?) => {
        $(
            #[doc = concat!("Convert to [`StorageUnit::", stringify!($unit), "`].")]
            #[must_use]
            pub fn $method(&self) -> Self {
                self.convert_to(StorageUnit::$unit)
            }
        )*
    };
}

impl Storage {
    /// Largest byte total a `Storage` can hold.
    ///
    /// The smallest unit is a bit (1/8 byte), so any value within this bound
    /// stays finite when converted to any unit.
    pub const MAX_BYTES: f64 = f64::MAX / 8.0;

    /// Create a storage value.
    ///
    /// # Errors
    ///
    /// Returns a value-kind error if `value` is negative, NaN or infinite, or
    /// if its byte total exceeds [`Storage::MAX_BYTES`].
    pub fn new(value: f64, unit: StorageUnit) -> Result<Self> {
        if value.is_nan() || value.is_infinite() {
            return Err(StorageError::NonFiniteValue(value));
        }
        if value < 0.0 {
            return Err(StorageError::NegativeValue(value));
        }
        if value * unit.multiplier() > Self::MAX_BYTES {
            return Err(StorageError::Overflow);
        }

        // Normalizes -0.0 so it never renders as "-0".
        Ok(Self {
            value: value + 0.0,
            unit,
        })
    }

    /// An empty size, in bytes.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            value: 0.0,
            unit: StorageUnit::Bytes,
        }
    }

    /// Create a storage value from a byte count.
    ///
    /// # Errors
    ///
    /// Returns a value-kind error if `bytes` is negative or not finite.
    pub fn from_bytes(bytes: f64) -> Result<Self> {
        Self::new(bytes, StorageUnit::Bytes)
    }

    /// Parse a string such as `"1.5 MB"`, defaulting to bytes when no unit is given.
    ///
    /// # Errors
    ///
    /// Returns a parse-kind error for empty, negative, malformed or
    /// unrecognized input. See [`crate::parse_parts`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use storage_size::{Storage, StorageUnit};
    /// let a = Storage::parse("1.5MB").unwrap();
    /// let b = Storage::parse("1,5 MB").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.unit(), StorageUnit::Mb);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_default(text, StorageUnit::Bytes)
    }

    /// Parse a string, using `default_unit` when it carries no unit label.
    ///
    /// # Errors
    ///
    /// Same as [`Storage::parse`].
    pub fn parse_with_default(text: &str, default_unit: StorageUnit) -> Result<Self> {
        let (value, unit) = parse_parts(text, default_unit)?;
        Self::new(value, unit)
    }

    /// Size of a file or directory on disk, in bytes.
    ///
    /// Directories are summed recursively over regular files; symlinks
    /// inside the tree are not followed.
    ///
    /// # Errors
    ///
    /// Returns a not-found, permission or I/O error for the first entry
    /// that cannot be read.
    pub fn get_size_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = path_size(path.as_ref())?;
        Ok(Self::from_byte_count(bytes))
    }

    /// The path sizer for the operating system this process runs on.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UnsupportedPlatform`] on operating systems
    /// without a sizer.
    pub fn get_platform_storage() -> Result<Box<dyn PathSizer>> {
        sizer::platform_sizer()
    }

    /// See [`format::set_decimal_precision`].
    pub fn set_decimal_precision(precision: usize) {
        format::set_decimal_precision(precision);
    }

    /// See [`format::get_decimal_precision`].
    #[must_use]
    pub fn get_decimal_precision() -> usize {
        format::get_decimal_precision()
    }

    #[allow(clippy::cast_precision_loss)]
    pub(crate) const fn from_byte_count(bytes: u64) -> Self {
        Self {
            value: bytes as f64,
            unit: StorageUnit::Bytes,
        }
    }

    /// The numeric value, expressed in [`Storage::unit`].
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The unit the value is expressed in.
    #[must_use]
    pub const fn unit(&self) -> StorageUnit {
        self.unit
    }

    /// Whether the byte total is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// The byte total.
    #[must_use]
    pub fn convert_to_bytes(&self) -> f64 {
        self.value * self.unit.multiplier()
    }

    /// The byte total as an integer, truncated and saturated to the `u64` range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_bytes_u64(&self) -> u64 {
        self.convert_to_bytes() as u64
    }

    /// Express the same byte total in `unit`.
    ///
    /// Never overflows: the byte total is bounded by [`Storage::MAX_BYTES`].
    #[must_use]
    pub fn convert_to(&self, unit: StorageUnit) -> Self {
        if unit == self.unit {
            return *self;
        }

        Self {
            value: self.convert_to_bytes() / unit.multiplier(),
            unit,
        }
    }

    convert_to_methods! {
        convert_to_kib => Kib,
        convert_to_mib => Mib,
        convert_to_gib => Gib,
        convert_to_tib => Tib,
        convert_to_pib => Pib,
        convert_to_eib => Eib,
        convert_to_zib => Zib,
        convert_to_yib => Yib,
        convert_to_kb => Kb,
        convert_to_mb => Mb,
        convert_to_gb => Gb,
        convert_to_tb => Tb,
        convert_to_pb => Pb,
        convert_to_eb => Eb,
        convert_to_zb => Zb,
        convert_to_yb => Yb,
        convert_to_bits => Bits,
        convert_to_kilobits => Kilobits,
        convert_to_megabits => Megabits,
        convert_to_gigabits => Gigabits,
        convert_to_terabits => Terabits,
        convert_to_petabits => Petabits,
        convert_to_exabits => Exabits,
        convert_to_zettabits => Zettabits,
        convert_to_yottabits => Yottabits,
    }

    /// Re-express the value in the most readable unit of the binary
    /// (`prefer_binary`) or decimal family.
    ///
    /// # Examples
    ///
    /// ```
    /// # use storage_size::{Storage, StorageUnit};
    /// let size = Storage::new(1536.0, StorageUnit::Bytes).unwrap();
    /// assert_eq!(size.auto_scale(true).to_string(), "1.5 KIB");
    /// ```
    #[must_use]
    pub fn auto_scale(&self, prefer_binary: bool) -> Self {
        let bytes = self.convert_to_bytes();
        if bytes == 0.0 {
            return Self::zero();
        }

        self.convert_to(optimal_unit(bytes, prefer_binary))
    }

    /// Sum of two sizes. Same-unit operands keep their unit; otherwise the result is in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Overflow`] if the sum exceeds [`Storage::MAX_BYTES`].
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        if self.unit == other.unit {
            Self::new(self.value + other.value, self.unit)
        } else {
            Self::from_bytes(self.convert_to_bytes() + other.convert_to_bytes())
        }
    }

    /// Difference of two sizes, following the same unit rule as [`Storage::checked_add`].
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NegativeResult`] if `other` is larger than `self`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let (value, unit) = if self.unit == other.unit {
            (self.value - other.value, self.unit)
        } else {
            (
                self.convert_to_bytes() - other.convert_to_bytes(),
                StorageUnit::Bytes,
            )
        };

        if value >= 0.0 {
            return Ok(Self { value, unit });
        }
        if self == other {
            return Ok(Self { value: 0.0, unit });
        }

        Err(StorageError::NegativeResult)
    }

    /// Scale the value by `factor`, keeping the unit.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidScalar`] for a negative or non-finite factor.
    pub fn checked_mul(&self, factor: f64) -> Result<Self> {
        let factor = validate_scalar(factor)?;
        Self::new(self.value * factor, self.unit)
    }

    /// Divide the value by `divisor`, keeping the unit.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DivisionByZero`] for a zero divisor and
    /// [`StorageError::InvalidScalar`] for a negative or non-finite one.
    pub fn checked_div(&self, divisor: f64) -> Result<Self> {
        let divisor = validate_divisor(divisor)?;
        Self::new(self.value / divisor, self.unit)
    }

    /// Floor of the value divided by `divisor`, keeping the unit.
    ///
    /// # Errors
    ///
    /// Same as [`Storage::checked_div`].
    pub fn floor_div(&self, divisor: f64) -> Result<Self> {
        let divisor = validate_divisor(divisor)?;
        Self::new((self.value / divisor).floor(), self.unit)
    }

    /// Remainder of the value divided by `divisor`, keeping the unit.
    ///
    /// # Errors
    ///
    /// Same as [`Storage::checked_div`].
    pub fn checked_rem(&self, divisor: f64) -> Result<Self> {
        let divisor = validate_divisor(divisor)?;
        Self::new(self.value % divisor, self.unit)
    }

    /// Ratio of the two byte totals.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DivisionByZero`] if `other` is empty.
    pub fn ratio(&self, other: &Self) -> Result<f64> {
        let divisor = other.convert_to_bytes();
        if divisor == 0.0 {
            return Err(StorageError::DivisionByZero);
        }

        Ok(self.convert_to_bytes() / divisor)
    }
}

fn validate_scalar(scalar: f64) -> Result<f64> {
    if scalar.is_finite() && scalar >= 0.0 {
        Ok(scalar)
    } else {
        Err(StorageError::InvalidScalar(scalar))
    }
}

fn validate_divisor(divisor: f64) -> Result<f64> {
    if divisor == 0.0 {
        return Err(StorageError::DivisionByZero);
    }

    validate_scalar(divisor)
}

#[allow(clippy::float_cmp)]
fn approx_eq(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }

    let diff = (a - b).abs();
    diff <= ABSOLUTE_TOLERANCE || diff <= RELATIVE_TOLERANCE * a.abs().max(b.abs())
}

impl Default for Storage {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.precision$} {}", self.value, self.unit.name()),
            None => f.write_str(&format::render(self.value, self.unit)),
        }
    }
}

impl FromStr for Storage {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq for Storage {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.convert_to_bytes(), other.convert_to_bytes())
    }
}

impl PartialOrd for Storage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }

        self.convert_to_bytes()
            .partial_cmp(&other.convert_to_bytes())
    }
}

impl Add for Storage {
    type Output = Result<Self>;

    fn add(self, rhs: Self) -> Result<Self> {
        self.checked_add(&rhs)
    }
}

impl Sub for Storage {
    type Output = Result<Self>;

    fn sub(self, rhs: Self) -> Result<Self> {
        self.checked_sub(&rhs)
    }
}

impl Div for Storage {
    type Output = Result<f64>;

    fn div(self, rhs: Self) -> Result<f64> {
        self.ratio(&rhs)
    }
}

/// Folds with the add rule from the first item; an empty sequence sums to zero bytes.
impl Sum<Storage> for Result<Storage> {
    fn sum<I: Iterator<Item = Storage>>(mut iter: I) -> Self {
        let Some(first) = iter.next() else {
            return Ok(Storage::zero());
        };

        iter.try_fold(first, |acc, item| acc.checked_add(&item))
    }
}

impl<'a> Sum<&'a Storage> for Result<Storage> {
    fn sum<I: Iterator<Item = &'a Storage>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

macro_rules! scalar_ops {
    ($($scalar:ty),*) => {
        $(
            impl Mul<$scalar> for Storage {
                type Output = Result<Self>;

                fn mul(self, rhs: $scalar) -> Result<Self> {
                    self.checked_mul(f64::from(rhs))
                }
            }

            impl Mul<Storage> for $scalar {
                type Output = Result<Storage>;

                fn mul(self, rhs: Storage) -> Result<Storage> {
                    rhs.checked_mul(f64::from(self))
                }
            }

            impl Div<$scalar> for Storage {
                type Output = Result<Self>;

                fn div(self, rhs: $scalar) -> Result<Self> {
                    self.checked_div(f64::from(rhs))
                }
            }

            impl Rem<$scalar> for Storage {
                type Output = Result<Self>;

                fn rem(self, rhs: $scalar) -> Result<Self> {
                    self.checked_rem(f64::from(rhs))
                }
            }
        )*
    };
}

scalar_ops!(f64, f32, u8, u16, u32, i8, i16, i32);

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn storage(value: f64, unit: StorageUnit) -> Storage {
        Storage::new(value, unit).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            approx_eq(actual, expected),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_new_rejects_negative_and_non_finite() {
        let err = Storage::new(-1.0, StorageUnit::Bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(err.to_string().contains("negative"));

        assert!(Storage::new(f64::NAN, StorageUnit::Kb).is_err());
        assert!(Storage::new(f64::INFINITY, StorageUnit::Kb).is_err());
    }

    #[test]
    fn test_new_normalizes_negative_zero() {
        let zero = storage(-0.0, StorageUnit::Mb);
        assert!(zero.value().is_sign_positive());
        assert_eq!(zero.to_string(), "0 MB");
    }

    #[test]
    fn test_byte_total_equivalence() {
        assert_eq!(storage(1024.0, StorageUnit::Bytes), storage(1.0, StorageUnit::Kib));
        assert_eq!(storage(1000.0, StorageUnit::Bytes), storage(1.0, StorageUnit::Kb));
        assert_eq!(storage(8.0, StorageUnit::Bits), storage(1.0, StorageUnit::Bytes));
        assert_ne!(storage(1.0, StorageUnit::Kib), storage(1.0, StorageUnit::Kb));
    }

    #[test]
    fn test_convert_to_bytes() {
        assert_eq!(storage(1.0, StorageUnit::Kib).convert_to_bytes(), 1024.0);
        assert_eq!(storage(1.5, StorageUnit::Mb).convert_to_bytes(), 1_500_000.0);
        assert_eq!(storage(16.0, StorageUnit::Bits).convert_to_bytes(), 2.0);
    }

    #[test]
    fn test_convert_round_trip_for_every_unit() {
        for unit in StorageUnit::ALL {
            for value in [0.5, 1.0, 3.75, 1024.0, 123_456.789] {
                let original = storage(value, unit);
                for target in StorageUnit::ALL {
                    let back = original.convert_to(target).convert_to(unit);
                    assert_eq!(back.unit(), unit);
                    assert_close(back.value(), value);
                }
                assert_eq!(original.convert_to(unit).value(), value);
            }
        }
    }

    #[test]
    fn test_convert_to_helpers() {
        let size = storage(1024.0, StorageUnit::Bytes);
        assert_eq!(size.convert_to_kib().value(), 1.0);
        assert_eq!(size.convert_to_kib().unit(), StorageUnit::Kib);
        assert_close(size.convert_to_mb().value(), 0.001_024);
        assert_close(size.convert_to_gb().value(), 1.024e-6);
        assert_eq!(size.convert_to_bits().value(), 8192.0);
        assert_eq!(size.convert_to_kilobits().value(), 8.192);
        assert_eq!(size.convert_to_yottabits().unit(), StorageUnit::Yottabits);
    }

    #[test]
    fn test_same_unit_addition_preserves_unit() {
        let sum = (storage(1.0, StorageUnit::Gb) + storage(2.0, StorageUnit::Gb)).unwrap();
        assert_eq!(sum.unit(), StorageUnit::Gb);
        assert_eq!(sum.value(), 3.0);
        assert_eq!(sum, storage(3.0, StorageUnit::Gb));
    }

    #[test]
    fn test_mixed_unit_addition_goes_to_bytes() {
        let sum = (storage(1.0, StorageUnit::Kib) + storage(512.0, StorageUnit::Bytes)).unwrap();
        assert_eq!(sum.unit(), StorageUnit::Bytes);
        assert_eq!(sum.convert_to_bytes(), 1536.0);
        assert_eq!(sum.to_string(), "1536 BYTES");
    }

    #[test]
    fn test_subtraction() {
        let diff = (storage(2.0, StorageUnit::Kib) - storage(512.0, StorageUnit::Bytes)).unwrap();
        assert_eq!(diff.unit(), StorageUnit::Bytes);
        assert_eq!(diff.value(), 1536.0);

        let same = (storage(5.0, StorageUnit::Mb) - storage(2.0, StorageUnit::Mb)).unwrap();
        assert_eq!(same.unit(), StorageUnit::Mb);
        assert_eq!(same.value(), 3.0);
    }

    #[test]
    fn test_subtraction_to_exactly_zero() {
        let diff = (storage(1.0, StorageUnit::Kib) - storage(1024.0, StorageUnit::Bytes)).unwrap();
        assert!(diff.is_zero());
    }

    #[test]
    fn test_subtraction_rejects_negative_result() {
        let err = (storage(1.0, StorageUnit::Kib) - storage(2.0, StorageUnit::Kib)).unwrap_err();
        assert!(matches!(err, StorageError::NegativeResult));
        assert_eq!(err.kind(), ErrorKind::Value);

        assert!((storage(1.0, StorageUnit::Kb) - storage(1.0, StorageUnit::Kib)).is_err());
    }

    #[test]
    fn test_multiplication() {
        let doubled = (storage(1.5, StorageUnit::Gib) * 2_i32).unwrap();
        assert_eq!(doubled.unit(), StorageUnit::Gib);
        assert_eq!(doubled.value(), 3.0);

        let symmetric = (2_i32 * storage(1.5, StorageUnit::Gib)).unwrap();
        assert_eq!(doubled, symmetric);

        let by_float = (storage(10.0, StorageUnit::Mb) * 0.5_f64).unwrap();
        assert_eq!(by_float.value(), 5.0);

        let by_zero = (storage(10.0, StorageUnit::Mb) * 0_i32).unwrap();
        assert!(by_zero.is_zero());
    }

    #[test]
    fn test_multiplication_rejects_bad_scalars() {
        let err = (storage(1.0, StorageUnit::Mb) * -2_i32).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!((storage(1.0, StorageUnit::Mb) * f64::NAN).is_err());
        assert!((-1.0_f64 * storage(1.0, StorageUnit::Mb)).is_err());
    }

    #[test]
    fn test_division_by_scalar() {
        let half = (storage(10.0, StorageUnit::Mb) / 4_i32).unwrap();
        assert_eq!(half.unit(), StorageUnit::Mb);
        assert_eq!(half.value(), 2.5);

        let err = (storage(10.0, StorageUnit::Mb) / 0_i32).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ZeroDivision);

        assert_eq!(
            (storage(10.0, StorageUnit::Mb) / -2.0_f64).unwrap_err().kind(),
            ErrorKind::Value
        );
    }

    #[test]
    fn test_division_by_storage() {
        let ratio = (storage(10.0, StorageUnit::Mb) / storage(5.0, StorageUnit::Mb)).unwrap();
        assert_eq!(ratio, 2.0);

        let cross = (storage(1.0, StorageUnit::Kib) / storage(512.0, StorageUnit::Bytes)).unwrap();
        assert_eq!(cross, 2.0);

        let err = (storage(1.0, StorageUnit::Mb) / Storage::zero()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ZeroDivision);
    }

    #[test]
    fn test_floor_div_and_remainder() {
        let size = storage(5.0, StorageUnit::Kib);

        let floored = size.floor_div(2.0).unwrap();
        assert_eq!(floored.value(), 2.0);
        assert_eq!(floored.unit(), StorageUnit::Kib);

        let remainder = (size % 2_i32).unwrap();
        assert_eq!(remainder.value(), 1.0);
        assert_eq!(remainder.unit(), StorageUnit::Kib);

        assert_eq!(size.floor_div(0.0).unwrap_err().kind(), ErrorKind::ZeroDivision);
        assert_eq!((size % 0_i32).unwrap_err().kind(), ErrorKind::ZeroDivision);
    }

    #[test]
    fn test_comparisons_cross_unit() {
        let small = storage(512.0, StorageUnit::Bytes);
        let kib = storage(1.0, StorageUnit::Kib);
        let two_kib = storage(2.0, StorageUnit::Kib);

        assert!(small < kib);
        assert!(kib <= storage(1024.0, StorageUnit::Bytes));
        assert!(two_kib > storage(1024.0, StorageUnit::Bytes));
        assert!(two_kib >= kib);
        assert!(storage(1.0, StorageUnit::Gb) < storage(1.0, StorageUnit::Gib));
        assert!(storage(1.0, StorageUnit::Gigabits) < storage(1.0, StorageUnit::Gb));
    }

    #[test]
    fn test_equality_tolerates_float_noise() {
        let a = (storage(0.1, StorageUnit::Mb) + storage(0.2, StorageUnit::Mb))
            .unwrap()
            .convert_to_bytes();
        assert_eq!(
            Storage::from_bytes(a).unwrap(),
            storage(300_000.0, StorageUnit::Bytes)
        );
        assert_eq!(
            storage(0.1, StorageUnit::Mb).partial_cmp(&storage(100_000.0, StorageUnit::Bytes)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_auto_scale_binary() {
        let scaled = storage(1536.0, StorageUnit::Bytes).auto_scale(true);
        assert_eq!(scaled.unit(), StorageUnit::Kib);
        assert_eq!(scaled.value(), 1.5);

        let gib = storage(3.0 * 1_073_741_824.0, StorageUnit::Bytes).auto_scale(true);
        assert_eq!(gib.unit(), StorageUnit::Gib);
        assert_eq!(gib.value(), 3.0);
    }

    #[test]
    fn test_auto_scale_decimal() {
        let scaled = storage(1_536_000_000.0, StorageUnit::Bytes).auto_scale(false);
        assert_eq!(scaled.unit(), StorageUnit::Gb);
        assert_eq!(scaled.value(), 1.536);
    }

    #[test]
    fn test_auto_scale_small_and_zero() {
        let small = storage(100.0, StorageUnit::Bits).auto_scale(true);
        assert_eq!(small.unit(), StorageUnit::Bytes);
        assert_eq!(small.value(), 12.5);

        let zero = storage(0.0, StorageUnit::Gb).auto_scale(false);
        assert_eq!(zero.unit(), StorageUnit::Bytes);
        assert!(zero.is_zero());
    }

    #[test]
    fn test_auto_scale_from_other_units() {
        let scaled = storage(2048.0, StorageUnit::Mib).auto_scale(true);
        assert_eq!(scaled.unit(), StorageUnit::Gib);
        assert_eq!(scaled.value(), 2.0);
    }

    #[test]
    fn test_display_default_precision() {
        assert_eq!(storage(1.5, StorageUnit::Mb).to_string(), "1.5 MB");
        assert_eq!(storage(1024.0, StorageUnit::Bytes).to_string(), "1024 BYTES");
        assert_eq!(
            storage(9.872_019_291e-5, StorageUnit::Gib).to_string(),
            "0.00009872019291 GIB"
        );
    }

    #[test]
    fn test_display_explicit_precision() {
        assert_eq!(format!("{:.2}", storage(1234.5, StorageUnit::Bytes)), "1234.50 BYTES");
        assert_eq!(format!("{:.0}", storage(1.25, StorageUnit::Kib)), "1 KIB");
    }

    #[test]
    fn test_parse_equivalence() {
        let a = Storage::parse("1.5 MB").unwrap();
        let b = Storage::parse("1.5MB").unwrap();
        let c = Storage::parse("1,5 MB").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c.unit(), StorageUnit::Mb);
    }

    #[test]
    fn test_parse_default_and_from_str() {
        assert_eq!(Storage::parse("1024").unwrap(), storage(1024.0, StorageUnit::Bytes));
        let parsed: Storage = "2 GiB".parse().unwrap();
        assert_eq!(parsed.unit(), StorageUnit::Gib);

        let with_default = Storage::parse_with_default("3", StorageUnit::Tb).unwrap();
        assert_eq!(with_default.unit(), StorageUnit::Tb);
        assert_eq!(with_default.value(), 3.0);
    }

    #[test]
    fn test_parse_negative_is_rejected() {
        assert_eq!(Storage::parse("-1 MB").unwrap_err().kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_sum() {
        let total = [
            storage(1.0, StorageUnit::Gb),
            storage(2.0, StorageUnit::Gb),
            storage(3.0, StorageUnit::Gb),
        ]
        .into_iter()
        .sum::<Result<Storage>>()
        .unwrap();
        assert_eq!(total.unit(), StorageUnit::Gb);
        assert_eq!(total.value(), 6.0);

        let mixed = [storage(1.0, StorageUnit::Kib), storage(1.0, StorageUnit::Kb)]
            .iter()
            .sum::<Result<Storage>>()
            .unwrap();
        assert_eq!(mixed.unit(), StorageUnit::Bytes);
        assert_eq!(mixed.value(), 2024.0);

        let empty = std::iter::empty::<Storage>().sum::<Result<Storage>>().unwrap();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_sum_does_not_depend_on_zero_position() {
        let zero_first = [storage(0.0, StorageUnit::Kb), storage(1.0, StorageUnit::Mb)]
            .iter()
            .sum::<Result<Storage>>()
            .unwrap();
        let zero_last = [storage(1.0, StorageUnit::Mb), storage(0.0, StorageUnit::Kb)]
            .iter()
            .sum::<Result<Storage>>()
            .unwrap();

        assert_eq!(zero_first.unit(), StorageUnit::Bytes);
        assert_eq!(zero_last.unit(), StorageUnit::Bytes);
        assert_eq!(zero_first.to_string(), zero_last.to_string());
        assert_eq!(zero_first, storage(1.0, StorageUnit::Mb));
    }

    #[test]
    fn test_sum_reports_overflow() {
        let huge = storage(1e307, StorageUnit::Bytes);
        let result = [huge, huge, huge].iter().sum::<Result<Storage>>();

        assert_eq!(result.unwrap_err().kind(), ErrorKind::Value);
    }

    #[test]
    fn test_new_rejects_byte_total_overflow() {
        let err = Storage::new(1e300, StorageUnit::Yb).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);

        let err = Storage::new(f64::MAX, StorageUnit::Bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);

        assert!(Storage::new(Storage::MAX_BYTES, StorageUnit::Bytes).is_ok());
    }

    #[test]
    fn test_addition_overflow_is_an_error() {
        assert_eq!(
            Storage::new(1e308, StorageUnit::Gb).unwrap_err().kind(),
            ErrorKind::Value
        );

        let gb = storage(1.5e298, StorageUnit::Gb);
        let err = (gb + gb).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);

        let bytes = storage(1.5e307, StorageUnit::Bytes);
        let err = (bytes + storage(1.5e298, StorageUnit::Gib)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);

        let big = storage(1e300, StorageUnit::Bytes);
        assert!((big + big).is_ok());
    }

    #[test]
    fn test_largest_value_stays_finite_in_every_unit() {
        let largest = storage(Storage::MAX_BYTES, StorageUnit::Bytes);

        assert_eq!(largest, largest);
        assert!(largest <= largest);
        for unit in StorageUnit::ALL {
            let converted = largest.convert_to(unit);
            assert!(converted.value().is_finite(), "{unit}");
            assert!(converted.convert_to_bytes().is_finite(), "{unit}");
        }

        let scaled = largest.auto_scale(true);
        assert_eq!(scaled.unit(), StorageUnit::Yib);
        assert!(scaled.value().is_finite());
        assert!(!scaled.to_string().contains("inf"));
    }

    #[test]
    fn test_as_bytes_u64() {
        assert_eq!(storage(1.5, StorageUnit::Kib).as_bytes_u64(), 1536);
        assert_eq!(storage(1.0, StorageUnit::Yb).as_bytes_u64(), u64::MAX);
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let json = serde_json::to_string(&storage(1.5, StorageUnit::Mib)).unwrap();
        assert_eq!(json, r#"{"value":1.5,"unit":"MIB"}"#);

        let back: Storage = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unit(), StorageUnit::Mib);

        assert!(serde_json::from_str::<Storage>(r#"{"value":-1.0,"unit":"KB"}"#).is_err());
    }

    #[test]
    fn test_get_size_from_path_missing() {
        let err = Storage::get_size_from_path("/definitely/not/here/storage-size").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
