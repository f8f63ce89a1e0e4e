//! Saturating 32-bit integer values.
//!
//! Every value the calculator stores or produces lives in
//! `[i32::MIN, i32::MAX]`. Arithmetic that would leave that range clamps to
//! the nearer bound; nothing wraps and nothing stays widened past the
//! operation that needed the headroom.

use std::fmt;

/// A 32-bit signed integer with saturating conversion and arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SatInt(i32);

impl SatInt {
    /// Smallest representable value.
    pub const MIN: SatInt = SatInt(i32::MIN);
    /// Largest representable value.
    pub const MAX: SatInt = SatInt(i32::MAX);

    /// Wrap an `i32` (already in range, no clamping needed).
    pub const fn new(v: i32) -> Self {
        SatInt(v)
    }

    /// Clamp a wide intermediate result into range.
    pub fn from_wide(v: i128) -> Self {
        if v > i32::MAX as i128 {
            SatInt::MAX
        } else if v < i32::MIN as i128 {
            SatInt::MIN
        } else {
            SatInt(v as i32)
        }
    }

    /// The underlying integer.
    pub const fn get(self) -> i32 {
        self.0
    }

    pub fn saturating_add(self, rhs: SatInt) -> SatInt {
        Self::from_wide(self.0 as i128 + rhs.0 as i128)
    }

    pub fn saturating_sub(self, rhs: SatInt) -> SatInt {
        Self::from_wide(self.0 as i128 - rhs.0 as i128)
    }

    pub fn saturating_mul(self, rhs: SatInt) -> SatInt {
        Self::from_wide(self.0 as i128 * rhs.0 as i128)
    }

    /// Truncating division. The divisor must be nonzero; the machine screens
    /// for zero before calling.
    pub fn saturating_div(self, rhs: SatInt) -> SatInt {
        Self::from_wide(self.0 as i128 / rhs.0 as i128)
    }

    /// Remainder, sign following the dividend. The divisor must be nonzero.
    pub fn saturating_rem(self, rhs: SatInt) -> SatInt {
        Self::from_wide(self.0 as i128 % rhs.0 as i128)
    }

    /// `self` raised to `exp`. The exponent must be nonnegative; the machine
    /// reports negative exponents before calling.
    pub fn saturating_pow(self, exp: SatInt) -> SatInt {
        SatInt(self.0.saturating_pow(exp.0 as u32))
    }
}

impl fmt::Display for SatInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
