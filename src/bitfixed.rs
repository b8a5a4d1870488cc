//! bitfixed: synthetic signed fixed-point number (Q15.16)
//! Invariants:
//! - Raw word holds value * 2^16 and |raw| < 2^31
//! - Arithmetic on the raw word goes through `BitInt`/`bitops`
//! API:
//! - BitFixed::new(v) -> Option<Self>, from_int, from_raw
//! - raw(), to_f64(), trunc(), checked_add/sub/mul/div, neg(), abs(), shr(), checked_shl()
//! - Display prints the exact binary fraction with 16 decimal digits

use core::fmt;

use crate::bitint::BitInt;
use crate::bitops;

pub const FRACTION_BITS: u32 = 16;

const FRACTION_MASK: i64 = 0xFFFF;
const RAW_LIMIT: i64 = 1 << 31;
const INT_LIMIT: i64 = RAW_LIMIT >> FRACTION_BITS;
const SCALE: f64 = (1u64 << FRACTION_BITS) as f64;
// 10^16 / 2^16: turns the fraction bits into 16 decimal digits.
const DECIMAL_SCALE: i64 = 152_587_890_625;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedError {
    DivideByZero, // divisor is 0.0
    OutOfRange,   // |result| >= 32768
}

impl fmt::Display for FixedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixedError::DivideByZero => f.write_str("fixed-point divide by zero"),
            FixedError::OutOfRange => f.write_str("fixed-point value out of range"),
        }
    }
}

impl std::error::Error for FixedError {}

#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitFixed(BitInt);

impl BitFixed {
    pub const ZERO: BitFixed = BitFixed(BitInt::ZERO);
    pub const ONE: BitFixed = BitFixed(BitInt::new(1 << FRACTION_BITS));

    /// Create from f64, truncating toward zero to a multiple of 2^-16.
    /// Rejects NaN, infinities and |v| >= 32768.
    #[inline]
    pub fn new(v: f64) -> Option<Self> {
        if !v.is_finite() {
            return None;
        }
        Self::from_raw((v * SCALE) as i64)
    }

    /// Create from a whole number; None if |v| >= 32768.
    #[inline]
    pub fn from_int(v: i64) -> Option<Self> {
        if !(0..INT_LIMIT).contains(&bitops::abs(v)) {
            return None;
        }
        Some(BitFixed(BitInt::new(v).shl(FRACTION_BITS)))
    }

    /// Create from a raw Q15.16 word.
    #[inline]
    pub fn from_raw(raw: i64) -> Option<Self> {
        Self::checked(BitInt::new(raw)).ok()
    }

    #[inline]
    pub fn raw(self) -> i64 {
        self.0.get()
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.raw() as f64 / SCALE
    }

    /// Integer part, rounded toward zero.
    pub fn trunc(self) -> i64 {
        let whole = self.0.abs().shr(FRACTION_BITS);
        if self.is_negative() { (-whole).get() } else { whole.get() }
    }

    #[inline]
    pub fn checked_add(self, rhs: BitFixed) -> Result<BitFixed, FixedError> {
        Self::checked(self.0 + rhs.0)
    }

    #[inline]
    pub fn checked_sub(self, rhs: BitFixed) -> Result<BitFixed, FixedError> {
        Self::checked(self.0 - rhs.0)
    }

    /// Product of the raw words, rescaled with an arithmetic shift (rounds toward -inf).
    #[inline]
    pub fn checked_mul(self, rhs: BitFixed) -> Result<BitFixed, FixedError> {
        // Both raw words are below 2^31, so the raw product fits in 62 bits.
        Self::checked((self.0 * rhs.0).shr(FRACTION_BITS))
    }

    /// Quotient truncated toward zero.
    pub fn checked_div(self, rhs: BitFixed) -> Result<BitFixed, FixedError> {
        if rhs.0 == BitInt::ZERO {
            return Err(FixedError::DivideByZero);
        }
        let negate = self.is_negative() != rhs.is_negative();
        let dividend = self.0.abs().shl(FRACTION_BITS).get();
        let quotient = long_divide(dividend, rhs.0.abs().get());
        if quotient >= RAW_LIMIT {
            return Err(FixedError::OutOfRange);
        }
        let quotient = BitInt::new(quotient);
        Ok(BitFixed(if negate { -quotient } else { quotient }))
    }

    /// Always in range: the raw bound is symmetric.
    #[inline]
    pub fn neg(self) -> BitFixed {
        BitFixed(-self.0)
    }

    #[inline]
    pub fn abs(self) -> BitFixed {
        BitFixed(self.0.abs())
    }

    /// Arithmetic shift of the raw word; halves the value `bits` times.
    #[inline]
    pub fn shr(self, bits: u32) -> BitFixed {
        BitFixed(self.0.shr(bits.min(i64::BITS - 1)))
    }

    /// Doubles the value `bits` times.
    pub fn checked_shl(self, bits: u32) -> Result<BitFixed, FixedError> {
        if self.0 == BitInt::ZERO {
            return Ok(self);
        }
        if bits >= 32 {
            return Err(FixedError::OutOfRange);
        }
        Self::checked(self.0.shl(bits))
    }

    fn checked(raw: BitInt) -> Result<BitFixed, FixedError> {
        // abs(i64::MIN) stays negative and is rejected here too.
        if (0..RAW_LIMIT).contains(&raw.abs().get()) {
            Ok(BitFixed(raw))
        } else {
            Err(FixedError::OutOfRange)
        }
    }
}

/// Shift-in restoring division of non-negative words. The partial
/// remainder stays below `2 * divisor`, so every subtraction is small.
fn long_divide(dividend: i64, divisor: i64) -> i64 {
    let mut bits = 0;
    let mut rest = dividend;
    while rest > 0 {
        bits = bitops::increment(bits);
        rest >>= 1;
    }

    let (mut quotient, mut remainder) = (0, 0);
    while bits > 0 {
        bits = bitops::decrement(bits);
        remainder = (remainder << 1) | ((dividend >> bits) & 1);
        quotient <<= 1;
        if remainder >= divisor {
            remainder = bitops::sub(remainder, divisor);
            quotient |= 1;
        }
    }
    quotient
}

/* ----- Trait impls ----- */

impl fmt::Debug for BitFixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BitFixed").field(&self.to_f64()).finish()
    }
}

impl fmt::Display for BitFixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.abs().get();
        let whole = magnitude >> FRACTION_BITS;
        let digits = bitops::mul(magnitude & FRACTION_MASK, DECIMAL_SCALE);
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{sign}{whole}.{digits:016}")
    }
}

impl TryFrom<f64> for BitFixed {
    type Error = FixedError;
    #[inline]
    fn try_from(v: f64) -> Result<Self, Self::Error> {
        BitFixed::new(v).ok_or(FixedError::OutOfRange)
    }
}

impl From<BitFixed> for f64 {
    #[inline]
    fn from(v: BitFixed) -> f64 {
        v.to_f64()
    }
}
