//! bitint: 64-bit signed integer whose arithmetic never uses native operators
//! Invariants:
//! - Every operator routes through `bitops`
//! - Total operations are std operator impls; partial ones return Result
//! Design choices:
//! - Plain `i64` inside, `Copy`, no niche

use core::fmt;
use core::ops::{Add, Neg, Sub, Mul};

use crate::bitops::{self, ArithError};

#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitInt(i64);

impl BitInt {
    pub const ZERO: BitInt = BitInt(0);
    pub const ONE: BitInt = BitInt(1);

    #[inline]
    pub const fn new(v: i64) -> Self {
        BitInt(v)
    }

    /// Get the inner i64.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value. `i64::MIN` maps to itself.
    #[inline]
    pub fn abs(self) -> BitInt {
        BitInt(bitops::abs(self.0))
    }

    /// Truncating division. Returns Err(DivideByZero) for a zero divisor.
    #[inline]
    pub fn checked_div(self, rhs: BitInt) -> Result<BitInt, ArithError> {
        bitops::div(self.0, rhs.0).map(BitInt)
    }

    /// Remainder with the sign of `self`. Returns Err(DivideByZero) for a zero divisor.
    #[inline]
    pub fn checked_rem(self, rhs: BitInt) -> Result<BitInt, ArithError> {
        bitops::rem(self.0, rhs.0).map(BitInt)
    }

    /// Integer power. Returns Err(ZeroToNegativePower) for 0 to a negative exponent.
    #[inline]
    pub fn checked_pow(self, exp: BitInt) -> Result<BitInt, ArithError> {
        bitops::pow(self.0, exp.0).map(BitInt)
    }

    #[inline]
    pub fn gcd(self, rhs: BitInt) -> BitInt {
        BitInt(bitops::gcd(self.0, rhs.0))
    }

    /// Arithmetic (sign-extending) right shift.
    #[inline]
    pub fn shr(self, bits: u32) -> BitInt {
        BitInt(self.0 >> bits)
    }

    #[inline]
    pub fn shl(self, bits: u32) -> BitInt {
        BitInt(self.0 << bits)
    }
}

/* ----- Operators ----- */

impl Add for BitInt {
    type Output = BitInt;
    #[inline]
    fn add(self, rhs: BitInt) -> BitInt {
        BitInt(bitops::add(self.0, rhs.0))
    }
}

impl Sub for BitInt {
    type Output = BitInt;
    #[inline]
    fn sub(self, rhs: BitInt) -> BitInt {
        BitInt(bitops::sub(self.0, rhs.0))
    }
}

impl Mul for BitInt {
    type Output = BitInt;
    #[inline]
    fn mul(self, rhs: BitInt) -> BitInt {
        BitInt(bitops::mul(self.0, rhs.0))
    }
}

impl Neg for BitInt {
    type Output = BitInt;
    #[inline]
    fn neg(self) -> BitInt {
        BitInt(bitops::negative(self.0))
    }
}

/* ----- Formatting and conversions ----- */

impl fmt::Debug for BitInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BitInt").field(&self.0).finish()
    }
}

impl fmt::Display for BitInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BitInt {
    #[inline]
    fn from(v: i64) -> Self {
        BitInt(v)
    }
}

impl From<BitInt> for i64 {
    #[inline]
    fn from(v: BitInt) -> i64 {
        v.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(v: i64) -> BitInt {
        BitInt::new(v)
    }

    #[test]
    fn operators_route_through_bitops() {
        assert_eq!(b(3) + b(5), b(8));
        assert_eq!(b(3) - b(5), b(-2));
        assert_eq!(b(-4) * b(6), b(-24));
        assert_eq!(-b(9), b(-9));
        assert_eq!(-BitInt::ZERO, BitInt::ZERO);
    }

    #[test]
    fn partial_operations() {
        assert_eq!(b(-7).checked_div(b(2)), Ok(b(-3)));
        assert_eq!(b(-7).checked_rem(b(2)), Ok(b(-1)));
        assert_eq!(b(1).checked_div(BitInt::ZERO), Err(ArithError::DivideByZero));
        assert_eq!(b(2).checked_pow(b(10)), Ok(b(1024)));
        assert_eq!(BitInt::ZERO.checked_pow(b(-2)), Err(ArithError::ZeroToNegativePower));
        assert_eq!(b(12).gcd(b(-18)), b(6));
    }

    #[test]
    fn shifts_and_sign() {
        assert_eq!(b(-8).shr(1), b(-4));
        assert_eq!(b(-1).shr(10), b(-1));
        assert_eq!(b(3).shl(4), b(48));
        assert!(b(-1).is_negative());
        assert!(!BitInt::ZERO.is_negative());
        assert_eq!(b(-5).abs(), b(5));
    }

    #[test]
    fn formatting() {
        assert_eq!(format!("{}", b(-42)), "-42");
        assert_eq!(format!("{:?}", b(7)), "BitInt(7)");
        assert_eq!(i64::from(BitInt::from(11)), 11);
    }
}
