//! bitops: integer arithmetic from bitwise primitives
//! Invariants:
//! - Only AND, OR, XOR, NOT, shifts and comparisons touch the operands
//! - Width is fixed at 64 bits, two's complement; `>>` sign-extends
//! - Results match native wrapping arithmetic away from `i64::MIN`
//! Design choices:
//! - `abs` depends on `sub`, `sub` depends on `add`, `add` depends on `abs`.
//!   The cycle bottoms out because `abs` only ever subtracts 0 or -1.
//! - Sign handling is an explicit `negate` flag, never native negation

use core::fmt;

const SIGN_SHIFT: u32 = i64::BITS - 1;

/// Error type for the two undefined operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    /// Division or remainder with a zero divisor.
    DivideByZero,
    /// Zero raised to a negative power.
    ZeroToNegativePower,
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithError::DivideByZero => f.write_str("integer divide by zero"),
            ArithError::ZeroToNegativePower => {
                f.write_str("construction of zero to a negative power")
            }
        }
    }
}

impl std::error::Error for ArithError {}

/// Two's-complement absolute value. `abs(i64::MIN)` stays `i64::MIN`.
#[inline]
pub fn abs(a: i64) -> i64 {
    let mask = a >> SIGN_SHIFT;
    sub(a ^ mask, mask)
}

/// Carry loop addition, wrapping on overflow.
pub fn add(a: i64, b: i64) -> i64 {
    // a == -b, zero included only when a != b
    if abs(a) == abs(b) && a != b {
        return 0;
    }
    let (mut sum, mut carry) = (a ^ b, a & b);
    while carry != 0 {
        carry <<= 1;
        (sum, carry) = (sum ^ carry, sum & carry);
    }
    sum
}

/// Borrow loop subtraction.
pub fn sub(a: i64, b: i64) -> i64 {
    // The borrow loop stops on a negative borrow, so a non-negative minuend
    // with a negative subtrahend is computed as -(b - a).
    let negate = a >= 0 && b < 0;
    let (a, b) = if negate { (b, a) } else { (a, b) };

    let (mut diff, mut borrow) = (a ^ b, !a & b);
    while borrow > 0 {
        borrow <<= 1;
        (diff, borrow) = (diff ^ borrow, !diff & borrow);
    }

    if negate { flip_sign(diff) } else { diff }
}

/// `-a`, as `0 - a`.
#[inline]
pub fn negative(a: i64) -> i64 {
    sub(0, a)
}

#[inline]
pub fn increment(a: i64) -> i64 {
    add(a, 1)
}

#[inline]
pub fn decrement(a: i64) -> i64 {
    sub(a, 1)
}

/// Shift-and-add multiplication, wrapping on overflow.
pub fn mul(a: i64, b: i64) -> i64 {
    let (mut a, mut b, negate) = unsigned_operands(a, b);

    let mut product = 0;
    while b != 0 {
        if b & 1 == 1 {
            product = add(product, a);
        }
        a <<= 1;
        b >>= 1;
    }

    if negate { flip_sign(product) } else { product }
}

/// Truncating division (rounds toward zero).
///
/// Returns `Err(DivideByZero)` when `b == 0`.
pub fn div(a: i64, b: i64) -> Result<i64, ArithError> {
    if b == 0 {
        return Err(ArithError::DivideByZero);
    }
    Ok(div_nonzero(a, b))
}

/// Truncating remainder; the sign follows the dividend, like `%`.
///
/// Returns `Err(DivideByZero)` when `b == 0`.
pub fn rem(a: i64, b: i64) -> Result<i64, ArithError> {
    let quotient = div(a, b)?;
    Ok(sub(a, mul(quotient, b)))
}

/// Integer power by repeated multiplication.
///
/// Negative exponents truncate to 0 except for the bases 1 and -1.
/// Returns `Err(ZeroToNegativePower)` for `0` to a negative power.
pub fn pow(base: i64, exp: i64) -> Result<i64, ArithError> {
    if exp == 0 || base == 1 {
        return Ok(1);
    }
    let neg_one = negative(1);
    if base == neg_one {
        return Ok(if exp & 1 != 0 { neg_one } else { 1 });
    }
    if base == 0 && exp < 0 {
        return Err(ArithError::ZeroToNegativePower);
    }
    if exp < 0 {
        return Ok(0);
    }

    let mut result = 1;
    let mut remaining = exp;
    while remaining > 0 {
        result = mul(result, base);
        remaining = decrement(remaining);
    }
    Ok(result)
}

/// Binary GCD. Always non-negative; `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (abs_a, abs_b) = (abs(a), abs(b));
    if abs_a == abs_b {
        return abs_a;
    }
    if a == 0 {
        return abs_b;
    }
    if b == 0 {
        return abs_a;
    }
    if abs_a == 1 || abs_b == 1 {
        return 1;
    }

    let (a, b) = (abs_a, abs_b);
    match (a & 1 == 0, b & 1 == 0) {
        (true, true) => mul(2, gcd(halve(a), halve(b))),
        (true, false) => gcd(halve(a), b),
        (false, true) => gcd(a, halve(b)),
        (false, false) if b > a => gcd(halve(sub(b, a)), a),
        (false, false) => gcd(halve(sub(a, b)), b),
    }
}

/// `!x + 1`.
#[inline]
fn flip_sign(x: i64) -> i64 {
    add(!x, 1)
}

#[inline]
fn halve(x: i64) -> i64 {
    div_nonzero(x, 2)
}

/// Makes both operands non-negative and reports whether the signs differed.
fn unsigned_operands(a: i64, b: i64) -> (i64, i64, bool) {
    match (a < 0, b < 0) {
        (true, true) => (abs(a), abs(b), false),
        (false, true) => (a, abs(b), true),
        (true, false) => (abs(a), b, true),
        (false, false) => (a, b, false),
    }
}

/// Restoring long division. Caller guarantees `b != 0`.
fn div_nonzero(a: i64, b: i64) -> i64 {
    if a == 0 {
        return 0;
    }
    let (mut a, b, negate) = unsigned_operands(a, b);

    let mut width = 0;
    let mut rest = a;
    while rest > 0 {
        width = increment(width);
        rest >>= 1;
    }

    // Divisor aligned just above the dividend's top bit.
    let divisor = b << width;
    let mut quotient = 0;
    while width > 0 {
        a = sub(mul(2, a), divisor);
        if a >= 0 {
            quotient = (quotient | 1) << 1;
        } else {
            quotient <<= 1;
            a = add(a, divisor);
        }
        width = decrement(width);
    }
    quotient >>= 1;

    if negate { flip_sign(quotient) } else { quotient }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SMALL: i64 = 1 << 30;
    const DIVISION: i64 = 1 << 20;

    #[test]
    fn add_sub_mul_examples() {
        assert_eq!(add(3, 5), 8);
        assert_eq!(sub(3, 5), -2);
        assert_eq!(mul(-4, 6), -24);
        assert_eq!(add(-7, 7), 0);
        assert_eq!(add(0, 0), 0);
        assert_eq!(sub(0, 0), 0);
        assert_eq!(mul(-3, -3), 9);
        assert_eq!(mul(0, -9), 0);
    }

    #[test]
    fn abs_of_small_values() {
        for v in -20..20 {
            assert_eq!(abs(v), v.abs(), "abs({v})");
        }
    }

    #[test]
    fn negative_and_steps() {
        assert_eq!(negative(0), 0);
        assert_eq!(negative(5), -5);
        assert_eq!(negative(-5), 5);
        assert_eq!(increment(-1), 0);
        assert_eq!(increment(41), 42);
        assert_eq!(decrement(0), -1);
        assert_eq!(decrement(-9), -10);
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(div(-7, 2), Ok(-3));
        assert_eq!(rem(-7, 2), Ok(-1));
        assert_eq!(div(7, -3), Ok(-2));
        assert_eq!(rem(7, -3), Ok(1));
        assert_eq!(div(-9, -3), Ok(3));
        assert_eq!(div(0, -4), Ok(0));
        assert_eq!(div(3, 10), Ok(0));
        assert_eq!(rem(3, 10), Ok(3));
    }

    #[test]
    fn division_by_zero_fails() {
        for a in [-5, 0, 1, 1234] {
            assert_eq!(div(a, 0), Err(ArithError::DivideByZero));
            assert_eq!(rem(a, 0), Err(ArithError::DivideByZero));
        }
    }

    #[test]
    fn pow_cases() {
        assert_eq!(pow(-2, 3), Ok(-8));
        assert_eq!(pow(-1, 4), Ok(1));
        assert_eq!(pow(-1, -3), Ok(-1));
        assert_eq!(pow(1, -7), Ok(1));
        assert_eq!(pow(2, -3), Ok(0));
        assert_eq!(pow(0, 0), Ok(1));
        assert_eq!(pow(0, 3), Ok(0));
        assert_eq!(pow(3, 4), Ok(81));
        assert_eq!(pow(-10, 9), Ok(-1_000_000_000));
        assert_eq!(pow(5, 16), Ok(152_587_890_625));
    }

    #[test]
    fn zero_to_negative_power_fails() {
        assert_eq!(pow(0, -1), Err(ArithError::ZeroToNegativePower));
        assert_eq!(pow(0, -10), Err(ArithError::ZeroToNegativePower));
    }

    #[test]
    fn gcd_cases() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(7, 7), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(-8, -4), 4);
        assert_eq!(gcd(9, -1), 1);
        assert_eq!(gcd(-6, 0), 6);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn error_messages() {
        assert_eq!(ArithError::DivideByZero.to_string(), "integer divide by zero");
        assert_eq!(
            ArithError::ZeroToNegativePower.to_string(),
            "construction of zero to a negative power"
        );
    }

    proptest! {
        #[test]
        fn prop_add_sub_match_native(a in -SMALL..SMALL, b in -SMALL..SMALL) {
            prop_assert_eq!(add(a, b), a + b);
            prop_assert_eq!(sub(a, b), a - b);
        }

        #[test]
        fn prop_negative_matches_native(a in -SMALL..SMALL) {
            prop_assert_eq!(negative(a), -a);
            prop_assert_eq!(abs(a), a.abs());
        }

        #[test]
        fn prop_mul_matches_native(a in -SMALL..SMALL, b in -SMALL..SMALL) {
            prop_assert_eq!(mul(a, b), a * b);
        }

        #[test]
        fn prop_div_rem_match_native(a in -DIVISION..DIVISION, b in -DIVISION..DIVISION) {
            prop_assume!(b != 0);
            prop_assert_eq!(div(a, b), Ok(a / b));
            prop_assert_eq!(rem(a, b), Ok(a % b));
        }

        #[test]
        fn prop_gcd_matches_euclid(a in -DIVISION..DIVISION, b in -DIVISION..DIVISION) {
            prop_assert_eq!(gcd(a, b), num_integer::Integer::gcd(&a, &b));
        }
    }
}
