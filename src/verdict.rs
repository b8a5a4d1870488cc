//! verdict: pass/fail as a non-zero sign
//! Invariants:
//! - A verdict is always -1 (fail) or +1 (pass), never 0
//! - `and` is min, `or` is max

use core::fmt;

#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Fail = -1,
    Pass = 1,
}

impl Verdict {
    #[inline] pub fn is_pass(self) -> bool { matches!(self, Verdict::Pass) }
    #[inline] pub fn is_fail(self) -> bool { matches!(self, Verdict::Fail) }

    #[inline] pub fn not(self) -> Self { if self.is_pass() { Verdict::Fail } else { Verdict::Pass } }

    // (Pass, Pass) -> Pass; otherwise Fail
    #[inline] pub fn and(self, rhs: Verdict) -> Verdict {
        if self.is_fail() { Verdict::Fail } else { rhs }
    }
    // (Fail, Fail) -> Fail; otherwise Pass
    #[inline] pub fn or(self, rhs: Verdict) -> Verdict {
        if self.is_pass() { Verdict::Pass } else { rhs }
    }

    #[inline] pub fn to_i8(self) -> i8 { self as i8 }
    #[inline] pub fn from_i8(v: i8) -> Option<Verdict> {
        match v { 1 => Some(Verdict::Pass), -1 => Some(Verdict::Fail), _ => None }
    }

    #[inline] pub fn to_bool(self) -> bool { self.is_pass() }
    #[inline] pub fn from_bool(b: bool) -> Self { if b { Verdict::Pass } else { Verdict::Fail } }
}

impl Default for Verdict {
    /// The identity of `and`, so an empty reduction passes.
    fn default() -> Self {
        Verdict::Pass
    }
}

impl FromIterator<Verdict> for Verdict {
    fn from_iter<I: IntoIterator<Item = Verdict>>(iter: I) -> Self {
        iter.into_iter().fold(Verdict::Pass, Verdict::and)
    }
}

impl FromIterator<bool> for Verdict {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        iter.into_iter().map(Verdict::from_bool).collect()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_pass() { "PASS" } else { "FAIL" })
    }
}
