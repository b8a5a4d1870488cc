//! Exhaustive self-check of `bitops` against native arithmetic.
//!
//! Every operation is evaluated over `[low, high)` (pairs for the binary
//! operations, single values for `negative`) and compared with the native
//! operator. Pairs the operations reject by definition are skipped:
//! a zero divisor for `div`/`rem`, and zero to a negative power for `pow`.

use core::fmt;

use log::{debug, trace, warn};
use num_integer::Integer;

use crate::bitops::{self, ArithError};
use crate::verdict::Verdict;

pub const DEFAULT_LOW: i64 = -10;
pub const DEFAULT_HIGH: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Negative,
    Mul,
    Div,
    Mod,
    Pow,
    Gcd,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Sub,
        Operation::Negative,
        Operation::Mul,
        Operation::Div,
        Operation::Mod,
        Operation::Pow,
        Operation::Gcd,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Negative => "negative",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Mod => "mod",
            Operation::Pow => "pow",
            Operation::Gcd => "gcd",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one operation over the whole range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationReport {
    pub operation: Operation,
    pub verdict: Verdict,
    pub checked: usize,
    pub mismatches: usize,
}

impl OperationReport {
    fn new(operation: Operation) -> Self {
        Self { operation, verdict: Verdict::Pass, checked: 0, mismatches: 0 }
    }

    fn record(&mut self, inputs: &[i64], expected: i64, actual: i64) {
        let verdict = Verdict::from_bool(expected == actual);
        if verdict.is_fail() {
            warn!("{} mismatch for {inputs:?}: expected {expected}, got {actual}", self.operation);
            self.mismatches += 1;
        }
        self.verdict = self.verdict.and(verdict);
        self.checked += 1;
    }
}

/// Per-operation results in `Operation::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    operations: Vec<OperationReport>,
}

impl Report {
    pub fn operations(&self) -> &[OperationReport] {
        &self.operations
    }

    pub fn get(&self, operation: Operation) -> Option<&OperationReport> {
        self.operations.iter().find(|r| r.operation == operation)
    }

    pub fn verdict(&self) -> Verdict {
        self.operations.iter().map(|r| r.verdict).collect()
    }

    pub fn passed(&self) -> bool {
        self.verdict().to_bool()
    }

    pub fn summary_line(&self) -> String {
        format!("All tests passed successfully: {}", self.passed())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfCheck {
    low: i64,
    high: i64,
}

impl Default for SelfCheck {
    fn default() -> Self {
        Self::new(DEFAULT_LOW, DEFAULT_HIGH)
    }
}

impl SelfCheck {
    /// Checks every value in `low..high`.
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    pub fn range(&self) -> core::ops::Range<i64> {
        self.low..self.high
    }

    /// Runs every comparison. Fails only if an excluded pair reaches
    /// `div`, `rem` or `pow`.
    pub fn run(&self) -> Result<Report, ArithError> {
        debug!("checking bitwise arithmetic over [{}, {})", self.low, self.high);

        let mut reports = Operation::ALL.map(OperationReport::new);
        let [add, sub, neg, mul, div, rem, pow, gcd] = &mut reports;

        for i in self.range() {
            neg.record(&[i], i.wrapping_neg(), bitops::negative(i));

            for j in self.range() {
                let pair = &[i, j];
                add.record(pair, i.wrapping_add(j), bitops::add(i, j));
                sub.record(pair, i.wrapping_sub(j), bitops::sub(i, j));
                mul.record(pair, i.wrapping_mul(j), bitops::mul(i, j));

                if i == 0 && j < 0 {
                    trace!("pow skips ({i}, {j})");
                } else {
                    pow.record(pair, native_pow(i, j), bitops::pow(i, j)?);
                }

                if j == 0 {
                    trace!("div and mod skip ({i}, {j})");
                } else {
                    div.record(pair, i.wrapping_div(j), bitops::div(i, j)?);
                    rem.record(pair, i.wrapping_rem(j), bitops::rem(i, j)?);
                }

                gcd.record(pair, i.gcd(&j), bitops::gcd(i, j));
            }
        }

        for report in &reports {
            debug!(
                "{}: {} checked, {} mismatches, {}",
                report.operation, report.checked, report.mismatches, report.verdict
            );
        }
        Ok(Report { operations: reports.to_vec() })
    }
}

/// Power through floating point, truncated back to an integer.
/// Negative exponents land on 0 except for the bases 1 and -1.
fn native_pow(base: i64, exp: i64) -> i64 {
    let exp = exp.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    (base as f64).powi(exp) as i64
}
