//! Integer arithmetic rebuilt from AND, OR, XOR, NOT and shifts.
//!
//! - `bitops`: `add`, `sub`, `negative`, `mul`, `div`, `rem`, `pow`, `gcd` on `i64`
//! - `bitint`: `BitInt`, an `i64` newtype whose operators use `bitops`
//! - `bitfixed`: `BitFixed`, a Q15.16 fixed-point number on top of `BitInt`
//! - `verdict`: `Verdict`, the pass/fail sign the self-check reduces with
//! - `harness`: `SelfCheck`, the exhaustive comparison against native arithmetic

pub mod bitfixed;
pub mod bitint;
pub mod bitops;
pub mod harness;
pub mod verdict;

pub use bitfixed::{BitFixed, FixedError};
pub use bitint::BitInt;
pub use bitops::ArithError;
pub use harness::{Operation, OperationReport, Report, SelfCheck};
pub use verdict::Verdict;
