//! Numerus Core Domain
//!
//! Roman numerals as validated symbol sequences with purely symbolic
//! arithmetic: no numeral is ever converted to or from a machine integer.
//! This crate contains no I/O and is 100% unit testable.

mod error;
mod numeral;
mod symbol;

pub use error::{MalformedReason, NumeralError, NumeralResult};
pub use numeral::Numeral;
pub use symbol::Symbol;
