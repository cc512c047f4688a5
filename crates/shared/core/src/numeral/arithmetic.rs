//! Symbolic addition, subtraction and per-tier comparison

use log::trace;
use std::cmp::Ordering;
use std::ops::{Add, Sub};

use super::Numeral;
use crate::error::{NumeralError, NumeralResult};
use crate::symbol::Symbol;

impl Numeral {
    /// Compare how often `symbol` occurs in each operand's additive form
    pub fn compare_tier(&self, other: &Numeral, symbol: Symbol) -> NumeralResult<Ordering> {
        Ok(self
            .to_additive()?
            .count(symbol)
            .cmp(&other.to_additive()?.count(symbol)))
    }

    /// Per-tier comparison vector, lowest tier first
    pub fn tier_comparison(&self, other: &Numeral) -> NumeralResult<[(Symbol, Ordering); 7]> {
        let lhs = self.to_additive()?;
        let rhs = other.to_additive()?;
        Ok(Symbol::ALPHABET.map(|symbol| (symbol, lhs.count(symbol).cmp(&rhs.count(symbol)))))
    }

    /// Sum in additive form
    ///
    /// Tiers are gathered lowest first, augend before addend, and the buffer
    /// is reversed so the result reads highest tier first.
    pub fn plus(&self, addend: &Numeral) -> NumeralResult<Numeral> {
        let augend = self.to_additive()?;
        let addend = addend.to_additive()?;

        let mut buffer = Vec::with_capacity(augend.len() + addend.len());
        for symbol in Symbol::ALPHABET {
            buffer.extend(augend.occurrences(symbol));
            buffer.extend(addend.occurrences(symbol));
        }
        buffer.reverse();

        Ok(Numeral::from_symbols(buffer))
    }

    /// Difference in additive form
    ///
    /// The minuend is denumerated first so no tier can be covered by the
    /// tiers below it. Each tier it is short on is then refilled by borrowing
    /// from the nearest higher tier it holds, and the subtrahend's symbols
    /// are struck out one by one. Fails with `InsufficientMagnitude` when
    /// there is nothing left to borrow from.
    pub fn minus(&self, subtrahend: &Numeral) -> NumeralResult<Numeral> {
        let mut minuend = self.denumerate()?;
        let subtrahend = subtrahend.to_additive()?;

        for symbol in Symbol::ALPHABET {
            while minuend.count(symbol) < subtrahend.count(symbol) {
                minuend.borrow_into(symbol)?;
            }
        }

        for symbol in &subtrahend.symbols {
            let at = minuend
                .symbols
                .iter()
                .rposition(|s| s == symbol)
                .ok_or(NumeralError::InsufficientMagnitude)?;
            minuend.symbols.remove(at);
        }

        Ok(minuend)
    }

    /// Canonical sum (`+`)
    pub fn checked_add(&self, addend: &Numeral) -> NumeralResult<Numeral> {
        self.plus(addend)?.to_subtractive()
    }

    /// Canonical difference (`-`)
    pub fn checked_sub(&self, subtrahend: &Numeral) -> NumeralResult<Numeral> {
        self.minus(subtrahend)?.to_subtractive()
    }

    /// Break one instance of the nearest higher tier down into `symbol`'s direction
    ///
    /// Scans tiers upwards from `symbol` and, within a tier, takes the
    /// rightmost instance. The instance is replaced in place by its expansion
    /// one tier down, so repeated calls walk the borrow down to `symbol`.
    fn borrow_into(&mut self, symbol: Symbol) -> NumeralResult<()> {
        for higher in &Symbol::ALPHABET[symbol.tier() + 1..] {
            let Some(at) = self.symbols.iter().rposition(|s| s == higher) else {
                continue;
            };
            let (lower, count) = higher
                .expansion()
                .ok_or(NumeralError::UnknownSymbol(higher.glyph()))?;
            trace!("borrow {} -> {}x{} for {}", higher, count, lower, symbol);
            self.symbols
                .splice(at..=at, std::iter::repeat_n(lower, count));
            return Ok(());
        }

        Err(NumeralError::InsufficientMagnitude)
    }
}

impl Add for &Numeral {
    type Output = NumeralResult<Numeral>;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for &Numeral {
    type Output = NumeralResult<Numeral>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}
