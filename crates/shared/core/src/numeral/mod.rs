//! Validated numeral value type
//!
//! A [`Numeral`] is a sequence of [`Symbol`]s. It carries no notion of
//! "additive" or "subtractive" form; those are produced on demand by the
//! normalization operations in [`normalize`](self). Arithmetic lives in
//! [`arithmetic`](self) and never leaves the symbol domain.

mod arithmetic;
mod normalize;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{NumeralError, NumeralResult};
use crate::symbol::Symbol;

/// A Roman numeral held as a sequence of alphabet symbols
///
/// Equality is structural: `IV` and `IIII` are different values that denote
/// the same quantity. Use [`Numeral::equivalent`] to compare quantities.
///
/// The empty numeral denotes zero and renders as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Numeral {
    symbols: Vec<Symbol>,
}

impl Numeral {
    /// The empty numeral (zero)
    pub const fn empty() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Parse a literal, rejecting the first character outside the alphabet
    ///
    /// Positions are zero-based character indices. An empty literal yields
    /// the empty numeral.
    pub fn parse(literal: &str) -> NumeralResult<Self> {
        literal
            .chars()
            .enumerate()
            .map(|(position, character)| {
                Symbol::from_glyph(character).ok_or(NumeralError::InvalidCharacter {
                    position,
                    character,
                })
            })
            .collect::<NumeralResult<Vec<_>>>()
            .map(Self::from_symbols)
    }

    pub(crate) fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// The symbols in written order
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of written symbols (not the quantity denoted)
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Occurrences of `symbol` as written
    pub fn count(&self, symbol: Symbol) -> usize {
        self.symbols.iter().filter(|s| **s == symbol).count()
    }

    fn occurrences(&self, symbol: Symbol) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied().filter(move |s| *s == symbol)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for Numeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Numeral::parse(s)
    }
}

impl TryFrom<String> for Numeral {
    type Error = NumeralError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Numeral::parse(&value)
    }
}

impl TryFrom<&str> for Numeral {
    type Error = NumeralError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Numeral::parse(value)
    }
}

impl From<Numeral> for String {
    fn from(numeral: Numeral) -> Self {
        numeral.to_string()
    }
}

impl From<Symbol> for Numeral {
    fn from(symbol: Symbol) -> Self {
        Self::from_symbols(vec![symbol])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let n = Numeral::parse("MCMXCIV").unwrap();
        assert_eq!(n.len(), 7);
        assert_eq!(n.symbols()[0], Symbol::M);
        assert_eq!(n.to_string(), "MCMXCIV");
    }

    #[test]
    fn test_parse_invalid_character() {
        let err = Numeral::parse("IIA").unwrap_err();
        assert_eq!(
            err,
            NumeralError::InvalidCharacter {
                position: 2,
                character: 'A'
            }
        );
    }

    #[test]
    fn test_parse_reports_first_offender() {
        let err = Numeral::parse("xIV ").unwrap_err();
        assert_eq!(
            err,
            NumeralError::InvalidCharacter {
                position: 0,
                character: 'x'
            }
        );
    }

    #[test]
    fn test_parse_empty_is_zero() {
        let n = Numeral::parse("").unwrap();
        assert!(n.is_empty());
        assert_eq!(n, Numeral::empty());
        assert_eq!(n.to_string(), "");
    }

    #[test]
    fn test_count() {
        let n: Numeral = "XXVII".parse().unwrap();
        assert_eq!(n.count(Symbol::X), 2);
        assert_eq!(n.count(Symbol::I), 2);
        assert_eq!(n.count(Symbol::M), 0);
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(Numeral::from(Symbol::L).to_string(), "L");
    }
}
