//! The numeral alphabet and its equivalence table
//!
//! Seven symbols in ascending tier order. Every tier above `I` is equivalent
//! to a fixed number of copies of the tier directly below it:
//!
//! ```text
//! I ◄─5─ V ◄─2─ X ◄─5─ L ◄─2─ C ◄─5─ D ◄─2─ M
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::NumeralError;

/// One symbol of the numeral alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

/// Row of the equivalence table
struct Tier {
    symbol: Symbol,
    glyph: char,
    /// Copies of the next-lower tier this symbol stands for (`0` for the lowest tier)
    expansion: usize,
}

impl Tier {
    const fn new(symbol: Symbol, glyph: char, expansion: usize) -> Self {
        Self {
            symbol,
            glyph,
            expansion,
        }
    }
}

const TIERS: [Tier; 7] = [
    Tier::new(Symbol::I, 'I', 0),
    Tier::new(Symbol::V, 'V', 5),
    Tier::new(Symbol::X, 'X', 2),
    Tier::new(Symbol::L, 'L', 5),
    Tier::new(Symbol::C, 'C', 2),
    Tier::new(Symbol::D, 'D', 5),
    Tier::new(Symbol::M, 'M', 2),
];

static ORDERED: [Symbol; 7] = Symbol::ALPHABET;

impl Symbol {
    /// All symbols, lowest tier first
    pub const ALPHABET: [Symbol; 7] = [
        Symbol::I,
        Symbol::V,
        Symbol::X,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::M,
    ];

    /// Position of this symbol in the tier table (`I` is 0)
    #[inline]
    pub const fn tier(self) -> usize {
        self as usize
    }

    /// The character used to write this symbol
    #[inline]
    pub const fn glyph(self) -> char {
        TIERS[self.tier()].glyph
    }

    /// Look up a character in the alphabet
    pub fn from_glyph(c: char) -> Option<Symbol> {
        TIERS.iter().find(|t| t.glyph == c).map(|t| t.symbol)
    }

    /// Symbol one tier below, if any
    pub fn lower(self) -> Option<Symbol> {
        self.tier().checked_sub(1).map(|i| Self::ALPHABET[i])
    }

    /// Symbol one tier above, if any
    pub fn higher(self) -> Option<Symbol> {
        Self::ALPHABET.get(self.tier() + 1).copied()
    }

    /// The lower symbol and repeat count this symbol is equivalent to
    ///
    /// `X` expands to `(V, 2)`. The lowest tier has no expansion.
    pub fn expansion(self) -> Option<(Symbol, usize)> {
        self.lower().map(|lower| (lower, TIERS[self.tier()].expansion))
    }

    /// Symbols that may precede this one in a subtractive pair
    ///
    /// These are the one or two tiers directly below: `I` for `V`, `V` and `I`
    /// for `X`, and so on.
    pub fn subtractive_prefixes(self) -> &'static [Symbol] {
        let tier = self.tier();
        &ORDERED[tier.saturating_sub(2)..tier]
    }

    /// Whether this tier's expansion into the tier above takes five copies
    ///
    /// Only these tiers (`I`, `X`, `C`) may appear four times in additive
    /// form and therefore take part in subtractive substitutions.
    pub fn is_quintuple(self) -> bool {
        self.higher()
            .and_then(Symbol::expansion)
            .is_some_and(|(_, count)| count == 5)
    }
}

impl TryFrom<char> for Symbol {
    type Error = NumeralError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Symbol::from_glyph(c).ok_or(NumeralError::UnknownSymbol(c))
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.glyph()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_order_matches_table() {
        for (i, symbol) in Symbol::ALPHABET.iter().enumerate() {
            assert_eq!(symbol.tier(), i);
            assert_eq!(TIERS[i].symbol, *symbol);
        }
    }

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(Symbol::from_glyph('X'), Some(Symbol::X));
        assert_eq!(Symbol::from_glyph('x'), None);
        assert_eq!(char::from(Symbol::M), 'M');
        assert_eq!(format!("{}", Symbol::D), "D");
    }

    #[test]
    fn test_try_from_unknown() {
        assert_eq!(Symbol::try_from('A'), Err(NumeralError::UnknownSymbol('A')));
        assert_eq!(Symbol::try_from('L'), Ok(Symbol::L));
    }

    #[test]
    fn test_neighbours() {
        assert_eq!(Symbol::I.lower(), None);
        assert_eq!(Symbol::V.lower(), Some(Symbol::I));
        assert_eq!(Symbol::M.higher(), None);
        assert_eq!(Symbol::C.higher(), Some(Symbol::D));
    }

    #[test]
    fn test_expansion_table() {
        assert_eq!(Symbol::I.expansion(), None);
        assert_eq!(Symbol::V.expansion(), Some((Symbol::I, 5)));
        assert_eq!(Symbol::X.expansion(), Some((Symbol::V, 2)));
        assert_eq!(Symbol::L.expansion(), Some((Symbol::X, 5)));
        assert_eq!(Symbol::C.expansion(), Some((Symbol::L, 2)));
        assert_eq!(Symbol::D.expansion(), Some((Symbol::C, 5)));
        assert_eq!(Symbol::M.expansion(), Some((Symbol::D, 2)));
    }

    #[test]
    fn test_subtractive_prefixes() {
        assert!(Symbol::I.subtractive_prefixes().is_empty());
        assert_eq!(Symbol::V.subtractive_prefixes(), &[Symbol::I]);
        assert_eq!(Symbol::X.subtractive_prefixes(), &[Symbol::I, Symbol::V]);
        assert_eq!(Symbol::M.subtractive_prefixes(), &[Symbol::C, Symbol::D]);
    }

    #[test]
    fn test_quintuple_tiers() {
        let quintuple: Vec<Symbol> = Symbol::ALPHABET
            .into_iter()
            .filter(|s| s.is_quintuple())
            .collect();
        assert_eq!(quintuple, vec![Symbol::I, Symbol::X, Symbol::C]);
    }
}
