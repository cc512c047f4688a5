//! Conversion between additive and subtractive form
//!
//! ```text
//!   MCMXCIV ──to_additive──► MDCCCCLXXXXIIII ──denumerate──► (same)
//!      ▲                                                        │
//!      └──────────────────────to_subtractive────────────────────┘
//! ```

use log::trace;

use super::Numeral;
use crate::error::NumeralResult;
use crate::symbol::Symbol;

impl Numeral {
    /// Rewrite every subtractive pair into explicit lower symbols
    ///
    /// For each tier from `I` up, a run of the one or two tiers directly
    /// below a symbol, immediately followed by that symbol, is replaced by
    /// the symbol's expansion minus the run. The result is ordered highest
    /// tier first.
    ///
    /// Fails with `InsufficientMagnitude` when a run outweighs the symbol it
    /// precedes (`VVIX`).
    pub fn to_additive(&self) -> NumeralResult<Numeral> {
        let mut symbols = self.symbols.clone();

        for symbol in Symbol::ALPHABET {
            while let Some((start, at)) = find_subtractive_pair(&symbols, symbol) {
                let run = Numeral::from_symbols(symbols[start..at].to_vec());
                let replacement = Numeral::expanded(symbol).minus(&run)?;
                trace!("{}{} -> {}", run, symbol, replacement);
                symbols.splice(start..=at, replacement.symbols);
            }
        }

        symbols.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Numeral::from_symbols(symbols))
    }

    /// Collapse runs of lower symbols into the higher symbol they equal
    ///
    /// `IIIII` becomes `V`, `VV` becomes `X`, and so on up the table. The
    /// result stays additive but has the fewest symbols possible.
    pub fn denumerate(&self) -> NumeralResult<Numeral> {
        let mut symbols = self.to_additive()?.symbols;

        for symbol in Symbol::ALPHABET {
            let Some((lower, count)) = symbol.expansion() else {
                continue;
            };
            let run = vec![lower; count];
            replace_all(&mut symbols, &run, &[symbol]);
        }

        Ok(Numeral::from_symbols(symbols))
    }

    /// Canonical minimal-length form with subtractive pairs
    ///
    /// Works from the denumerated additive form, highest tier first. For each
    /// of `C`, `X`, `I`: a second-order pass (`VIIII` -> `IX`) and then a
    /// first-order pass (`IIII` -> `IV`).
    pub fn to_subtractive(&self) -> NumeralResult<Numeral> {
        let mut symbols = self.denumerate()?.symbols;

        for tier in Symbol::ALPHABET.into_iter().rev() {
            if !tier.is_quintuple() {
                continue;
            }
            let Some(higher) = tier.higher() else {
                continue;
            };
            if let Some(top) = higher.higher() {
                replace_all(
                    &mut symbols,
                    &[higher, tier, tier, tier, tier],
                    &[tier, top],
                );
            }
            replace_all(&mut symbols, &[tier; 4], &[tier, higher]);
        }

        Ok(Numeral::from_symbols(symbols))
    }

    /// Whether both numerals denote the same quantity
    pub fn equivalent(&self, other: &Numeral) -> NumeralResult<bool> {
        Ok(self.to_subtractive()? == other.to_subtractive()?)
    }

    /// The lower-tier symbols this symbol stands for (`X` -> `VV`)
    ///
    /// The lowest tier stands for itself.
    pub(crate) fn expanded(symbol: Symbol) -> Numeral {
        match symbol.expansion() {
            Some((lower, count)) => Numeral::from_symbols(vec![lower; count]),
            None => Numeral::from(symbol),
        }
    }
}

/// Locate the first `symbol` preceded by a run of its subtractive prefixes
///
/// Returns the run start and the index of `symbol`.
fn find_subtractive_pair(symbols: &[Symbol], symbol: Symbol) -> Option<(usize, usize)> {
    let prefixes = symbol.subtractive_prefixes();

    symbols
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == symbol)
        .find_map(|(at, _)| {
            let run = symbols[..at]
                .iter()
                .rev()
                .take_while(|s| prefixes.contains(*s))
                .count();
            (run > 0).then(|| (at - run, at))
        })
}

fn replace_all(symbols: &mut Vec<Symbol>, pattern: &[Symbol], replacement: &[Symbol]) {
    while let Some(start) = symbols.windows(pattern.len()).position(|w| w == pattern) {
        symbols.splice(start..start + pattern.len(), replacement.iter().copied());
    }
}
