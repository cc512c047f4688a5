use numerus_core::{Numeral, NumeralResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Text that is not a single `+` or `-`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown operator: {0:?}")]
pub struct UnknownOperator(pub String);

/// Binary operator of an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            _ => None,
        }
    }

    /// The character this operator is written as
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }

    /// Combine two numerals, returning the canonical result
    pub fn apply(&self, lhs: &Numeral, rhs: &Numeral) -> NumeralResult<Numeral> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
        }
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let operator = match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::from_char(c),
            _ => None,
        };
        operator.ok_or_else(|| UnknownOperator(trimmed.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
