use std::fmt;

use thiserror::Error;

/// Why an expression was rejected before evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    Empty,
    LeadingOperator,
    TrailingOperator,
    /// Two operators with no numeral between them
    EmptyOperand { position: usize },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::Empty => write!(f, "expression is empty"),
            MalformedReason::LeadingOperator => write!(f, "expression starts with an operator"),
            MalformedReason::TrailingOperator => write!(f, "expression ends with an operator"),
            MalformedReason::EmptyOperand { position } => {
                write!(f, "missing numeral before operator at position {}", position)
            }
        }
    }
}

/// Errors raised by numeral parsing, arithmetic and expression evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { position: usize, character: char },

    #[error("Malformed expression: {0}")]
    MalformedExpression(MalformedReason),

    #[error("Insufficient magnitude: minuend is smaller than subtrahend")]
    InsufficientMagnitude,

    #[error("Unknown symbol: {0:?}")]
    UnknownSymbol(char),
}

impl NumeralError {
    /// Errors that lenient expression parsing is allowed to sanitize away
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            NumeralError::InvalidCharacter { .. } | NumeralError::MalformedExpression(_)
        )
    }
}

pub type NumeralResult<T> = std::result::Result<T, NumeralError>;
