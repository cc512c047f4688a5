use numerus_core::NumeralError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChallengeError {
    #[error("Numeral error: {0}")]
    Numeral(#[from] NumeralError),

    #[error("Challenge pool needs at least two numerals, got {0}")]
    PoolTooSmall(usize),

    #[error("No operators configured for challenges")]
    NoOperators,
}

pub type ChallengeResult<T> = std::result::Result<T, ChallengeError>;
