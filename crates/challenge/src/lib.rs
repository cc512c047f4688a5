//! Numerus Challenges
//!
//! Arithmetic questions built from literal numerals, and the pass/fail
//! judging of free-form answers to them.

mod challenge;
mod error;
mod generator;

pub use challenge::{Challenge, Verdict};
pub use error::{ChallengeError, ChallengeResult};
pub use generator::{ChallengeConfig, ChallengeGenerator};

// Re-export the operator for convenience
pub use numerus_expression::Operator;
