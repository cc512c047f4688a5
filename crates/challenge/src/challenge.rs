use log::{debug, warn};
use numerus_core::{Numeral, NumeralError};
use numerus_expression::{Operator, evaluate_lenient};
use std::fmt;

use crate::error::ChallengeResult;

/// Outcome of judging an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail {
        expected: Numeral,
        /// `None` when the answer could not be evaluated
        given: Option<Numeral>,
    },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail {
                expected,
                given: Some(given),
            } => write!(f, "FAIL (expected {}, got {})", expected, given),
            Verdict::Fail {
                expected,
                given: None,
            } => write!(f, "FAIL (expected {}, got no numeral)", expected),
        }
    }
}

/// One arithmetic question with its canonical answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    left: Numeral,
    right: Numeral,
    operator: Operator,
    expected: Numeral,
}

impl Challenge {
    /// Build a challenge from two literal numerals
    pub fn new(left: &str, right: &str, operator: Operator) -> ChallengeResult<Self> {
        Self::from_numerals(Numeral::parse(left)?, Numeral::parse(right)?, operator)
    }

    /// Build a challenge from parsed numerals
    ///
    /// A subtraction whose left side is the smaller one is flipped so the
    /// answer always exists.
    pub fn from_numerals(
        mut left: Numeral,
        mut right: Numeral,
        operator: Operator,
    ) -> ChallengeResult<Self> {
        let expected = match operator.apply(&left, &right) {
            Ok(expected) => expected,
            Err(NumeralError::InsufficientMagnitude) if operator == Operator::Subtract => {
                debug!("swapping operands of {} - {}", left, right);
                std::mem::swap(&mut left, &mut right);
                operator.apply(&left, &right)?
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            left,
            right,
            operator,
            expected,
        })
    }

    pub fn left(&self) -> &Numeral {
        &self.left
    }

    pub fn right(&self) -> &Numeral {
        &self.right
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Canonical answer
    pub fn expected(&self) -> &Numeral {
        &self.expected
    }

    /// The question as shown to the user, e.g. `XII + VII`
    pub fn prompt(&self) -> String {
        format!("{} {} {}", self.left, self.operator, self.right)
    }

    /// Judge free-form answer text
    ///
    /// The answer is evaluated leniently, so `"it's XIX!"` and `"X + IX"`
    /// both count. Any non-canonical spelling of the right quantity passes.
    pub fn judge(&self, answer: &str) -> Verdict {
        let given = match evaluate_lenient(answer) {
            Ok(given) => given,
            Err(e) => {
                warn!("could not evaluate answer {:?}: {}", answer, e);
                return self.fail(None);
            }
        };

        match given.equivalent(&self.expected) {
            Ok(true) => Verdict::Pass,
            Ok(false) => self.fail(Some(given)),
            Err(e) => {
                warn!("could not normalize answer {}: {}", given, e);
                self.fail(Some(given))
            }
        }
    }

    fn fail(&self, given: Option<Numeral>) -> Verdict {
        Verdict::Fail {
            expected: self.expected.clone(),
            given,
        }
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.prompt(), self.expected)
    }
}
