use log::debug;
use numerus_core::Numeral;
use numerus_expression::Operator;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::challenge::Challenge;
use crate::error::{ChallengeError, ChallengeResult};

/// Pool of literals and operators challenges are drawn from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeConfig {
    #[serde(default = "default_numerals")]
    pub numerals: Vec<Numeral>,

    #[serde(default = "default_operators")]
    pub operators: Vec<Operator>,
}

fn default_numerals() -> Vec<Numeral> {
    ["XII", "VII", "XIX", "IV", "XL", "IX", "MCMLXXXVIII", "MLXVI"]
        .into_iter()
        .filter_map(|literal| Numeral::parse(literal).ok())
        .collect()
}

fn default_operators() -> Vec<Operator> {
    vec![Operator::Add, Operator::Subtract]
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            numerals: default_numerals(),
            operators: default_operators(),
        }
    }
}

/// Draws random challenges from a fixed pool
#[derive(Debug, Clone)]
pub struct ChallengeGenerator {
    pool: Vec<Numeral>,
    operators: Vec<Operator>,
}

impl ChallengeGenerator {
    pub fn new(pool: Vec<Numeral>, operators: Vec<Operator>) -> ChallengeResult<Self> {
        if pool.len() < 2 {
            return Err(ChallengeError::PoolTooSmall(pool.len()));
        }
        if operators.is_empty() {
            return Err(ChallengeError::NoOperators);
        }
        Ok(Self { pool, operators })
    }

    pub fn from_config(config: &ChallengeConfig) -> ChallengeResult<Self> {
        Self::new(config.numerals.clone(), config.operators.clone())
    }

    /// Pick two distinct pool entries and an operator
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> ChallengeResult<Challenge> {
        let picked: Vec<&Numeral> = self.pool.choose_multiple(rng, 2).collect();
        let operator = self
            .operators
            .choose(rng)
            .copied()
            .ok_or(ChallengeError::NoOperators)?;
        let &[left, right] = picked.as_slice() else {
            return Err(ChallengeError::PoolTooSmall(picked.len()));
        };

        let challenge = Challenge::from_numerals(left.clone(), right.clone(), operator)?;
        debug!("generated challenge {}", challenge);
        Ok(challenge)
    }
}
