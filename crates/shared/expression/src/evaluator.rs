use log::{debug, trace};
use numerus_core::{MalformedReason, Numeral, NumeralError, NumeralResult, Symbol};
use serde::{Deserialize, Serialize};

use crate::operator::Operator;

/// How strictly raw input is treated before evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Validate up front and reject anything malformed
    #[default]
    Strict,
    /// Strip everything outside the alphabet and operators, then evaluate
    Lenient,
}

/// Reduces `A + B - C ...` to a single canonical numeral
///
/// `A - B - C` reads as `(A - B) - C`: the rightmost operator combines the
/// fully reduced left side with the last operand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpressionEvaluator {
    mode: ParseMode,
}

impl ExpressionEvaluator {
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(ParseMode::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(ParseMode::Lenient)
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Evaluate raw input to a canonical numeral
    pub fn evaluate(&self, input: &str) -> NumeralResult<Numeral> {
        let expression = self.prepare(input)?;
        debug!("evaluating {:?} ({:?})", expression, self.mode);
        reduce(&expression)
    }

    /// The operator/alphabet-only expression that will be reduced
    ///
    /// Strict mode fails on malformed input. Lenient mode never does.
    pub fn prepare(&self, input: &str) -> NumeralResult<String> {
        match self.mode {
            ParseMode::Strict => validate(input),
            ParseMode::Lenient => {
                let sanitized = sanitize(input);
                if sanitized != input {
                    debug!("sanitized {:?} -> {:?}", input, sanitized);
                }
                Ok(sanitized)
            }
        }
    }
}

fn is_expression_char(c: char) -> bool {
    Symbol::from_glyph(c).is_some() || Operator::from_char(c).is_some()
}

fn is_operator(c: char) -> bool {
    Operator::from_char(c).is_some()
}

/// Strict up-front validation
///
/// Whitespace separates tokens and is dropped. Checks run in order: empty,
/// leading operator, trailing operator, foreign characters, empty operands.
fn validate(input: &str) -> NumeralResult<String> {
    let tokens: Vec<(usize, char)> = input
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .collect();

    let (Some(&(_, first)), Some(&(_, last))) = (tokens.first(), tokens.last()) else {
        return Err(NumeralError::MalformedExpression(MalformedReason::Empty));
    };
    if is_operator(first) {
        return Err(NumeralError::MalformedExpression(
            MalformedReason::LeadingOperator,
        ));
    }
    if is_operator(last) {
        return Err(NumeralError::MalformedExpression(
            MalformedReason::TrailingOperator,
        ));
    }
    if let Some(&(position, character)) = tokens.iter().find(|(_, c)| !is_expression_char(*c)) {
        return Err(NumeralError::InvalidCharacter {
            position,
            character,
        });
    }
    if let Some(pair) = tokens
        .windows(2)
        .find(|pair| is_operator(pair[0].1) && is_operator(pair[1].1))
    {
        return Err(NumeralError::MalformedExpression(
            MalformedReason::EmptyOperand {
                position: pair[1].0,
            },
        ));
    }

    Ok(tokens.into_iter().map(|(_, c)| c).collect())
}

/// Forgiving cleanup: keep alphabet and operators, drop dangling operators
fn sanitize(input: &str) -> String {
    let kept: String = input.chars().filter(|c| is_expression_char(*c)).collect();
    kept.trim_matches(is_operator).to_string()
}

/// Reduce left to right, one operator at a time
///
/// Same result as splitting on the rightmost operator and reducing the left
/// side first, without the stack depth. Empty operands (only reachable from
/// lenient input) read as zero. A lone operand comes back canonical.
fn reduce(expression: &str) -> NumeralResult<Numeral> {
    let operators: Vec<(usize, Operator)> = expression
        .char_indices()
        .filter_map(|(at, c)| Operator::from_char(c).map(|op| (at, op)))
        .collect();

    let Some(&(first, _)) = operators.first() else {
        return Numeral::parse(expression)?.to_subtractive();
    };

    let mut result = Numeral::parse(&expression[..first])?;
    for (i, &(at, op)) in operators.iter().enumerate() {
        let end = operators
            .get(i + 1)
            .map_or(expression.len(), |&(next, _)| next);
        let rhs = Numeral::parse(&expression[at + op.symbol().len_utf8()..end])?;
        let combined = op.apply(&result, &rhs)?;
        trace!("{} {} {} = {}", result, op, rhs, combined);
        result = combined;
    }
    Ok(result)
}

/// Evaluate with full validation
pub fn evaluate_strict(input: &str) -> NumeralResult<Numeral> {
    ExpressionEvaluator::strict().evaluate(input)
}

/// Evaluate free-form text, ignoring anything that is not part of an expression
pub fn evaluate_lenient(input: &str) -> NumeralResult<Numeral> {
    ExpressionEvaluator::lenient().evaluate(input)
}
