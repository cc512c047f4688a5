//! Numerus Expressions
//!
//! Evaluation of flat `+`/`-` chains of numerals for the Numerus engine.
//! All arithmetic is delegated to [`numerus_core::Numeral`].

mod evaluator;
mod operator;

pub use evaluator::{ExpressionEvaluator, ParseMode, evaluate_lenient, evaluate_strict};
pub use operator::{Operator, UnknownOperator};

// Re-export the engine types for convenience
pub use numerus_core::{MalformedReason, Numeral, NumeralError, NumeralResult};

/// Factory function to create an evaluator by mode name
pub fn create_evaluator(mode: &str) -> ExpressionEvaluator {
    match mode.to_lowercase().as_str() {
        "lenient" | "forgiving" => ExpressionEvaluator::lenient(),
        _ => ExpressionEvaluator::strict(), // Default
    }
}
