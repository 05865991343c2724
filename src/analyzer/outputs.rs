use crate::error::EvalError;
use crate::lexer::Token;

use super::{evaluate, Assignment};

/// The output column of the truth table, one value per assignment.
pub fn compute_outputs(
    postfix: &[Token],
    assignments: &[Assignment],
) -> Result<Vec<bool>, EvalError> {
    assignments
        .iter()
        .map(|assignment| evaluate(&assignment.substitute(postfix)))
        .collect()
}
