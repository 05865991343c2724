//! Error types for parsing and evaluating expressions.

use std::fmt;

use thiserror::Error;

use crate::lexer::Operator;

/// Which half of a parenthesis pair was missing its partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenSide {
    Open,
    Close,
}

impl fmt::Display for ParenSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParenSide::Open => write!(f, "opening"),
            ParenSide::Close => write!(f, "closing"),
        }
    }
}

/// Errors raised while turning text into a postfix sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing usable was left after stripping whitespace and unknown characters.
    #[error("expression is empty")]
    EmptyExpression,

    /// Only raised under [`ParenPolicy::Strict`](crate::ParenPolicy::Strict).
    #[error("unmatched {side} parenthesis at token {index}")]
    UnmatchedParen { index: usize, side: ParenSide },
}

/// Ways a postfix sequence can have the wrong number of operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// Nothing to evaluate.
    Empty,
    /// The operator ran out of operands.
    MissingOperand(Operator),
    /// Operands were left over once the root was reduced.
    UnusedOperands(usize),
    /// Parentheses have no meaning in postfix form.
    Parenthesis,
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::Empty => write!(f, "nothing to evaluate"),
            Malformed::MissingOperand(op) => write!(f, "operand missing for {}", op.name()),
            Malformed::UnusedOperands(n) => {
                write!(f, "{n} operand(s) not connected to any operator")
            }
            Malformed::Parenthesis => write!(f, "parenthesis in postfix sequence"),
        }
    }
}

/// Errors raised while reducing a postfix sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("variable {0} has no value")]
    UnresolvedVariable(String),

    #[error("malformed expression: {0}")]
    MalformedExpression(Malformed),
}

/// Anything the full pipeline can fail with.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("too many variables ({count}, at most {max} allowed)")]
    TooManyVariables { count: usize, max: usize },

    #[error("gates nest {depth} deep (at most {max} allowed)")]
    TooDeep { depth: usize, max: usize },
}
