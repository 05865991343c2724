use crate::error::{EvalError, Malformed};
use crate::lexer::{Operator, Token};

/// Reduces a postfix slice in one forward pass over an owned value stack.
///
/// The value nearest the top is the right-hand operand in source order.
struct Reducer<F> {
    stack: Vec<bool>,
    lookup: F,
}

impl<F> Reducer<F>
where
    F: Fn(&str) -> Option<bool>,
{
    fn new(capacity: usize, lookup: F) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
            lookup,
        }
    }

    fn pop_operand(&mut self, op: Operator) -> Result<bool, EvalError> {
        self.stack
            .pop()
            .ok_or(EvalError::MalformedExpression(Malformed::MissingOperand(op)))
    }

    fn reduce_token(&mut self, token: &Token) -> Result<(), EvalError> {
        let missing = |op| EvalError::MalformedExpression(Malformed::MissingOperand(op));

        let value = match token {
            Token::Literal(value) => *value,
            Token::Variable(name) => {
                (self.lookup)(name).ok_or_else(|| EvalError::UnresolvedVariable(name.clone()))?
            }
            Token::Operator(op) if op.arity() == 1 => {
                let operand = self.pop_operand(*op)?;
                op.apply_unary(operand).ok_or(missing(*op))?
            }
            Token::Operator(op) => {
                let right = self.pop_operand(*op)?;
                let left = self.pop_operand(*op)?;
                op.apply_binary(left, right).ok_or(missing(*op))?
            }
            Token::LeftParen | Token::RightParen => {
                return Err(EvalError::MalformedExpression(Malformed::Parenthesis))
            }
        };
        self.stack.push(value);
        Ok(())
    }

    fn reduce(mut self, postfix: &[Token]) -> Result<bool, EvalError> {
        for token in postfix {
            self.reduce_token(token)?;
        }
        match self.stack[..] {
            [] => Err(EvalError::MalformedExpression(Malformed::Empty)),
            [value] => Ok(value),
            _ => Err(EvalError::MalformedExpression(Malformed::UnusedOperands(
                self.stack.len() - 1,
            ))),
        }
    }
}

/// Evaluates a postfix sequence whose variables have all been replaced by
/// literals.
pub fn evaluate(postfix: &[Token]) -> Result<bool, EvalError> {
    Reducer::new(postfix.len(), |_| None).reduce(postfix)
}

/// Evaluates a postfix sequence, resolving variables through `lookup`.
pub fn evaluate_with<F>(postfix: &[Token], lookup: F) -> Result<bool, EvalError>
where
    F: Fn(&str) -> Option<bool>,
{
    Reducer::new(postfix.len(), lookup).reduce(postfix)
}
