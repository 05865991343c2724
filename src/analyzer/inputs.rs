use crate::error::Error;
use crate::lexer::Token;
use crate::options::MAX_VARIABLES;

/// One row of a truth table: a value for every variable, in variable order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Assignment {
    bindings: Vec<(String, bool)>,
}

impl Assignment {
    pub fn new(bindings: Vec<(String, bool)>) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &[(String, bool)] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.bindings
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| *value)
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.bindings.iter().map(|(_, value)| *value)
    }

    pub fn to_bit_string(&self) -> String {
        self.bits().map(|b| if b { '1' } else { '0' }).collect()
    }

    /// Copies `postfix`, replacing every bound variable with its literal.
    /// Unbound variables are left in place.
    pub fn substitute(&self, postfix: &[Token]) -> Vec<Token> {
        postfix
            .iter()
            .map(|token| match token {
                Token::Variable(name) => match self.get(name) {
                    Some(value) => Token::Literal(value),
                    None => token.clone(),
                },
                _ => token.clone(),
            })
            .collect()
    }
}

/// Every assignment of `variables`, in binary counting order.
///
/// Row `i` is `i` written in binary with `n` digits, most significant digit
/// bound to the first variable. No variables gives one empty assignment.
/// More than [`MAX_VARIABLES`] variables is [`Error::TooManyVariables`].
pub fn enumerate_assignments(variables: &[String]) -> Result<Vec<Assignment>, Error> {
    let n = variables.len();
    let rows = u32::try_from(n)
        .ok()
        .filter(|&shift| shift as usize <= MAX_VARIABLES)
        .and_then(|shift| 1usize.checked_shl(shift))
        .ok_or(Error::TooManyVariables {
            count: n,
            max: MAX_VARIABLES,
        })?;

    Ok((0..rows)
        .map(|i| {
            let bindings = variables
                .iter()
                .enumerate()
                .map(|(j, name)| (name.clone(), (i >> (n - 1 - j)) & 1 == 1))
                .collect();
            Assignment::new(bindings)
        })
        .collect())
}
