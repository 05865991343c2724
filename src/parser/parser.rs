use crate::error::{ParenSide, ParseError};
use crate::lexer::{Associativity, Operator, Token};
use crate::options::ParenPolicy;

/// A postfix token sequence. Never contains parentheses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Postfix {
    pub tokens: Vec<Token>,
    /// Largest size the pending stack reached during conversion, parentheses
    /// included. Diagram layout scales by this.
    pub max_stack_depth: usize,
}

impl Postfix {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

/// Tokens separated by single spaces, so `A2 B ∧` stays unambiguous.
impl std::fmt::Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let words: Vec<String> = self.tokens.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", words.join(" "))
    }
}

#[derive(Clone, Copy, Debug)]
enum Pending {
    // index of the `(` token, for error reporting
    Paren(usize),
    Op(Operator),
}

/// Shunting-yard conversion from infix to postfix.
#[derive(Debug)]
pub struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
    policy: ParenPolicy,
    output: Vec<Token>,
    stack: Vec<Pending>,
    max_stack_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], policy: ParenPolicy) -> Self {
        Self {
            tokens,
            index: 0,
            policy,
            output: Vec::with_capacity(tokens.len()),
            stack: vec![],
            max_stack_depth: 0,
        }
    }

    pub fn parse(mut self) -> Result<Postfix, ParseError> {
        let tokens = self.tokens;
        while !self.is_eof() {
            let token = &tokens[self.index];
            match token {
                Token::Variable(_) | Token::Literal(_) => self.output.push(token.clone()),
                Token::LeftParen => self.push(Pending::Paren(self.index)),
                Token::RightParen => self.close_paren()?,
                Token::Operator(op) => self.push_operator(*op),
            }
            self.index += 1;
        }
        self.drain()?;

        Ok(Postfix {
            tokens: self.output,
            max_stack_depth: self.max_stack_depth,
        })
    }

    fn is_eof(&self) -> bool {
        self.index >= self.tokens.len()
    }

    fn push(&mut self, pending: Pending) {
        self.stack.push(pending);
        self.max_stack_depth = self.max_stack_depth.max(self.stack.len());
    }

    fn close_paren(&mut self) -> Result<(), ParseError> {
        loop {
            match self.stack.pop() {
                Some(Pending::Op(op)) => self.output.push(Token::Operator(op)),
                Some(Pending::Paren(_)) => return Ok(()),
                None => {
                    return match self.policy {
                        ParenPolicy::Tolerate => Ok(()),
                        ParenPolicy::Strict => Err(ParseError::UnmatchedParen {
                            index: self.index,
                            side: ParenSide::Close,
                        }),
                    }
                }
            }
        }
    }

    fn push_operator(&mut self, incoming: Operator) {
        while let Some(&Pending::Op(top)) = self.stack.last() {
            if !Self::pops_before(top, incoming) {
                break;
            }
            self.stack.pop();
            self.output.push(Token::Operator(top));
        }
        self.push(Pending::Op(incoming));
    }

    fn pops_before(top: Operator, incoming: Operator) -> bool {
        match incoming.associativity() {
            Associativity::Left => top.precedence() >= incoming.precedence(),
            Associativity::Right => top.precedence() > incoming.precedence(),
        }
    }

    // Most recently pushed first: `A∧¬B` must end as `A B ¬ ∧`.
    fn drain(&mut self) -> Result<(), ParseError> {
        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Op(op) => self.output.push(Token::Operator(op)),
                Pending::Paren(index) => {
                    if self.policy == ParenPolicy::Strict {
                        return Err(ParseError::UnmatchedParen {
                            index,
                            side: ParenSide::Open,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Converts an infix token sequence to postfix.
pub fn to_postfix(tokens: &[Token], policy: ParenPolicy) -> Result<Postfix, ParseError> {
    Parser::new(tokens, policy).parse()
}
