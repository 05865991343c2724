use crate::error::ParseError;

use super::token::{lookup_alias, Operator, Token, MAX_ALIAS_LEN};

#[derive(Debug)]
pub struct Lexer {
    tokens: Vec<Token>,
    index: usize,
}

impl Lexer {
    fn new() -> Self {
        Self {
            tokens: vec![],
            index: 0,
        }
    }

    fn new_token(&mut self, token: Token, len: usize) {
        self.tokens.push(token);
        self.index += len;
    }

    /// Replaces every alias with its canonical symbol, longest alias first.
    /// Word aliases are matched ASCII case-insensitively; everything that is
    /// not an alias is copied unchanged.
    fn rewrite_aliases(chars: &[char]) -> Vec<char> {
        let mut out = Vec::with_capacity(chars.len());
        let mut i = 0;

        'scan: while i < chars.len() {
            let longest = MAX_ALIAS_LEN.min(chars.len() - i);
            for len in (1..=longest).rev() {
                let candidate: String = chars[i..i + len]
                    .iter()
                    .map(|c| c.to_ascii_uppercase())
                    .collect();
                if let Some(symbol) = lookup_alias(&candidate) {
                    out.push(symbol.as_char());
                    i += len;
                    continue 'scan;
                }
            }
            out.push(chars[i]);
            i += 1;
        }

        out
    }

    fn parse_variable(&mut self, chars: &[char]) {
        let s: String = chars
            .iter()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        let len = s.len();
        self.new_token(Token::Variable(s), len);
    }

    fn _tokenize(&mut self, chars: &[char]) {
        while self.index < chars.len() {
            let c = chars[self.index];

            if c.is_ascii_alphabetic() {
                self.parse_variable(&chars[self.index..]);
            } else if c == '0' || c == '1' {
                self.new_token(Token::Literal(c == '1'), 1);
            } else if c == '(' {
                self.new_token(Token::LeftParen, 1);
            } else if c == ')' {
                self.new_token(Token::RightParen, 1);
            } else if let Some(op) = Operator::from_symbol(c) {
                self.new_token(Token::Operator(op), 1);
            } else {
                // stray digits, underscores and unknown punctuation
                self.index += 1;
            }
        }
    }

    /// Turns raw text into canonical tokens.
    ///
    /// Whitespace is removed before alias rewriting, so `A AND B` and
    /// `AANDB` both become `A ∧ B`. A variable is an ASCII letter followed by
    /// any ASCII letters or digits (`A2`, `B10`); `0` and `1` outside a
    /// variable are single-character literals; other characters are dropped.
    pub fn tokenize(s: &str) -> Result<Vec<Token>, ParseError> {
        let stripped: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        let rewritten = Self::rewrite_aliases(&stripped);

        let mut lexer = Lexer::new();
        lexer._tokenize(&rewritten);

        if lexer.tokens.is_empty() {
            return Err(ParseError::EmptyExpression);
        }
        Ok(lexer.tokens)
    }
}

/// Rewrites aliases without splitting into tokens. Mostly useful for showing
/// the user what their input was read as.
pub fn normalize(s: &str) -> String {
    let stripped: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    Lexer::rewrite_aliases(&stripped).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::canonicalize;

    fn var(name: &str) -> Token {
        Token::Variable(name.to_string())
    }

    fn op(op: Operator) -> Token {
        Token::Operator(op)
    }

    #[test]
    fn simple_expression() {
        let tokens = Lexer::tokenize("A∧B").unwrap();
        assert_eq!(tokens, vec![var("A"), op(Operator::And), var("B")]);
    }

    #[test]
    fn symbol_aliases_are_replaced() {
        let tokens = Lexer::tokenize("A&B").unwrap();
        assert_eq!(tokens, vec![var("A"), op(Operator::And), var("B")]);
        let tokens = Lexer::tokenize("A.B").unwrap();
        assert_eq!(tokens, vec![var("A"), op(Operator::And), var("B")]);
    }

    #[test]
    fn word_aliases_ignore_case() {
        let upper = Lexer::tokenize("A&TRUE").unwrap();
        let lower = Lexer::tokenize("A&true").unwrap();
        assert_eq!(upper, vec![var("A"), op(Operator::And), Token::Literal(true)]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn double_symbol_aliases_win() {
        let tokens = Lexer::tokenize("A&&B").unwrap();
        assert_eq!(tokens, vec![var("A"), op(Operator::And), var("B")]);
        let tokens = Lexer::tokenize("A||B").unwrap();
        assert_eq!(tokens, vec![var("A"), op(Operator::Or), var("B")]);
    }

    #[test]
    fn longest_alias_beats_prefix() {
        // `>` alone is IMPLY, `>-<` and `><` are XOR
        let tokens = Lexer::tokenize("A>-<B").unwrap();
        assert_eq!(tokens, vec![var("A"), op(Operator::Xor), var("B")]);
        let tokens = Lexer::tokenize("A><B").unwrap();
        assert_eq!(tokens, vec![var("A"), op(Operator::Xor), var("B")]);
        let tokens = Lexer::tokenize("A>B").unwrap();
        assert_eq!(tokens, vec![var("A"), op(Operator::Imply), var("B")]);
    }

    #[test]
    fn aliases_with_whitespace() {
        let tokens = Lexer::tokenize("A IF AND ONLY IF B").unwrap();
        assert_eq!(tokens, vec![var("A"), op(Operator::Xnor), var("B")]);
    }

    #[test]
    fn word_operators_between_variables() {
        let tokens = Lexer::tokenize("a and not b").unwrap();
        assert_eq!(
            tokens,
            vec![var("a"), op(Operator::And), op(Operator::Not), var("b")]
        );
    }

    #[test]
    fn whitespace_is_removed() {
        let tokens = Lexer::tokenize("A ∧ B").unwrap();
        assert_eq!(tokens, vec![var("A"), op(Operator::And), var("B")]);
    }

    #[test]
    fn unexpected_numbers_are_removed() {
        let tokens = Lexer::tokenize("A ∧ 2B").unwrap();
        assert_eq!(tokens, vec![var("A"), op(Operator::And), var("B")]);
    }

    #[test]
    fn digits_stay_inside_variable_names() {
        let tokens = Lexer::tokenize("A2+B10").unwrap();
        assert_eq!(tokens, vec![var("A2"), op(Operator::Or), var("B10")]);
    }

    #[test]
    fn binary_runs_split_into_literals() {
        let tokens = Lexer::tokenize("10").unwrap();
        assert_eq!(tokens, vec![Token::Literal(true), Token::Literal(false)]);
    }

    #[test]
    fn parentheses() {
        let tokens = Lexer::tokenize("(A)").unwrap();
        assert_eq!(tokens, vec![Token::LeftParen, var("A"), Token::RightParen]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(Lexer::tokenize(""), Err(ParseError::EmptyExpression));
        assert_eq!(Lexer::tokenize("  \t\n"), Err(ParseError::EmptyExpression));
        assert_eq!(Lexer::tokenize("2_#"), Err(ParseError::EmptyExpression));
    }

    #[test]
    fn normalize_shows_rewritten_text() {
        assert_eq!(normalize("A and B or not C"), "A∧B∨¬C");
        assert_eq!(normalize("a xnor false"), "a≡0");
    }

    #[test]
    fn retokenizing_canonical_text_is_stable() {
        for input in ["A and (B or !C)", "x1 ⇒ y IFF true", "!(P ^ Q) > R"] {
            let tokens = Lexer::tokenize(input).unwrap();
            let again = Lexer::tokenize(&canonicalize(&tokens)).unwrap();
            assert_eq!(again, tokens);
        }
    }

    #[test]
    fn dropped_separator_can_join_an_alias() {
        // `_` splits the names, but their canonical text reads as XOR
        let tokens = Lexer::tokenize("XO_R").unwrap();
        assert_eq!(tokens, vec![var("XO"), var("R")]);
        assert_eq!(canonicalize(&tokens), "XOR");
        assert_eq!(
            Lexer::tokenize(&canonicalize(&tokens)).unwrap(),
            vec![op(Operator::Xor)]
        );
    }
}
