use std::collections::HashSet;

use crate::lexer::Token;

#[derive(Debug, Default)]
struct Variables {
    seen: HashSet<String>,
    names: Vec<String>,
}

impl Variables {
    fn new() -> Self {
        Self::default()
    }

    fn declare(&mut self, name: &str) {
        if self.seen.insert(name.to_string()) {
            self.names.push(name.to_string());
        }
    }
}

/// Variable names in order of first appearance, without duplicates.
pub fn extract_variables(tokens: &[Token]) -> Vec<String> {
    let mut variables = Variables::new();
    for token in tokens {
        if let Token::Variable(name) = token {
            variables.declare(name);
        }
    }
    variables.names
}
