use std::fmt;

use phf::phf_map;

/// What an alias rewrites to. `Zero`/`One` become literals, the rest operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Op(Operator),
    Zero,
    One,
}

impl Symbol {
    pub fn as_char(&self) -> char {
        match self {
            Symbol::Op(op) => op.symbol(),
            Symbol::Zero => '0',
            Symbol::One => '1',
        }
    }
}

// Keys are upper case with whitespace removed, since lookups happen after
// whitespace stripping. `^` sits with XOR rather than AND.
pub(crate) static ALIASES: phf::Map<&'static str, Symbol> = phf_map! {
    "∧" => Symbol::Op(Operator::And),
    "." => Symbol::Op(Operator::And),
    "⋅" => Symbol::Op(Operator::And),
    "&&" => Symbol::Op(Operator::And),
    "&" => Symbol::Op(Operator::And),
    "AND" => Symbol::Op(Operator::And),
    "*" => Symbol::Op(Operator::And),
    "×" => Symbol::Op(Operator::And),
    "⋂" => Symbol::Op(Operator::And),

    "∨" => Symbol::Op(Operator::Or),
    "OR" => Symbol::Op(Operator::Or),
    "+" => Symbol::Op(Operator::Or),
    "||" => Symbol::Op(Operator::Or),
    "|" => Symbol::Op(Operator::Or),
    "⋃" => Symbol::Op(Operator::Or),

    "¬" => Symbol::Op(Operator::Not),
    "!" => Symbol::Op(Operator::Not),
    "~" => Symbol::Op(Operator::Not),
    "-" => Symbol::Op(Operator::Not),
    "NOT" => Symbol::Op(Operator::Not),

    "⊕" => Symbol::Op(Operator::Xor),
    "^" => Symbol::Op(Operator::Xor),
    "⊻" => Symbol::Op(Operator::Xor),
    "⩒" => Symbol::Op(Operator::Xor),
    "⩛" => Symbol::Op(Operator::Xor),
    "≢" => Symbol::Op(Operator::Xor),
    "><" => Symbol::Op(Operator::Xor),
    ">-<" => Symbol::Op(Operator::Xor),
    "↮" => Symbol::Op(Operator::Xor),
    "XOR" => Symbol::Op(Operator::Xor),
    "EOR" => Symbol::Op(Operator::Xor),
    "EXOR" => Symbol::Op(Operator::Xor),

    "→" => Symbol::Op(Operator::Imply),
    ">" => Symbol::Op(Operator::Imply),
    "⇒" => Symbol::Op(Operator::Imply),
    "⊃" => Symbol::Op(Operator::Imply),
    "IMPLY" => Symbol::Op(Operator::Imply),
    "IMPLIES" => Symbol::Op(Operator::Imply),

    "≡" => Symbol::Op(Operator::Xnor),
    "=" => Symbol::Op(Operator::Xnor),
    "↔" => Symbol::Op(Operator::Xnor),
    "⇔" => Symbol::Op(Operator::Xnor),
    "⊙" => Symbol::Op(Operator::Xnor),
    "IFF" => Symbol::Op(Operator::Xnor),
    "IFANDONLYIF" => Symbol::Op(Operator::Xnor),
    "XNOR" => Symbol::Op(Operator::Xnor),
    "XORN'T" => Symbol::Op(Operator::Xnor),
    "ENOR" => Symbol::Op(Operator::Xnor),
    "EXNOR" => Symbol::Op(Operator::Xnor),
    "NXOR" => Symbol::Op(Operator::Xnor),
    "EQUIVALENT" => Symbol::Op(Operator::Xnor),
    "BICONDITIONAL" => Symbol::Op(Operator::Xnor),

    "FALSE" => Symbol::Zero,
    "TRUE" => Symbol::One,
};

/// Length in chars of the longest key in [`ALIASES`] ("BICONDITIONAL").
pub(crate) const MAX_ALIAS_LEN: usize = 13;

pub(crate) fn lookup_alias(candidate: &str) -> Option<Symbol> {
    ALIASES.get(candidate).copied()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Not,
    And,
    Or,
    Xor,
    Xnor,
    Imply,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Xnor,
        Operator::Imply,
    ];

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '¬' => Some(Operator::Not),
            '∧' => Some(Operator::And),
            '∨' => Some(Operator::Or),
            '⊕' => Some(Operator::Xor),
            '≡' => Some(Operator::Xnor),
            '→' => Some(Operator::Imply),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Not => '¬',
            Operator::And => '∧',
            Operator::Or => '∨',
            Operator::Xor => '⊕',
            Operator::Xnor => '≡',
            Operator::Imply => '→',
        }
    }

    /// Gate name used by diagram consumers.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Not => "NOT",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Xor => "XOR",
            Operator::Xnor => "XNOR",
            Operator::Imply => "IMPLY",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Operator::Not => 1,
            _ => 2,
        }
    }

    /// Higher binds tighter. AND and OR share a tier.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Not => 5,
            Operator::And | Operator::Or => 4,
            Operator::Xor => 3,
            Operator::Xnor => 2,
            Operator::Imply => 1,
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            Operator::Not => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    pub fn apply_unary(&self, a: bool) -> Option<bool> {
        match self {
            Operator::Not => Some(!a),
            _ => None,
        }
    }

    /// `left` and `right` are in source order, which matters for IMPLY.
    pub fn apply_binary(&self, left: bool, right: bool) -> Option<bool> {
        match self {
            Operator::Not => None,
            Operator::And => Some(left && right),
            Operator::Or => Some(left || right),
            Operator::Xor => Some(left != right),
            Operator::Xnor => Some(left == right),
            Operator::Imply => Some(!left || right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Variable(String),
    Literal(bool),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Variable(name) => write!(f, "{name}"),
            Token::Literal(true) => write!(f, "1"),
            Token::Literal(false) => write!(f, "0"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Concatenates the canonical text of each token.
pub fn canonicalize(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.to_string()).collect()
}
