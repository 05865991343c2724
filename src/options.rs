//! Knobs for the expression pipeline.

/// What to do with a parenthesis that has no partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParenPolicy {
    /// A stray `)` stops popping at the bottom of the stack and a leftover
    /// `(` is dropped at the end of input.
    #[default]
    Tolerate,
    /// Either case is a [`ParseError::UnmatchedParen`](crate::ParseError::UnmatchedParen).
    Strict,
}

/// Hard ceiling on `max_variables`: a truth table over more variables has
/// more rows than `usize` can count.
pub const MAX_VARIABLES: usize = usize::BITS as usize - 1;

/// Pipeline options.
///
/// `max_variables` bounds the truth table, which has `2^n` rows, and is
/// never allowed past [`MAX_VARIABLES`]. `max_depth` bounds how deeply gates
/// may nest; the text and diagram views grow with the square of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub paren_policy: ParenPolicy,
    pub max_variables: usize,
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            paren_policy: ParenPolicy::Tolerate,
            max_variables: 16,
            max_depth: 1024,
        }
    }
}

impl Options {
    pub fn new(paren_policy: ParenPolicy, max_variables: usize, max_depth: usize) -> Self {
        Self {
            paren_policy,
            max_variables: max_variables.min(MAX_VARIABLES),
            max_depth,
        }
    }

    /// Rejects unmatched parentheses, default variable limit.
    pub fn strict() -> Self {
        Self {
            paren_policy: ParenPolicy::Strict,
            ..Self::default()
        }
    }

    pub fn with_paren_policy(mut self, paren_policy: ParenPolicy) -> Self {
        self.paren_policy = paren_policy;
        self
    }

    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables.min(MAX_VARIABLES);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
