//! Truth tables, Karnaugh maps and gate trees for boolean expressions.
//!
//! ```
//! use truthtrick::{analyze, Options};
//!
//! let analysis = analyze("(A.B)+C", &Options::default()).unwrap();
//! assert_eq!(analysis.variables, vec!["A", "B", "C"]);
//! assert_eq!(analysis.outputs.len(), 8);
//! assert!(analysis.outputs[0b110]);
//! ```

pub mod analyzer;
pub mod circuit;
pub mod error;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod render;

use analyzer::{compute_outputs, enumerate_assignments, Assignment, KarnaughMap};
use circuit::{build_tree, GateNode};
use lexer::{Lexer, Token};
use parser::{extract_variables, to_postfix, Postfix};

pub use error::{Error, EvalError, Malformed, ParenSide, ParseError};
pub use options::{Options, ParenPolicy, MAX_VARIABLES};

/// Everything derived from one expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub variables: Vec<String>,
    pub postfix: Postfix,
    pub assignments: Vec<Assignment>,
    pub outputs: Vec<bool>,
    pub tree: GateNode,
}

impl Analysis {
    /// `None` only if `outputs` and `variables` disagree, which `analyze`
    /// never produces.
    pub fn karnaugh_map(&self) -> Option<KarnaughMap> {
        KarnaughMap::new(&self.variables, &self.outputs)
    }
}

/// Runs the whole pipeline: tokens, variables, postfix, every assignment,
/// the output column and the gate tree.
///
/// Fails with [`Error::TooManyVariables`] past `options.max_variables` (never
/// more than [`MAX_VARIABLES`]) and with [`Error::TooDeep`] when gates nest
/// deeper than `options.max_depth`.
pub fn analyze(text: &str, options: &Options) -> Result<Analysis, Error> {
    let tokens = Lexer::tokenize(text)?;
    let variables = extract_variables(&tokens);
    let max_variables = options.max_variables.min(MAX_VARIABLES);
    if variables.len() > max_variables {
        return Err(Error::TooManyVariables {
            count: variables.len(),
            max: max_variables,
        });
    }

    let postfix = to_postfix(&tokens, options.paren_policy)?;
    // malformed input fails here, before any of the 2^n evaluations
    let tree = build_tree(&postfix.tokens)?;
    let depth = tree.depth();
    if depth > options.max_depth {
        return Err(Error::TooDeep {
            depth,
            max: options.max_depth,
        });
    }
    let assignments = enumerate_assignments(&variables)?;
    let outputs = compute_outputs(&postfix.tokens, &assignments)?;

    Ok(Analysis {
        tokens,
        variables,
        postfix,
        assignments,
        outputs,
        tree,
    })
}
