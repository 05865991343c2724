//! Property tests over generated expressions.

use std::collections::HashSet;

use proptest::prelude::*;
use truthtrick::analyzer::{enumerate_assignments, gray};
use truthtrick::lexer::{canonicalize, Lexer, Operator};
use truthtrick::{analyze, Options};

const VARIABLES: [&str; 6] = ["A", "B", "C", "P", "Q", "x1"];

/// Generated expression. The `usize` fields pick a spelling.
#[derive(Clone, Debug)]
enum Expr {
    Lit(bool, usize),
    Var(usize),
    Not(usize, Box<Expr>),
    Bin(Operator, usize, Box<Expr>, Box<Expr>),
}

fn spellings(op: Operator) -> &'static [&'static str] {
    match op {
        Operator::Not => &["¬", "!", "~", "-", "not", "NOT"],
        Operator::And => &["∧", ".", "&&", "&", "and", "AND", "*", "×"],
        Operator::Or => &["∨", "+", "||", "|", "or", "OR"],
        Operator::Xor => &["⊕", "^", "⊻", "><", ">-<", "xor", "eor", "EXOR"],
        Operator::Xnor => &["≡", "=", "↔", "⇔", "iff", "xnor", "if and only if", "equivalent"],
        Operator::Imply => &["→", ">", "⇒", "implies", "IMPLY"],
    }
}

fn pick(options: &[&'static str], k: usize) -> &'static str {
    options[k % options.len()]
}

impl Expr {
    fn render(&self) -> String {
        match self {
            Expr::Lit(true, k) => pick(&["1", "true", "TRUE"], *k).to_string(),
            Expr::Lit(false, k) => pick(&["0", "false", "FALSE"], *k).to_string(),
            Expr::Var(i) => VARIABLES[*i].to_string(),
            Expr::Not(k, e) => format!("{}{}", pick(spellings(Operator::Not), *k), e.render()),
            Expr::Bin(op, k, l, r) => {
                format!("({} {} {})", l.render(), pick(spellings(*op), *k), r.render())
            }
        }
    }

    fn eval(&self, value: &dyn Fn(&str) -> bool) -> bool {
        match self {
            Expr::Lit(b, _) => *b,
            Expr::Var(i) => value(VARIABLES[*i]),
            Expr::Not(_, e) => !e.eval(value),
            Expr::Bin(op, _, l, r) => {
                let (l, r) = (l.eval(value), r.eval(value));
                match op {
                    Operator::And => l && r,
                    Operator::Or => l || r,
                    Operator::Xor => l != r,
                    Operator::Xnor => l == r,
                    Operator::Imply => !l || r,
                    Operator::Not => unreachable!(),
                }
            }
        }
    }
}

fn arb_binary_op() -> impl Strategy<Value = Operator> {
    prop::sample::select(vec![
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Xnor,
        Operator::Imply,
    ])
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (any::<bool>(), 0..3usize).prop_map(|(b, k)| Expr::Lit(b, k)),
        (0..VARIABLES.len()).prop_map(Expr::Var),
        (0..VARIABLES.len()).prop_map(Expr::Var),
    ];

    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (0..8usize, inner.clone()).prop_map(|(k, e)| Expr::Not(k, Box::new(e))),
            (arb_binary_op(), 0..8usize, inner.clone(), inner)
                .prop_map(|(op, k, l, r)| Expr::Bin(op, k, Box::new(l), Box::new(r))),
        ]
    })
}

proptest! {
    #[test]
    fn prop_assignments_cover_every_vector(n in 0usize..10) {
        let names: Vec<String> = (0..n).map(|i| format!("V{i}")).collect();
        let rows = enumerate_assignments(&names).unwrap();
        prop_assert_eq!(rows.len(), 1usize << n);

        let distinct: HashSet<String> = rows.iter().map(|a| a.to_bit_string()).collect();
        prop_assert_eq!(distinct.len(), rows.len());
        for row in &rows {
            prop_assert_eq!(row.len(), n);
        }
    }

    #[test]
    fn prop_gray_neighbours_differ_in_one_bit(i in 0usize..(1 << 20)) {
        prop_assert_eq!((gray(i) ^ gray(i + 1)).count_ones(), 1);
    }

    #[test]
    fn prop_outputs_match_reference(e in arb_expr()) {
        let text = e.render();
        let analysis = analyze(&text, &Options::default()).unwrap();
        for (assignment, output) in analysis.assignments.iter().zip(&analysis.outputs) {
            let value = |name: &str| assignment.get(name).unwrap_or(false);
            prop_assert_eq!(*output, e.eval(&value), "{} at {}", text, assignment.to_bit_string());
        }
    }

    #[test]
    fn prop_tree_flattens_to_postfix(e in arb_expr()) {
        let analysis = analyze(&e.render(), &Options::default()).unwrap();
        prop_assert_eq!(analysis.tree.flatten(), analysis.postfix.tokens);
    }

    #[test]
    fn prop_tree_evaluates_like_postfix(e in arb_expr()) {
        let analysis = analyze(&e.render(), &Options::default()).unwrap();
        for (assignment, output) in analysis.assignments.iter().zip(&analysis.outputs) {
            let lookup = |name: &str| assignment.get(name);
            prop_assert_eq!(analysis.tree.evaluate_with(&lookup), Ok(*output));
        }
    }

    #[test]
    fn prop_canonical_text_retokenizes(e in arb_expr()) {
        let tokens = Lexer::tokenize(&e.render()).unwrap();
        let again = Lexer::tokenize(&canonicalize(&tokens)).unwrap();
        prop_assert_eq!(again, tokens);
    }

    #[test]
    fn prop_balanced_input_passes_strict_mode(e in arb_expr()) {
        prop_assert!(analyze(&e.render(), &Options::strict()).is_ok());
    }
}
