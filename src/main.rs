use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use clap_stdin::MaybeStdin;

use truthtrick::circuit::Diagram;
use truthtrick::lexer::{canonicalize, normalize};
use truthtrick::{analyze, render, Options, ParenPolicy};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Show {
    Table,
    Kmap,
    Postfix,
    Tree,
    Dot,
    All,
}

/// Truth table, Karnaugh map and gate diagram for a boolean expression.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Expression such as "(A and B) or !C", or "-" to read stdin
    expression: MaybeStdin<String>,

    /// Fail on unmatched parentheses instead of ignoring them
    #[arg(long)]
    strict_parens: bool,

    /// Refuse expressions with more variables than this
    #[arg(long, default_value_t = Options::default().max_variables)]
    max_variables: usize,

    /// Refuse expressions whose gates nest deeper than this
    #[arg(long, default_value_t = Options::default().max_depth)]
    max_depth: usize,

    /// Which view to print
    #[arg(long, value_enum, default_value_t = Show::All)]
    show: Show,

    /// Dump every pipeline stage to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let paren_policy = if cli.strict_parens {
        ParenPolicy::Strict
    } else {
        ParenPolicy::Tolerate
    };
    let options = Options::new(paren_policy, cli.max_variables, cli.max_depth);

    let analysis = match analyze(&cli.expression, &options) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.verbose {
        eprintln!("read as: {}", normalize(&cli.expression));
        eprintln!("tokens: {}", canonicalize(&analysis.tokens));
        eprintln!("variables: {:?}", analysis.variables);
        eprintln!("postfix: {}", analysis.postfix);
        eprintln!("max stack depth: {}", analysis.postfix.max_stack_depth);
        eprintln!(
            "gates: {}, depth: {}",
            analysis.tree.gate_count(),
            analysis.tree.depth()
        );
    }

    let show = |view: Show| cli.show == view || cli.show == Show::All;

    if show(Show::Postfix) {
        println!("{}", analysis.postfix);
        println!();
    }
    if show(Show::Table) {
        println!("{}", render::truth_table(&analysis));
    }
    if show(Show::Kmap) {
        match analysis.karnaugh_map() {
            Some(map) if map.is_displayable() => println!("{}", render::karnaugh_map(&map)),
            _ if cli.show == Show::Kmap => eprintln!("no Karnaugh map for fewer than two variables"),
            _ => {}
        }
    }
    if show(Show::Tree) {
        println!("{}", render::gate_tree(&analysis.tree));
    }
    if show(Show::Dot) {
        print!("{}", Diagram::from_tree(&analysis.tree).to_dot());
    }

    ExitCode::SUCCESS
}
