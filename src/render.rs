//! Plain-text views of an [`Analysis`] for the command line.

use crate::analyzer::KarnaughMap;
use crate::circuit::{GateNode, Placement};
use crate::Analysis;

fn bit(b: bool) -> char {
    if b {
        '1'
    } else {
        '0'
    }
}

/// Variables and `Q` across the top, one row per assignment.
pub fn truth_table(analysis: &Analysis) -> String {
    let widths: Vec<usize> = analysis.variables.iter().map(|v| v.len()).collect();

    let mut header: Vec<String> = analysis.variables.clone();
    header.push("Q".to_string());
    let mut out = header.join(" ");
    out.push('\n');

    for (assignment, output) in analysis.assignments.iter().zip(&analysis.outputs) {
        let mut cells: Vec<String> = assignment
            .bits()
            .zip(&widths)
            .map(|(b, &w)| format!("{:<w$}", bit(b), w = w))
            .collect();
        cells.push(bit(*output).to_string());
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// Gray-ordered grid with the `AB\CD` key in the corner.
pub fn karnaugh_map(map: &KarnaughMap) -> String {
    let corner = map.corner_label();
    let left = corner.chars().count();
    let width = map.column_variables().len().max(1);

    let mut out = format!("{:<left$}", corner, left = left);
    for column in 0..map.columns() {
        out.push_str(&format!(" {:<width$}", map.column_label(column), width = width));
    }
    out.push('\n');

    for (row, cells) in map.cells().iter().enumerate() {
        out.push_str(&format!("{:<left$}", map.row_label(row), left = left));
        for &cell in cells {
            out.push_str(&format!(" {:<width$}", bit(cell), width = width));
        }
        out.push('\n');
    }
    out
}

/// One node per line, inputs indented under their gate, upper input first.
pub fn gate_tree(tree: &GateNode) -> String {
    let mut out = String::new();
    let mut pending = vec![(tree, 0, None)];
    while let Some((node, indent, placement)) = pending.pop() {
        let marker = match placement {
            Some(Placement::Upper) => "┌ ",
            Some(Placement::Lower) => "└ ",
            Some(Placement::Centre) => "─ ",
            None => "",
        };
        out.push_str(&"  ".repeat(indent));
        out.push_str(marker);
        out.push_str(&node.label());
        out.push('\n');

        // lower input is pushed first, so the upper one prints first
        for (placement, child) in node.placed_children() {
            pending.push((child, indent + 1, Some(placement)));
        }
    }
    out
}
