//! Node/edge form of a gate tree for an external layout engine.
//!
//! Ids encode the path from the output: the output itself is `"0"`, the
//! root gate `"00"`, and every child appends its build position (`0` for
//! the first input read from the postfix tail, `1` for the second).

use std::fmt::Write as FmtWrite;

use crate::lexer::Operator;

use super::GateNode;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// The `Q` terminal every circuit drives.
    Output,
    Gate(Operator),
    Leaf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagramNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub direction: i8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagramEdge {
    pub from: String,
    pub to: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Diagram {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

impl Diagram {
    pub fn from_tree(tree: &GateNode) -> Self {
        let mut diagram = Diagram::default();
        diagram.nodes.push(DiagramNode {
            id: "0".to_string(),
            label: "Q".to_string(),
            kind: NodeKind::Output,
            direction: 0,
        });

        let mut pending = vec![(tree, "0".to_string(), "00".to_string(), 0)];
        while let Some((node, parent, id, direction)) = pending.pop() {
            // reversed so the first input is visited next
            for (position, (placement, child)) in
                node.placed_children().into_iter().enumerate().rev()
            {
                pending.push((child, id.clone(), format!("{id}{position}"), placement.direction()));
            }
            diagram.add(node, parent, id, direction);
        }
        diagram
    }

    fn add(&mut self, node: &GateNode, parent: String, id: String, direction: i8) {
        let kind = match node {
            GateNode::Gate { operator, .. } => NodeKind::Gate(*operator),
            GateNode::Leaf(_) => NodeKind::Leaf,
        };
        self.edges.push(DiagramEdge {
            from: parent,
            to: id.clone(),
        });
        self.nodes.push(DiagramNode {
            id,
            label: node.label(),
            kind,
            direction,
        });
    }

    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Graphviz rendering, output on the right.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_dot(&mut out);
        out
    }

    fn write_dot<W: FmtWrite>(&self, w: &mut W) -> std::fmt::Result {
        writeln!(w, "digraph circuit {{")?;
        writeln!(w, "  rankdir=RL;")?;
        writeln!(w, "  nodesep=0.2;")?;
        writeln!(w)?;
        for node in &self.nodes {
            let shape = match node.kind {
                NodeKind::Output => "doublecircle",
                NodeKind::Gate(_) => "box",
                NodeKind::Leaf => "plaintext",
            };
            writeln!(
                w,
                "  n{} [label=\"{}\", shape={}];",
                node.id, node.label, shape
            )?;
        }
        writeln!(w)?;
        for edge in &self.edges {
            writeln!(w, "  n{} -> n{} [arrowhead=none];", edge.from, edge.to)?;
        }
        writeln!(w, "}}")
    }
}
