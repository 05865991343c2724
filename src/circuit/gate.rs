use crate::error::{EvalError, Malformed};
use crate::lexer::{Operator, Token};

/// Where a child sits relative to its gate in a left-to-right diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Upper,
    Centre,
    Lower,
}

impl Placement {
    pub fn direction(&self) -> i8 {
        match self {
            Placement::Upper => 1,
            Placement::Centre => 0,
            Placement::Lower => -1,
        }
    }
}

/// A node of the gate tree. The root is the expression's output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateNode {
    /// Children are in source order: `A → B` has children `[A, B]`.
    Gate {
        operator: Operator,
        children: Vec<GateNode>,
    },
    /// A variable or a literal.
    Leaf(Token),
}

impl GateNode {
    pub fn label(&self) -> String {
        match self {
            GateNode::Gate { operator, .. } => operator.name().to_string(),
            GateNode::Leaf(token) => token.to_string(),
        }
    }

    pub fn children(&self) -> &[GateNode] {
        match self {
            GateNode::Gate { children, .. } => children,
            GateNode::Leaf(_) => &[],
        }
    }

    /// Children paired with their placement, lower (right-hand) input first.
    pub fn placed_children(&self) -> Vec<(Placement, &GateNode)> {
        match self.children() {
            [only] => vec![(Placement::Centre, only)],
            [upper, lower] => vec![(Placement::Lower, lower), (Placement::Upper, upper)],
            _ => vec![],
        }
    }

    /// Post-order walk. Reproduces the postfix sequence the tree came from.
    pub fn flatten(&self) -> Vec<Token> {
        self.post_order()
            .into_iter()
            .map(|node| match node {
                GateNode::Gate { operator, .. } => Token::Operator(*operator),
                GateNode::Leaf(token) => token.clone(),
            })
            .collect()
    }

    // Children in source order, every node after its inputs.
    fn post_order(&self) -> Vec<&GateNode> {
        let mut out = vec![];
        let mut stack = vec![(self, false)];
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                out.push(node);
                continue;
            }
            stack.push((node, true));
            for child in node.children().iter().rev() {
                stack.push((child, false));
            }
        }
        out
    }

    /// Gates on the longest path from the output to an input.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, above)) = stack.pop() {
            if let GateNode::Gate { children, .. } = node {
                deepest = deepest.max(above + 1);
                stack.extend(children.iter().map(|child| (child, above + 1)));
            }
        }
        deepest
    }

    pub fn gate_count(&self) -> usize {
        self.post_order()
            .into_iter()
            .filter(|node| matches!(node, GateNode::Gate { .. }))
            .count()
    }

    /// Evaluates the circuit directly, resolving variables through `lookup`.
    pub fn evaluate_with<F>(&self, lookup: &F) -> Result<bool, EvalError>
    where
        F: Fn(&str) -> Option<bool>,
    {
        let mut values: Vec<bool> = vec![];
        for node in self.post_order() {
            let value = match node {
                GateNode::Leaf(Token::Literal(value)) => *value,
                GateNode::Leaf(Token::Variable(name)) => {
                    lookup(name).ok_or_else(|| EvalError::UnresolvedVariable(name.clone()))?
                }
                GateNode::Leaf(_) => {
                    return Err(EvalError::MalformedExpression(Malformed::Parenthesis))
                }
                GateNode::Gate { operator, children } => {
                    let missing =
                        EvalError::MalformedExpression(Malformed::MissingOperand(*operator));
                    let split = values.len().checked_sub(children.len()).ok_or(missing.clone())?;
                    let inputs = values.split_off(split);
                    match inputs[..] {
                        [a] => operator.apply_unary(a).ok_or(missing)?,
                        [left, right] => operator.apply_binary(left, right).ok_or(missing)?,
                        _ => return Err(missing),
                    }
                }
            };
            values.push(value);
        }
        values
            .pop()
            .ok_or(EvalError::MalformedExpression(Malformed::Empty))
    }
}

// A long NOT chain nests one level per token; dropping it recursively would
// exhaust the stack.
impl Drop for GateNode {
    fn drop(&mut self) {
        let GateNode::Gate { children, .. } = self else {
            return;
        };
        let mut pending = std::mem::take(children);
        while let Some(mut node) = pending.pop() {
            if let GateNode::Gate { children, .. } = &mut node {
                pending.append(children);
            }
        }
    }
}

/// Builds the tree bottom-up with the same forward pass as the evaluator.
struct TreeBuilder {
    stack: Vec<GateNode>,
}

impl TreeBuilder {
    fn new(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
        }
    }

    fn pop_input(&mut self, op: Operator) -> Result<GateNode, EvalError> {
        self.stack
            .pop()
            .ok_or(EvalError::MalformedExpression(Malformed::MissingOperand(op)))
    }

    fn build_token(&mut self, token: &Token) -> Result<(), EvalError> {
        let node = match token {
            Token::Variable(_) | Token::Literal(_) => GateNode::Leaf(token.clone()),
            Token::Operator(op) => {
                let children = if op.arity() == 1 {
                    vec![self.pop_input(*op)?]
                } else {
                    let lower = self.pop_input(*op)?;
                    let upper = self.pop_input(*op)?;
                    vec![upper, lower]
                };
                GateNode::Gate {
                    operator: *op,
                    children,
                }
            }
            Token::LeftParen | Token::RightParen => {
                return Err(EvalError::MalformedExpression(Malformed::Parenthesis))
            }
        };
        self.stack.push(node);
        Ok(())
    }

    fn build(mut self, postfix: &[Token]) -> Result<GateNode, EvalError> {
        for token in postfix {
            self.build_token(token)?;
        }
        let unused = self.stack.len().saturating_sub(1);
        match self.stack.pop() {
            None => Err(EvalError::MalformedExpression(Malformed::Empty)),
            Some(root) if unused == 0 => Ok(root),
            Some(_) => Err(EvalError::MalformedExpression(Malformed::UnusedOperands(
                unused,
            ))),
        }
    }
}

/// Builds the gate tree for a postfix sequence.
pub fn build_tree(postfix: &[Token]) -> Result<GateNode, EvalError> {
    TreeBuilder::new(postfix.len()).build(postfix)
}
