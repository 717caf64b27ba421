// Abstract Syntax Tree (AST) definitions for Descent expressions

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::eval::{EvalError, Evaluator};
use crate::visit::{TreeBuilder, Visitable};

/// An expression tree.
///
/// Binary nodes own their children exclusively; a tree is never mutated
/// after construction.
///
/// A flat chain such as `1+1+...+1` parses to a left spine as tall as the
/// chain is long, so every whole-tree operation here (evaluation, rendering,
/// equality, hashing, cloning and drop) walks the tree with an explicit stack
/// instead of recursing. Derived `Debug` and the serde impls still recurse.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExpressionNode {
    Literal(i64),
    Binary(Box<BinaryExpressionNode>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryExpressionNode {
    pub left: ExpressionNode,
    pub operator: BinaryOperator,
    pub right: ExpressionNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOperator {
    /// The source character of this operator
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
            BinaryOperator::Pow => '^',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl ExpressionNode {
    pub fn literal(value: i64) -> Self {
        ExpressionNode::Literal(value)
    }

    pub fn binary(operator: BinaryOperator, left: ExpressionNode, right: ExpressionNode) -> Self {
        ExpressionNode::Binary(Box::new(BinaryExpressionNode {
            left,
            operator,
            right,
        }))
    }

    /// Evaluates the tree, left operand before right.
    ///
    /// ```
    /// use descent_ast::ast::{BinaryOperator, ExpressionNode};
    ///
    /// let tree = ExpressionNode::binary(
    ///     BinaryOperator::Sub,
    ///     ExpressionNode::binary(BinaryOperator::Sub, ExpressionNode::literal(2), ExpressionNode::literal(3)),
    ///     ExpressionNode::literal(4),
    /// );
    /// assert_eq!(tree.evaluate(), Ok(-5));
    /// ```
    pub fn evaluate(&self) -> Result<i64, EvalError> {
        self.accept(&mut Evaluator)
    }

    /// Renders the tree fully parenthesized, e.g. `((2-3)-4)`.
    ///
    /// The grammar has no unary minus, so a tree holding a negative literal
    /// (possible through [`ExpressionNode::literal`] or JSON, never through
    /// the parser) renders to text such as `(-7+1)` that does not parse back.
    /// The output nests one group per level of height, so re-parsing a tall
    /// tree is subject to the parser's group nesting limit.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Height of the tree; a literal has depth 1
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            if let ExpressionNode::Binary(bin) = node {
                pending.push((&bin.left, level + 1));
                pending.push((&bin.right, level + 1));
            }
        }
        deepest
    }
}

/// One step of the iterative renderer
enum Piece<'t> {
    Node(&'t ExpressionNode),
    Operator(BinaryOperator),
    Close,
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(ExpressionNode::Literal(value)) => write!(f, "{value}")?,
                Piece::Node(ExpressionNode::Binary(bin)) => {
                    f.write_str("(")?;
                    pending.push(Piece::Close);
                    pending.push(Piece::Node(&bin.right));
                    pending.push(Piece::Operator(bin.operator));
                    pending.push(Piece::Node(&bin.left));
                }
                Piece::Operator(operator) => write!(f, "{operator}")?,
                Piece::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}

impl Clone for ExpressionNode {
    fn clone(&self) -> Self {
        match self.accept(&mut TreeBuilder) {
            Ok(copy) => copy,
            Err(never) => match never {},
        }
    }
}

impl PartialEq for ExpressionNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (ExpressionNode::Literal(a), ExpressionNode::Literal(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (ExpressionNode::Binary(a), ExpressionNode::Binary(b)) => {
                    if a.operator != b.operator {
                        return false;
                    }
                    pending.push((&a.right, &b.right));
                    pending.push((&a.left, &b.left));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for ExpressionNode {}

impl Hash for ExpressionNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Pre-order with a tag per node, which is unambiguous for a fixed arity
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                ExpressionNode::Literal(value) => {
                    state.write_u8(0);
                    value.hash(state);
                }
                ExpressionNode::Binary(bin) => {
                    state.write_u8(1);
                    bin.operator.hash(state);
                    pending.push(&bin.right);
                    pending.push(&bin.left);
                }
            }
        }
    }
}

impl Drop for ExpressionNode {
    fn drop(&mut self) {
        let ExpressionNode::Binary(bin) = self else {
            return;
        };
        let mut pending = vec![take_child(&mut bin.left), take_child(&mut bin.right)];
        while let Some(mut node) = pending.pop() {
            if let ExpressionNode::Binary(bin) = &mut node {
                pending.push(take_child(&mut bin.left));
                pending.push(take_child(&mut bin.right));
            }
            // `node` now has only literal children and drops without recursing
        }
    }
}

fn take_child(slot: &mut ExpressionNode) -> ExpressionNode {
    std::mem::replace(slot, ExpressionNode::Literal(0))
}
