//! Visitor pattern for folding expression trees.
//!
//! A [`Visitor`] receives nodes in post-order: both operands of a binary
//! node are folded (left first) before the node itself. The same trait is
//! what the parser drives while it recognizes input, which makes building a
//! tree and computing a value directly two strategies of one grammar walk.

use std::convert::Infallible;

use crate::ast::*;

/// The result type for visitor operations.
pub type VisitResult<V> = Result<<V as Visitor>::Output, <V as Visitor>::Error>;

/// A post-order fold over expressions.
pub trait Visitor {
    /// The value each node folds to.
    type Output;
    /// The error a fold step may fail with.
    type Error;

    fn visit_literal(&mut self, value: i64) -> VisitResult<Self>;

    fn visit_binary(
        &mut self,
        operator: BinaryOperator,
        left: Self::Output,
        right: Self::Output,
    ) -> VisitResult<Self>;
}

/// A trait for types that can be visited by a `Visitor`.
pub trait Visitable {
    /// Folds this node and its children with the given visitor.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V>;
}

/// One step of an iterative post-order fold
enum Step<'t> {
    Enter(&'t ExpressionNode),
    Combine(BinaryOperator),
}

/// Folds the steps on `work` with an explicit stack, so the height of the
/// tree never reaches the call stack.
fn fold<'t, V: Visitor + ?Sized>(mut work: Vec<Step<'t>>, visitor: &mut V) -> VisitResult<V> {
    let mut folded: Vec<V::Output> = Vec::new();
    while let Some(step) = work.pop() {
        match step {
            Step::Enter(ExpressionNode::Literal(value)) => {
                folded.push(visitor.visit_literal(*value)?);
            }
            Step::Enter(ExpressionNode::Binary(bin)) => {
                work.push(Step::Combine(bin.operator));
                work.push(Step::Enter(&bin.right));
                work.push(Step::Enter(&bin.left));
            }
            Step::Combine(operator) => {
                let (Some(right), Some(left)) = (folded.pop(), folded.pop()) else {
                    unreachable!("both operands are folded before their operator");
                };
                folded.push(visitor.visit_binary(operator, left, right)?);
            }
        }
    }
    match folded.pop() {
        Some(value) => Ok(value),
        None => unreachable!("a tree folds to exactly one value"),
    }
}

impl Visitable for ExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V> {
        fold(vec![Step::Enter(self)], visitor)
    }
}

impl Visitable for BinaryExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V> {
        let work = vec![
            Step::Combine(self.operator),
            Step::Enter(&self.right),
            Step::Enter(&self.left),
        ];
        fold(work, visitor)
    }
}

/// A visitor that rebuilds the tree it is fed. Used by the parser to
/// produce an AST.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeBuilder;

impl Visitor for TreeBuilder {
    type Output = ExpressionNode;
    type Error = Infallible;

    fn visit_literal(&mut self, value: i64) -> VisitResult<Self> {
        Ok(ExpressionNode::literal(value))
    }

    fn visit_binary(
        &mut self,
        operator: BinaryOperator,
        left: ExpressionNode,
        right: ExpressionNode,
    ) -> VisitResult<Self> {
        Ok(ExpressionNode::binary(operator, left, right))
    }
}
