//! Example of using the visitor pattern to traverse and process the AST.

use std::convert::Infallible;

use descent_ast::ast::*;
use descent_ast::visit::*;
use descent_ast::to_json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a sample AST
    let ast = create_sample_ast();
    println!("Expression: {}", ast.render());
    println!("Value: {}", ast.evaluate()?);

    // Count nodes in the AST
    let mut counter = NodeCounter::default();
    ast.accept(&mut counter)?;

    println!("\nAST Node Counts:");
    println!("  Literals: {}", counter.literal_count);
    println!("  Binary Operations: {}", counter.binary_op_count);

    // Reverse Polish notation
    println!("\nRPN: {}", ast.accept(&mut RpnPrinter)?);

    // Print the AST
    println!("\nPretty-printed AST:");
    for line in ast.accept(&mut AstPrinter)? {
        println!("{line}");
    }

    println!("\nJSON:\n{}", to_json(&ast)?);

    Ok(())
}

/// A visitor that counts the number of nodes of each type in the AST.
#[derive(Default)]
pub struct NodeCounter {
    pub literal_count: usize,
    pub binary_op_count: usize,
}

impl Visitor for NodeCounter {
    type Output = ();
    type Error = Infallible;

    fn visit_literal(&mut self, _value: i64) -> VisitResult<Self> {
        self.literal_count += 1;
        Ok(())
    }

    fn visit_binary(&mut self, _operator: BinaryOperator, _: (), _: ()) -> VisitResult<Self> {
        self.binary_op_count += 1;
        Ok(())
    }
}

/// A visitor that renders the AST in reverse Polish notation.
pub struct RpnPrinter;

impl Visitor for RpnPrinter {
    type Output = String;
    type Error = Infallible;

    fn visit_literal(&mut self, value: i64) -> VisitResult<Self> {
        Ok(value.to_string())
    }

    fn visit_binary(
        &mut self,
        operator: BinaryOperator,
        left: String,
        right: String,
    ) -> VisitResult<Self> {
        Ok(format!("{left} {right} {operator}"))
    }
}

/// A visitor that pretty-prints the AST, one line per node.
pub struct AstPrinter;

impl Visitor for AstPrinter {
    type Output = Vec<String>;
    type Error = Infallible;

    fn visit_literal(&mut self, value: i64) -> VisitResult<Self> {
        Ok(vec![format!("Literal: {value}")])
    }

    fn visit_binary(
        &mut self,
        operator: BinaryOperator,
        left: Vec<String>,
        right: Vec<String>,
    ) -> VisitResult<Self> {
        let mut lines = vec![format!("Binary: {operator}")];
        lines.extend(left.into_iter().map(|l| format!("  {l}")));
        lines.extend(right.into_iter().map(|l| format!("  {l}")));
        Ok(lines)
    }
}

fn create_sample_ast() -> ExpressionNode {
    // 2 + 3 * 4 ^ 2
    ExpressionNode::binary(
        BinaryOperator::Add,
        ExpressionNode::literal(2),
        ExpressionNode::binary(
            BinaryOperator::Mul,
            ExpressionNode::literal(3),
            ExpressionNode::binary(
                BinaryOperator::Pow,
                ExpressionNode::literal(4),
                ExpressionNode::literal(2),
            ),
        ),
    )
}
