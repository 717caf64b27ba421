//! Abstract Syntax Tree (AST) for Descent integer expressions.
//!
//! This crate defines the expression tree produced by the parser, its
//! evaluation and fully parenthesized rendering, and the [`visit::Visitor`]
//! fold used both to traverse a finished tree and to drive tree construction
//! during parsing.

pub mod ast;
pub mod eval;
pub mod visit;

// Re-export commonly used types
pub use ast::{BinaryExpressionNode, BinaryOperator, ExpressionNode};
pub use eval::{EvalError, Evaluator};
pub use visit::{TreeBuilder, VisitResult, Visitable, Visitor};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A result type for AST serialization.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, serde_json::Error>;

/// Serializes an AST node to a JSON string.
///
/// # Example
///
/// ```
/// use descent_ast::ast::*;
/// use descent_ast::to_json;
///
/// let expr = ExpressionNode::binary(
///     BinaryOperator::Add,
///     ExpressionNode::literal(1),
///     ExpressionNode::literal(2),
/// );
/// let json = to_json(&expr).unwrap();
///
/// assert!(json.contains(r#""operator": "Add""#));
/// assert!(json.contains(r#""Literal": 2"#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
}

/// Deserializes an AST node from a JSON string.
///
/// # Examples
///
/// ```
/// use descent_ast::ast::*;
/// use descent_ast::from_json;
///
/// let json = r#"{"Literal":42}"#;
/// let expr: ExpressionNode = from_json(json).unwrap();
/// assert_eq!(expr, ExpressionNode::literal(42));
/// ```
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    serde_json::from_str(json)
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::ast::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialization() -> Result<()> {
        let expr = ExpressionNode::binary(
            BinaryOperator::Pow,
            ExpressionNode::literal(2),
            ExpressionNode::binary(
                BinaryOperator::Pow,
                ExpressionNode::literal(2),
                ExpressionNode::literal(3),
            ),
        );

        let json = to_json(&expr)?;
        let deserialized: ExpressionNode = from_json(&json)?;
        assert_eq!(expr, deserialized);
        Ok(())
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result: Result<ExpressionNode> = from_json(r#"{"Binary":{"left":{"Literal":1}}}"#);
        assert!(result.is_err());
    }
}
