use crate::parser::{parse_to_tree, parse_to_value, ParseError};
use descent_ast::{BinaryOperator, ExpressionNode};
use descent_lexer::TokenType;
use pretty_assertions::assert_eq;

fn lit(value: i64) -> ExpressionNode {
    ExpressionNode::literal(value)
}

fn bin(operator: BinaryOperator, left: ExpressionNode, right: ExpressionNode) -> ExpressionNode {
    ExpressionNode::binary(operator, left, right)
}

#[test]
fn test_operator_precedence() {
    // 2 + (3 * 4), not (2 + 3) * 4
    let tree = parse_to_tree("2 + 3 * 4").unwrap();
    assert_eq!(
        tree,
        bin(BinaryOperator::Add, lit(2), bin(BinaryOperator::Mul, lit(3), lit(4)))
    );
}

#[test]
fn test_subtraction_is_left_associative() {
    let tree = parse_to_tree("2-3-4").unwrap();
    assert_eq!(
        tree,
        bin(BinaryOperator::Sub, bin(BinaryOperator::Sub, lit(2), lit(3)), lit(4))
    );
    assert_eq!(parse_to_value("2-3-4"), Ok(-5));
}

#[test]
fn test_division_and_multiplication_share_a_level() {
    assert_eq!(parse_to_tree("6/2*3").unwrap().render(), "((6/2)*3)");
    assert_eq!(parse_to_value("6/2*3"), Ok(9));
}

#[test]
fn test_exponent_is_right_associative() {
    let tree = parse_to_tree("2^2^3").unwrap();
    assert_eq!(
        tree,
        bin(BinaryOperator::Pow, lit(2), bin(BinaryOperator::Pow, lit(2), lit(3)))
    );
    assert_eq!(parse_to_value("2^2^3"), Ok(256));
}

#[test]
fn test_exponent_binds_tighter_than_product() {
    assert_eq!(parse_to_tree("2*3^2").unwrap().render(), "(2*(3^2))");
    assert_eq!(parse_to_tree("3^2*2").unwrap().render(), "((3^2)*2)");
}

#[test]
fn test_dangling_operator() {
    let err = parse_to_value("2+").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            found: TokenType::EndOfInput,
            ..
        }
    ));
}

#[test]
fn test_dangling_exponent() {
    let err = parse_to_tree("2^").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            found: TokenType::EndOfInput,
            ..
        }
    ));
}

#[test]
fn test_doubled_operator_is_rejected() {
    let err = parse_to_tree("2 * * 3").unwrap_err();
    match err {
        ParseError::UnexpectedToken {
            found, location, ..
        } => {
            assert_eq!(found, TokenType::Star);
            assert_eq!(location.column, 5);
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}
