use super::*;
use crate::parser::{parse_to_tree, parse_to_value};
use descent_ast::ExpressionNode;
use descent_lexer::Lexer;
use pretty_assertions::assert_eq;

fn first_token(input: &str) -> Token<'_> {
    Lexer::new(input).peek()
}

#[test]
fn test_parse_integer_literal() {
    assert_eq!(parse_integer(&first_token("42")), Ok(42));
    assert_eq!(parse_integer(&first_token("0")), Ok(0));
    assert_eq!(parse_integer(&first_token("007")), Ok(7));
}

#[test]
fn test_largest_literal() {
    assert_eq!(
        parse_integer(&first_token("9223372036854775807")),
        Ok(i64::MAX)
    );
}

#[test]
fn test_literal_out_of_range() {
    let err = parse_integer(&first_token("9223372036854775808")).unwrap_err();
    assert_eq!(
        err,
        ParseError::LiteralOutOfRange {
            lexeme: "9223372036854775808".to_string(),
            location: Default::default(),
        }
    );
    // Both strategies reject it the same way
    assert_eq!(parse_to_tree("1+99999999999999999999").unwrap_err().location().column, 3);
}

#[test]
fn test_parenthesized_factor() {
    assert_eq!(parse_to_tree("(((7)))"), Ok(ExpressionNode::literal(7)));
    assert_eq!(parse_to_value("((2+3)*(4+1))/5"), Ok(5));
}

#[test]
fn test_unclosed_group() {
    let err = parse_to_tree("(2+3").unwrap_err();
    match err {
        ParseError::UnclosedGroup {
            open,
            found,
            location,
            ..
        } => {
            assert_eq!(open.offset, 0);
            assert_eq!(found, TokenType::EndOfInput);
            assert_eq!(location.offset, 4);
        }
        other => panic!("expected UnclosedGroup, got {other:?}"),
    }
}

#[test]
fn test_group_closed_by_wrong_token() {
    // The inner expression stops at the second integer
    let err = parse_to_value("(1 2)").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnclosedGroup {
            found: TokenType::Integer,
            ..
        }
    ));
}

#[test]
fn test_empty_group() {
    let err = parse_to_value("()").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            found: TokenType::RightParen,
            ..
        }
    ));
}

#[test]
fn test_unary_minus_is_not_a_factor() {
    let err = parse_to_value("-1").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            found: TokenType::Minus,
            ..
        }
    ));
}
