use descent_ast::ast::{BinaryOperator, ExpressionNode};
use descent_parser::parse_to_tree;
use pretty_assertions::assert_eq;

fn unwrap_binary(expr: &ExpressionNode) -> (&ExpressionNode, BinaryOperator, &ExpressionNode) {
    match expr {
        ExpressionNode::Binary(bin) => (&bin.left, bin.operator, &bin.right),
        other => panic!("Expected binary expression, got {other:?}"),
    }
}

#[test]
fn test_operator_precedence() {
    // Multiplication binds tighter than addition
    let expr = parse_to_tree("2 + 3 * 4").unwrap();
    let (left, op, right) = unwrap_binary(&expr);
    assert_eq!(op, BinaryOperator::Add);
    assert_eq!(left, &ExpressionNode::Literal(2));

    let (mul_left, mul_op, mul_right) = unwrap_binary(right);
    assert_eq!(mul_op, BinaryOperator::Mul);
    assert_eq!(mul_left, &ExpressionNode::Literal(3));
    assert_eq!(mul_right, &ExpressionNode::Literal(4));
}

#[test]
fn test_parentheses_override_precedence() {
    let expr = parse_to_tree("(2 + 3) * 4").unwrap();
    let (left, op, right) = unwrap_binary(&expr);
    assert_eq!(op, BinaryOperator::Mul);
    assert_eq!(right, &ExpressionNode::Literal(4));
    let (_, inner_op, _) = unwrap_binary(left);
    assert_eq!(inner_op, BinaryOperator::Add);
}

#[test]
fn test_every_level_in_one_expression() {
    let cases = [
        ("1+2*3^4", "(1+(2*(3^4)))"),
        ("1^2*3+4", "(((1^2)*3)+4)"),
        ("1-2+3", "((1-2)+3)"),
        ("8/4/2", "((8/4)/2)"),
        ("2^3^2", "(2^(3^2))"),
        ("(2^3)^2", "((2^3)^2)"),
        ("3^(9-7)-8", "((3^(9-7))-8)"),
    ];
    for (input, rendered) in cases {
        assert_eq!(parse_to_tree(input).unwrap().render(), rendered, "{input}");
    }
}
