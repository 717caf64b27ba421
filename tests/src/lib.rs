//! Shared helpers for the workspace integration tests.

use descent_ast::ExpressionNode;
use descent_parser::{parse_to_tree, parse_to_value, ParseError};

/// Routes log output through the test harness; safe to call repeatedly.
pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs both parse strategies over one input.
pub fn both_strategies(
    source: &str,
) -> (Result<i64, ParseError>, Result<ExpressionNode, ParseError>) {
    (parse_to_value(source), parse_to_tree(source))
}
