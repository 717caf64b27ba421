//! Recursive-descent parser for Descent expressions.
//!
//! ```text
//! input    := expr END
//! expr     := term ( ('+'|'-') term )*
//! term     := exponent ( ('*'|'/') exponent )*
//! exponent := factor ( '^' exponent )?
//! factor   := INTEGER | '(' expr ')'
//! ```
//!
//! The parser never builds anything itself. Every recognized literal and
//! operator application is handed to a [`Visitor`], so the same walk either
//! builds an [`ExpressionNode`] ([`TreeBuilder`]) or folds straight to a value
//! ([`Evaluator`]).

use descent_ast::{EvalError, Evaluator, ExpressionNode, TreeBuilder, Visitor};
use descent_lexer::{Lexer, Location, Token, TokenType};
use log::{debug, trace};

pub mod diagnostics;
pub mod error;
pub mod expressions;
pub mod literals;

pub use diagnostics::{render_snippet, Diagnostic, Span};
pub use error::ParseError;

#[cfg(test)]
mod tests;

/// Parser limits.
///
/// Only productions that recurse count against `max_depth`: each open `(`
/// group and each `^` whose right operand is itself a power. Chains of
/// `+ - * /` are folded in a loop and may be arbitrarily long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of groups and `^` chains.
    pub max_depth: usize,
}

impl ParserConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parses `text` and folds it directly to its value.
///
/// ```
/// assert_eq!(descent_parser::parse_to_value("2^2^3"), Ok(256));
/// ```
pub fn parse_to_value(text: &str) -> Result<i64, ParseError> {
    Parser::new(text, Evaluator).parse()
}

/// Parses `text` into an expression tree.
///
/// ```
/// let tree = descent_parser::parse_to_tree("2-3-4").unwrap();
/// assert_eq!(tree.render(), "((2-3)-4)");
/// ```
pub fn parse_to_tree(text: &str) -> Result<ExpressionNode, ParseError> {
    Parser::new(text, TreeBuilder).parse()
}

/// A single-use parser over one source string, driving the visitor `V`.
pub struct Parser<'a, V: Visitor> {
    lexer: Lexer<'a>,
    visitor: V,
    config: ParserConfig,
    depth: usize,
}

impl<'a, V> Parser<'a, V>
where
    V: Visitor,
    V::Error: Into<EvalError>,
{
    pub fn new(source: &'a str, visitor: V) -> Self {
        Self::with_config(source, visitor, ParserConfig::default())
    }

    pub fn with_config(source: &'a str, visitor: V, config: ParserConfig) -> Self {
        Self {
            lexer: Lexer::new(source),
            visitor,
            config,
            depth: 0,
        }
    }

    /// Parses the whole input. Anything left after the top-level expression is
    /// an error.
    pub fn parse(mut self) -> Result<V::Output, ParseError> {
        debug!("parsing {:?}", self.lexer.source());
        let result = self.parse_input();
        match &result {
            Ok(_) => debug!("parse succeeded"),
            Err(e) => debug!("parse failed: {e}"),
        }
        result
    }

    fn parse_input(&mut self) -> Result<V::Output, ParseError> {
        let expr = self.parse_expression()?;
        let token = self.peek()?;
        if !token.is_end() {
            return Err(ParseError::unexpected(&token, "an operator or end of input"));
        }
        Ok(expr)
    }

    /// Peeks at the lookahead, rejecting text the lexer could not classify.
    pub(crate) fn peek(&mut self) -> Result<Token<'a>, ParseError> {
        let token = self.lexer.peek();
        trace!("lookahead {token}");
        if token.token_type == TokenType::Invalid {
            return Err(ParseError::LexicalError {
                lexeme: token.lexeme.to_string(),
                location: token.location,
            });
        }
        Ok(token)
    }

    pub(crate) fn advance(&mut self, token: &Token<'a>) {
        self.lexer.advance(token);
    }

    /// Runs `f` one nesting level deeper.
    pub(crate) fn descend<T>(
        &mut self,
        at: Location,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.config.max_depth,
                location: at,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn fold_literal(&mut self, value: i64, at: Location) -> Result<V::Output, ParseError> {
        self.visitor
            .visit_literal(value)
            .map_err(|e| ParseError::arithmetic(e.into(), at))
    }

    /// Hands one operator application to the visitor.
    pub(crate) fn fold_binary(
        &mut self,
        operator: descent_ast::BinaryOperator,
        left: V::Output,
        right: V::Output,
        at: Location,
    ) -> Result<V::Output, ParseError> {
        trace!("fold {operator} at {at}");
        self.visitor
            .visit_binary(operator, left, right)
            .map_err(|e| ParseError::arithmetic(e.into(), at))
    }
}
