//! The operator productions: `expr`, `term` and `exponent`.
//!
//! `expr` and `term` loop and fold to the left, so `2-3-4` is `(2-3)-4`.
//! `exponent` recurses on its right operand, so `2^2^3` is `2^(2^3)`.

use descent_ast::{BinaryOperator, EvalError, Visitor};
use descent_lexer::TokenType;
use log::trace;

use super::{ParseError, Parser};

#[cfg(test)]
mod tests;

impl<'a, V> Parser<'a, V>
where
    V: Visitor,
    V::Error: Into<EvalError>,
{
    /// `expr := term ( ('+'|'-') term )*`
    pub(crate) fn parse_expression(&mut self) -> Result<V::Output, ParseError> {
        trace!("=== parse_expression ===");
        let mut left = self.parse_term()?;
        loop {
            let token = self.peek()?;
            let operator = match token.token_type {
                TokenType::Plus => BinaryOperator::Add,
                TokenType::Minus => BinaryOperator::Sub,
                _ => break,
            };
            self.advance(&token);
            let right = self.parse_term()?;
            left = self.fold_binary(operator, left, right, token.location)?;
        }
        Ok(left)
    }

    /// `term := exponent ( ('*'|'/') exponent )*`
    pub(crate) fn parse_term(&mut self) -> Result<V::Output, ParseError> {
        trace!("=== parse_term ===");
        let mut left = self.parse_exponent()?;
        loop {
            let token = self.peek()?;
            let operator = match token.token_type {
                TokenType::Star => BinaryOperator::Mul,
                TokenType::Slash => BinaryOperator::Div,
                _ => break,
            };
            self.advance(&token);
            let right = self.parse_exponent()?;
            left = self.fold_binary(operator, left, right, token.location)?;
        }
        Ok(left)
    }

    /// `exponent := factor ( '^' exponent )?`
    pub(crate) fn parse_exponent(&mut self) -> Result<V::Output, ParseError> {
        trace!("=== parse_exponent ===");
        let base = self.parse_factor()?;
        let token = self.peek()?;
        if token.token_type != TokenType::Caret {
            return Ok(base);
        }
        self.advance(&token);
        let power = self.descend(token.location, |p| p.parse_exponent())?;
        self.fold_binary(BinaryOperator::Pow, base, power, token.location)
    }
}
