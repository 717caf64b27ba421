use descent_ast::{EvalError, Visitor};
use descent_lexer::{Token, TokenType};
use log::trace;

use super::{ParseError, Parser};

#[cfg(test)]
mod tests;

/// Converts an integer token's digits to its value.
///
/// The lexer only produces ASCII digit runs for integers, so the only way
/// this fails is a value past `i64::MAX`.
///
/// # Examples
///
/// ```
/// use descent_lexer::Lexer;
/// use descent_parser::parser::literals::parse_integer;
///
/// let mut lexer = Lexer::new("042");
/// let token = lexer.peek();
/// assert_eq!(parse_integer(&token), Ok(42));
/// ```
pub fn parse_integer(token: &Token<'_>) -> Result<i64, ParseError> {
    token
        .lexeme
        .parse::<i64>()
        .map_err(|_| ParseError::LiteralOutOfRange {
            lexeme: token.lexeme.to_string(),
            location: token.location,
        })
}

impl<'a, V> Parser<'a, V>
where
    V: Visitor,
    V::Error: Into<EvalError>,
{
    /// `factor := INTEGER | '(' expr ')'`
    pub(crate) fn parse_factor(&mut self) -> Result<V::Output, ParseError> {
        let token = self.peek()?;
        match token.token_type {
            TokenType::Integer => {
                let value = parse_integer(&token)?;
                self.advance(&token);
                trace!("literal {value}");
                self.fold_literal(value, token.location)
            }
            TokenType::LeftParen => {
                self.advance(&token);
                let inner = self.descend(token.location, |p| p.parse_expression())?;
                let close = self.peek()?;
                if close.token_type != TokenType::RightParen {
                    return Err(ParseError::UnclosedGroup {
                        open: token.location,
                        found: close.token_type,
                        lexeme: close.lexeme.to_string(),
                        location: close.location,
                    });
                }
                self.advance(&close);
                Ok(inner)
            }
            _ => Err(ParseError::unexpected(&token, "an integer or '('")),
        }
    }
}
