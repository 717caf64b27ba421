use descent_ast::EvalError;
use descent_lexer::{Location, Token, TokenType};
use thiserror::Error;

/// Why a parse was abandoned. Every error is final for the current input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lookahead was text the lexer could not classify.
    #[error("unrecognized input '{lexeme}' at {location}")]
    LexicalError { lexeme: String, location: Location },

    /// The lookahead matches no alternative of the current production.
    #[error("expected {expected}, found {} at {location}", .found.describe())]
    UnexpectedToken {
        found: TokenType,
        lexeme: String,
        expected: &'static str,
        location: Location,
    },

    /// A `(` group was parsed up to its inner expression but not closed.
    #[error("expected ')' to close the group opened at {open}, found {} at {location}", .found.describe())]
    UnclosedGroup {
        open: Location,
        found: TokenType,
        lexeme: String,
        location: Location,
    },

    #[error("integer literal {lexeme} does not fit in 64 bits at {location}")]
    LiteralOutOfRange { lexeme: String, location: Location },

    #[error("expression nests deeper than {limit} levels at {location}")]
    NestingTooDeep { limit: usize, location: Location },

    /// Folding a subexpression to a value failed.
    #[error("{source} at {location}")]
    Arithmetic { source: EvalError, location: Location },
}

impl ParseError {
    pub(crate) fn unexpected(token: &Token<'_>, expected: &'static str) -> Self {
        ParseError::UnexpectedToken {
            found: token.token_type,
            lexeme: token.lexeme.to_string(),
            expected,
            location: token.location,
        }
    }

    pub(crate) fn arithmetic(source: EvalError, location: Location) -> Self {
        ParseError::Arithmetic { source, location }
    }

    /// Where in the source the error was detected
    pub fn location(&self) -> Location {
        match self {
            ParseError::LexicalError { location, .. }
            | ParseError::UnexpectedToken { location, .. }
            | ParseError::UnclosedGroup { location, .. }
            | ParseError::LiteralOutOfRange { location, .. }
            | ParseError::NestingTooDeep { location, .. }
            | ParseError::Arithmetic { location, .. } => *location,
        }
    }

    /// Byte length of the offending text, zero at end of input
    pub fn span_len(&self) -> usize {
        match self {
            ParseError::LexicalError { lexeme, .. }
            | ParseError::UnexpectedToken { lexeme, .. }
            | ParseError::UnclosedGroup { lexeme, .. }
            | ParseError::LiteralOutOfRange { lexeme, .. } => lexeme.len(),
            // Operator or group token
            ParseError::NestingTooDeep { .. } | ParseError::Arithmetic { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(line: usize, column: usize, offset: usize) -> Location {
        Location {
            line,
            column,
            offset,
        }
    }

    #[test]
    fn test_messages_name_the_offending_token() {
        let err = ParseError::UnexpectedToken {
            found: TokenType::EndOfInput,
            lexeme: String::new(),
            expected: "an integer or '('",
            location: at(1, 3, 2),
        };
        assert_eq!(
            err.to_string(),
            "expected an integer or '(', found end of input at 1:3"
        );
        assert_eq!(err.span_len(), 0);

        let err = ParseError::UnclosedGroup {
            open: at(1, 1, 0),
            found: TokenType::EndOfInput,
            lexeme: String::new(),
            location: at(1, 5, 4),
        };
        assert_eq!(
            err.to_string(),
            "expected ')' to close the group opened at 1:1, found end of input at 1:5"
        );
    }

    #[test]
    fn test_arithmetic_error_wraps_source() {
        use std::error::Error as _;

        let err = ParseError::arithmetic(EvalError::DivisionByZero, at(1, 2, 1));
        assert_eq!(err.to_string(), "division by zero at 1:2");
        assert_eq!(err.location(), at(1, 2, 1));
        assert!(err.source().is_some());
    }
}
