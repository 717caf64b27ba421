//! Lexer implementation for Descent expressions
//! Converts source text into tokens on demand for the parser

use logos::Logos;

use crate::token::{Location, Token, TokenType};
use crate::LogosToken;

/// The lexer holds the cursor of one tokenizing pass over a source string.
///
/// Tokens are produced lazily: [`Lexer::peek`] classifies the next token
/// without consuming it and [`Lexer::advance`] consumes it. Whitespace is
/// skipped internally and never returned.
pub struct Lexer<'a> {
    /// The source text being lexed
    source: &'a str,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based, in characters)
    column: usize,
    /// The current byte offset in the source
    offset: usize,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
    /// Token returned by the last `peek` that has not been advanced past
    lookahead: Option<Token<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line: 1,
            column: 1,
            offset: 0,
            inner: LogosToken::lexer(source),
            lookahead: None,
        }
    }

    /// The full source text this lexer was created with
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The unconsumed remainder of the source, starting at the lookahead
    /// token when one has been peeked
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// The current cursor location
    pub fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Return the next token without consuming it.
    ///
    /// Calling `peek` repeatedly without [`Lexer::advance`] returns the same
    /// token. At the end of the input an [`TokenType::EndOfInput`] token with
    /// an empty lexeme is returned; text that matches no pattern is returned
    /// as an [`TokenType::Invalid`] token carrying that text.
    pub fn peek(&mut self) -> Token<'a> {
        if let Some(token) = self.lookahead {
            return token;
        }
        let token = self.scan();
        lex_trace!("peeked {}", token);
        self.lookahead = Some(token);
        token
    }

    /// Consume `token`, which must be the token most recently returned by
    /// [`Lexer::peek`].
    ///
    /// Exactly `token.lexeme.len()` bytes are consumed from the front of the
    /// remaining input. Advancing past end of input leaves the lexer at end
    /// of input.
    ///
    /// # Panics
    ///
    /// Panics if no token has been peeked, or if `token` is not the peeked
    /// token.
    pub fn advance(&mut self, token: &Token<'a>) {
        let Some(pending) = self.lookahead.take() else {
            panic!("Lexer::advance({token}) called without a pending peek");
        };
        assert!(
            pending == *token,
            "Lexer::advance({token}) does not match the peeked token {pending}"
        );
        self.sync_position_to(token.end_offset());
        lex_trace!("advanced past {}", token);
    }

    /// Pull the next non-whitespace token out of the inner lexer
    fn scan(&mut self) -> Token<'a> {
        let (token_type, span) = match self.inner.next() {
            None => {
                // Only whitespace, if anything, was left
                self.sync_position_to(self.source.len());
                return Token::new(TokenType::EndOfInput, "", self.location());
            }
            Some(Ok(raw)) => (Self::convert_token(raw), self.inner.span()),
            Some(Err(())) => {
                // Keep the invalid lexeme on a character boundary so that a
                // stray multi-byte character is reported whole
                let mut span = self.inner.span();
                let mut end = span.end;
                while !self.source.is_char_boundary(end) {
                    end += 1;
                }
                self.inner.bump(end - span.end);
                span.end = end;
                (TokenType::Invalid, span)
            }
        };

        // Skipped whitespace before the token is consumed here
        self.sync_position_to(span.start);
        Token::new(token_type, &self.source[span], self.location())
    }

    /// Convert a LogosToken to our semantic TokenType
    fn convert_token(raw: LogosToken) -> TokenType {
        match raw {
            LogosToken::Integer => TokenType::Integer,
            LogosToken::Minus => TokenType::Minus,
            LogosToken::Plus => TokenType::Plus,
            LogosToken::Star => TokenType::Star,
            LogosToken::Slash => TokenType::Slash,
            LogosToken::Caret => TokenType::Caret,
            LogosToken::LeftParen => TokenType::LeftParen,
            LogosToken::RightParen => TokenType::RightParen,
            LogosToken::Whitespace => {
                unreachable!("whitespace is skipped by its logos callback")
            }
        }
    }

    /// Move the cursor forward to `target`, updating line and column.
    /// Columns count characters, not bytes.
    fn sync_position_to(&mut self, target: usize) {
        let text = &self.source[self.offset..target];

        let mut iter = text.chars().peekable();
        while let Some(c) = iter.next() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else if c == '\r' {
                // Windows line endings (\r\n) count once
                if iter.peek() == Some(&'\n') {
                    iter.next();
                }
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.offset = target;
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields every token up to, but not including, end of input
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.peek();
        if token.is_end() {
            return None;
        }
        self.advance(&token);
        Some(token)
    }
}

#[cfg(test)]
mod tests;
