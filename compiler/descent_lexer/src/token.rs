use std::fmt;

/// Represents a token's location in the source text.
///
/// Line and column numbers are 1-based; the column counts characters, not
/// bytes. The offset is the 0-based byte offset from the start of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// The 1-based line number in the source
    pub line: usize,
    /// The 1-based column number in the source
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

/// The kind of a token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// A run of ASCII digits
    Integer,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// No input left after skipping whitespace
    EndOfInput,
    /// Text the lexer could not classify
    Invalid,
}

impl TokenType {
    /// Returns true for the five binary operator tokens
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenType::Minus | TokenType::Plus | TokenType::Star | TokenType::Slash | TokenType::Caret
        )
    }

    /// A short human readable name, used in diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            TokenType::Integer => "integer literal",
            TokenType::Minus => "'-'",
            TokenType::Plus => "'+'",
            TokenType::Star => "'*'",
            TokenType::Slash => "'/'",
            TokenType::Caret => "'^'",
            TokenType::LeftParen => "'('",
            TokenType::RightParen => "')'",
            TokenType::EndOfInput => "end of input",
            TokenType::Invalid => "unrecognized input",
        }
    }
}

/// A token in the source, including its type, lexeme, and location.
///
/// The lexeme borrows the exact matched text from the source. For an
/// end-of-input token it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// The type of the token
    pub token_type: TokenType,
    /// The original source text of the token
    pub lexeme: &'a str,
    /// The location of the token in the source
    pub location: Location,
}

impl<'a> Token<'a> {
    /// Creates a new token
    pub fn new(token_type: TokenType, lexeme: &'a str, location: Location) -> Self {
        Self {
            token_type,
            lexeme,
            location,
        }
    }

    /// Returns true if this token ends the input
    pub fn is_end(&self) -> bool {
        self.token_type == TokenType::EndOfInput
    }

    /// Byte offset one past the last byte of the lexeme
    pub fn end_offset(&self) -> usize {
        self.location.offset + self.lexeme.len()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})@{}", self.token_type, self.lexeme, self.location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
