//! Raw token set recognized by the generated `logos` scanner.

use logos::Logos;

/// Raw token type used by the logos scanner.
///
/// None of the patterns overlap, so the scanner's longest-match rule
/// reproduces the classification order integer, `-`, `+`, `*`, `/`, `^`,
/// whitespace, `(`, `)`. Anything else comes back from the scanner as
/// `Err(())` and is surfaced as [`crate::TokenType::Invalid`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LogosToken {
    // Integer literals; the value is parsed by the parser so that
    // out-of-range literals can be reported with their location
    #[regex(r"[0-9]+")]
    Integer,

    // Operators
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,

    // Whitespace (skipped)
    #[regex(r"[ \t\n\r\f\v]+", logos::skip)]
    Whitespace,

    // Delimiters
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
}
