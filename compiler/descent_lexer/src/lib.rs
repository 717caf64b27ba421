//! Descent lexical analyzer
//!
//! This crate turns the text of an integer expression into a pull-based
//! stream of tokens for the parser. The raw scanner is generated by `logos`;
//! [`Lexer`] wraps it with one token of lookahead and an explicit
//! `peek`/`advance` protocol.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Emits a `log::trace!` record when the `logging` feature is enabled.
macro_rules! lex_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::trace!($($arg)*);
        }
    };
}

pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use lexer::Lexer;
pub use logos_token::LogosToken;
pub use token::{Location, Token, TokenType};
