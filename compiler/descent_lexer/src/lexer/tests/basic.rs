use super::super::*;
use crate::token::TokenType;
use pretty_assertions::assert_eq;

fn kinds(input: &str) -> Vec<TokenType> {
    Lexer::new(input).map(|t| t.token_type).collect()
}

#[test]
fn test_lexer_basic() {
    let input = "2+3*4";
    let tokens: Vec<Token> = Lexer::new(input).collect();

    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].token_type, TokenType::Integer);
    assert_eq!(tokens[0].lexeme, "2");
    assert_eq!(tokens[1].token_type, TokenType::Plus);
    assert_eq!(tokens[2].token_type, TokenType::Integer);
    assert_eq!(tokens[3].token_type, TokenType::Star);
    assert_eq!(tokens[4].token_type, TokenType::Integer);
    assert_eq!(tokens[4].lexeme, "4");
}

#[test]
fn test_lexer_operators_and_delimiters() {
    assert_eq!(
        kinds("- + * / ^ ( )"),
        vec![
            TokenType::Minus,
            TokenType::Plus,
            TokenType::Star,
            TokenType::Slash,
            TokenType::Caret,
            TokenType::LeftParen,
            TokenType::RightParen,
        ]
    );
}

#[test]
fn test_integer_run_is_one_token() {
    let tokens: Vec<Token> = Lexer::new("007 123456789012345678901234567890").collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].lexeme, "007");
    // Range checking is the parser's job
    assert_eq!(tokens[1].lexeme, "123456789012345678901234567890");
}

#[test]
fn test_minus_is_never_part_of_a_literal() {
    assert_eq!(
        kinds("-5"),
        vec![TokenType::Minus, TokenType::Integer]
    );
}

#[test]
fn test_whitespace_is_skipped() {
    assert_eq!(
        kinds(" \t 1 \n\r\n +\x0B2\x0C "),
        vec![TokenType::Integer, TokenType::Plus, TokenType::Integer]
    );
}

#[test]
fn test_whitespace_never_surfaces_as_a_token() {
    let mut lexer = Lexer::new("\t\n\r\x0B\x0C 7 \r\n");
    let mut seen = Vec::new();
    loop {
        let token = lexer.peek();
        lexer.advance(&token);
        if token.token_type == TokenType::EndOfInput {
            break;
        }
        seen.push(token.token_type);
    }
    assert_eq!(seen, vec![TokenType::Integer]);
    assert_eq!(kinds(" \t\n\r\x0B\x0C"), Vec::<TokenType>::new());
}

#[test]
fn test_invalid_input_is_a_token() {
    let tokens: Vec<Token> = Lexer::new("2 $ 3").collect();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].token_type, TokenType::Invalid);
    assert_eq!(tokens[1].lexeme, "$");
    assert_eq!(tokens[2].token_type, TokenType::Integer);
}

#[test]
fn test_empty_and_blank_input() {
    assert!(kinds("").is_empty());
    assert!(kinds("   \n ").is_empty());

    let mut lexer = Lexer::new("  ");
    let end = lexer.peek();
    assert_eq!(end.token_type, TokenType::EndOfInput);
    assert_eq!(end.lexeme, "");
}
