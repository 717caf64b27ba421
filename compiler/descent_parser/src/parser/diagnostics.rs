use descent_ast::EvalError;
use descent_lexer::TokenType;

use super::ParseError;

/// A region of source text. `line` and `column` are 1-based, the column in
/// characters; `start..end` are byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

/// A user-facing description of a failed parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic with an explicit span
    pub fn at_span<S: Into<String>>(span: Span, message: S) -> Self {
        Self {
            message: message.into(),
            span,
            help: None,
        }
    }

    pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        let location = err.location();
        let span = Span {
            start: location.offset,
            end: location.offset + err.span_len(),
            line: location.line,
            column: location.column,
        };
        let diag = Diagnostic::at_span(span, message_for_error(err));
        match help_for_error(err) {
            Some(help) => diag.with_help(help),
            None => diag,
        }
    }
}

/// The error message without its trailing location; the span carries that.
fn message_for_error(err: &ParseError) -> String {
    match err {
        ParseError::LexicalError { lexeme, .. } => format!("Unrecognized input '{lexeme}'"),
        ParseError::UnexpectedToken {
            found, expected, ..
        } => format!("Expected {expected}, found {}", found.describe()),
        ParseError::UnclosedGroup { open, found, .. } => format!(
            "Unclosed '(' opened at {open}, found {}",
            found.describe()
        ),
        ParseError::LiteralOutOfRange { lexeme, .. } => {
            format!("Integer literal {lexeme} is too large")
        }
        ParseError::NestingTooDeep { limit, .. } => {
            format!("Expression nests deeper than {limit} levels")
        }
        ParseError::Arithmetic { source, .. } => {
            let mut message = source.to_string();
            if let Some(first) = message.get_mut(..1) {
                first.make_ascii_uppercase();
            }
            message
        }
    }
}

fn help_for_error(err: &ParseError) -> Option<String> {
    use TokenType::*;
    match err {
        ParseError::LexicalError { .. } => Some(
            "Expressions may only contain digits, whitespace, operators and parentheses"
                .to_string(),
        ),
        ParseError::UnexpectedToken { found, .. } => match found {
            EndOfInput => Some("The expression ended where a number was expected".to_string()),
            RightParen => Some("Did you forget a matching '(' earlier?".to_string()),
            Integer | LeftParen => {
                Some("Put an operator between the two operands".to_string())
            }
            tt if tt.is_operator() => Some(
                "Operators need an operand on both sides; there are no unary operators"
                    .to_string(),
            ),
            _ => None,
        },
        ParseError::UnclosedGroup { .. } => {
            Some("Add ')' to close the group".to_string())
        }
        ParseError::LiteralOutOfRange { .. } => Some(format!(
            "Integer literals must not exceed {}",
            i64::MAX
        )),
        ParseError::NestingTooDeep { .. } => {
            Some("Simplify the expression or raise the parser's depth limit".to_string())
        }
        ParseError::Arithmetic { source, .. } => match source {
            EvalError::DivisionByZero => {
                Some("The divisor, or the base of a negative power, is zero".to_string())
            }
            EvalError::Overflow { .. } => {
                Some("Results must fit in a 64-bit signed integer".to_string())
            }
        },
    }
}

/// Renders a diagnostic against its source: the message, the location, the
/// source line and a marker under the span (`^` for a single character or
/// end of input, `~` for longer spans).
pub fn render_snippet(diag: &Diagnostic, source: &str) -> String {
    let span = diag.span;
    let line_no = span.line.max(1);
    let line_text = source
        .split('\n')
        .nth(line_no - 1)
        .unwrap_or("")
        .trim_end_matches('\r');

    let width = source
        .get(span.start..span.end)
        .map(|s| s.chars().count())
        .unwrap_or(0);
    let marker = if width <= 1 {
        "^".to_string()
    } else {
        "~".repeat(width)
    };

    let gutter = line_no.to_string();
    let pad = " ".repeat(gutter.len());
    let indent = " ".repeat(span.column.saturating_sub(1));

    let mut out = String::new();
    out.push_str(&format!("error: {}\n", diag.message));
    out.push_str(&format!("{pad}--> line {}, col {}\n", line_no, span.column));
    out.push_str(&format!("{pad} |\n"));
    out.push_str(&format!("{gutter} | {line_text}\n"));
    out.push_str(&format!("{pad} | {indent}{marker}"));
    if let Some(help) = &diag.help {
        out.push_str(&format!("\n{pad} = help: {help}"));
    }
    out
}
