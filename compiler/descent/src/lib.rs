use std::fmt;

use descent_ast::{Evaluator, TreeBuilder};
use descent_parser::{render_snippet, Diagnostic, ParseError, Parser, ParserConfig};
use serde::Serialize;

/// A parse failure, flattened for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub message: String,
    pub line: usize,
    pub column: usize,
    /// The rendered source snippet; text mode prints this instead.
    #[serde(skip)]
    pub snippet: String,
}

impl ErrorReport {
    pub fn from_parse_error(err: &ParseError, source: &str) -> Self {
        let diag = Diagnostic::from(err);
        Self {
            message: err.to_string(),
            line: diag.span.line,
            column: diag.span.column,
            snippet: render_snippet(&diag, source),
        }
    }
}

/// The outcome of evaluating one expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalReport {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl EvalReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Text mode lines for stdout, or the diagnostic snippet on failure.
    pub fn lines(&self) -> Vec<String> {
        match (&self.error, self.result, &self.tree) {
            (Some(err), _, _) => vec![err.snippet.clone()],
            (None, Some(result), Some(tree)) => {
                vec![format!("result: {result}"), format!("tree: {tree}")]
            }
            _ => Vec::new(),
        }
    }
}

/// Folds `source` to a value and renders its tree, both under `config`.
///
/// The value comes from the folding strategy and the tree from the
/// tree-building one, so a syntax or arithmetic error is reported once,
/// by whichever strategy runs into it first.
pub fn analyze_source(source: &str, config: ParserConfig) -> EvalReport {
    let outcome = Parser::with_config(source, Evaluator, config)
        .parse()
        .and_then(|value| {
            let tree = Parser::with_config(source, TreeBuilder, config).parse()?;
            Ok((value, tree.render()))
        });

    match outcome {
        Ok((value, tree)) => EvalReport {
            source: source.to_string(),
            result: Some(value),
            tree: Some(tree),
            error: None,
        },
        Err(err) => {
            log::debug!("evaluation of {source:?} failed: {err}");
            EvalReport {
                source: source.to_string(),
                result: None,
                tree: None,
                error: Some(ErrorReport::from_parse_error(&err, source)),
            }
        }
    }
}

/// A built-in self-test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    pub source: &'static str,
    pub expected: i64,
}

const fn fixture(source: &'static str, expected: i64) -> Fixture {
    Fixture { source, expected }
}

pub const FIXTURES: [Fixture; 9] = [
    fixture("2+2", 4),
    fixture("(2-3-4)", -5),
    fixture("2+3*4", 14),
    fixture("((2+3)*(4+1))/5", 5),
    fixture("6/2*3", 9),
    fixture("2+3+4+5+6/2", 17),
    fixture("2^2^3", 256),
    fixture("((3+4)^2)", 49),
    fixture("3^(9-7)-8", 1),
];

/// One fixture run through both strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub fixture: Fixture,
    /// The folding strategy's answer
    pub folded: Result<i64, String>,
    /// The built tree, rendered, and its evaluation
    pub tree: Result<(String, i64), String>,
}

impl CaseReport {
    pub fn run(fixture: Fixture, config: ParserConfig) -> Self {
        let folded = Parser::with_config(fixture.source, Evaluator, config)
            .parse()
            .map_err(|e| e.to_string());
        let tree = Parser::with_config(fixture.source, TreeBuilder, config)
            .parse()
            .map_err(|e| e.to_string())
            .and_then(|tree| {
                let value = tree.evaluate().map_err(|e| e.to_string())?;
                Ok((tree.render(), value))
            });
        Self {
            fixture,
            folded,
            tree,
        }
    }

    pub fn passed(&self) -> bool {
        let expected = self.fixture.expected;
        self.folded.as_ref().is_ok_and(|v| *v == expected)
            && self.tree.as_ref().is_ok_and(|(_, v)| *v == expected)
    }
}

fn show(outcome: &Result<i64, String>) -> String {
    match outcome {
        Ok(v) => v.to_string(),
        Err(e) => format!("error: {e}"),
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "testing: {}", self.fixture.source)?;
        writeln!(f, "  folded: {}", show(&self.folded))?;
        match &self.tree {
            Ok((rendered, value)) => writeln!(f, "  tree:   {rendered} = {value}")?,
            Err(e) => writeln!(f, "  tree:   error: {e}")?,
        }
        let verdict = if self.passed() { "PASS" } else { "FAIL" };
        write!(f, "  {verdict} (expected {})", self.fixture.expected)
    }
}

pub fn run_selftest(config: ParserConfig) -> Vec<CaseReport> {
    FIXTURES
        .iter()
        .map(|&fixture| CaseReport::run(fixture, config))
        .collect()
}
