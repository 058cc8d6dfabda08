//! Error types for parsing and for the CLI

use std::fmt;
use std::ops::Range;

use chumsky::error::Rich;
use chumsky::span::Span;
use thiserror::Error;

/// Result type alias for Dhall syntax operations
pub type DhallResult<T> = Result<T, DhallSyntaxError>;

#[derive(Debug, Error)]
pub enum DhallSyntaxError {
    /// The source is not well-formed. Holds at least one diagnostic.
    #[error("{}", render_diagnostics(.0))]
    Parse(Vec<SyntaxDiagnostic>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid arguments, such as neither an expression nor a file.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// One parse failure, detached from the source it was reported against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxDiagnostic {
    /// Byte range in the source
    pub span: Range<usize>,
    /// 1-based
    pub line: usize,
    /// 1-based, counted in characters
    pub column: usize,
    pub message: String,
}

impl SyntaxDiagnostic {
    pub fn from_rich(source: &str, error: &Rich<'_, char>) -> Self {
        let span = error.span().start()..error.span().end();
        let (line, column) = line_column(source, span.start);
        SyntaxDiagnostic {
            span,
            line,
            column,
            message: error.to_string(),
        }
    }
}

impl fmt::Display for SyntaxDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let column = before
        .rsplit('\n')
        .next()
        .map_or(0, |last| last.chars().count())
        + 1;
    (line, column)
}

fn render_diagnostics(diagnostics: &[SyntaxDiagnostic]) -> String {
    let rendered: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
    format!("Parse error: {}", rendered.join("; "))
}
