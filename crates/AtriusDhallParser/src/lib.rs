//! # Dhall Lexical Grammar
//!
//! This crate implements the lexical and literal layer of the
//! [Dhall](https://dhall-lang.org) grammar with [chumsky] combinators:
//! whitespace and comments, labels and built-ins, numeric and text literals,
//! and imports (local paths, URLs, environment variables, `missing`,
//! SHA-256 integrity checks and `as Text` / `as Location` modes).
//!
//! ## Architecture
//!
//! - **Primitives** (`primitives.rs`): character matching, bounded repetition
//!   and exact big-integer digit folding
//! - **Whitespace** (`whitespace.rs`): blanks, line ends, line comments and
//!   nested block comments
//! - **Labels** (`label.rs`): simple and quoted labels, variables with de
//!   Bruijn indices, built-in names
//! - **Numbers** (`number.rs`): naturals, integers and doubles
//! - **Text** (`text.rs`): double- and single-quoted literals with
//!   interpolation
//! - **Imports** (`url.rs`, `hash.rs`, `import.rs`): import locations and
//!   their assembly
//! - **Expressions** (`expression.rs`): a primitive expression grammar that
//!   feeds interpolations and `using` headers
//!
//! Productions that embed an expression take the expression parser as an
//! argument, so a fuller grammar can reuse every production here unchanged.
//! The value types live in `atrius-dhall-syntax`.
//!
//! ## Usage
//!
//! ```rust
//! use atrius_dhall_parser::{parse_expression, parse_natural};
//! use atrius_dhall_syntax::{Expr, ImportMode};
//! use num_bigint::BigUint;
//!
//! assert_eq!(parse_natural("0x1A").unwrap(), BigUint::from(26u32));
//!
//! let expr = parse_expression("./config.dhall as Text").unwrap();
//! match expr {
//!     Expr::Import(import) => assert_eq!(import.mode, ImportMode::RawText),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use atrius_dhall_syntax::{Expr, Hash, Import, TextLit};
use chumsky::error::Rich;
use chumsky::prelude::*;
use num_bigint::{BigInt, BigUint};
use tracing::{debug, trace};

pub mod cli;
pub mod error;
pub mod expression;
pub mod hash;
pub mod import;
pub mod label;
pub mod number;
pub mod parse_debug;
pub mod primitives;
pub mod text;
pub mod url;
pub mod whitespace;

pub use error::{DhallResult, DhallSyntaxError, SyntaxDiagnostic};

/// Parser state shared by every production: rich errors over `char` input.
pub type Extra<'src> = extra::Err<Rich<'src, char>>;

/// Runs `parser` over the whole of `source`.
fn parse_all<'src, T>(
    production: &'static str,
    parser: impl Parser<'src, &'src str, T, Extra<'src>>,
    source: &'src str,
) -> DhallResult<T> {
    debug!(production, len = source.len(), "parsing");
    match parser.then_ignore(end()).parse(source).into_result() {
        Ok(value) => {
            trace!(production, "parsed");
            Ok(value)
        }
        Err(errors) => {
            let diagnostics: Vec<SyntaxDiagnostic> = errors
                .iter()
                .map(|e| SyntaxDiagnostic::from_rich(source, e))
                .collect();
            debug!(production, diagnostics = diagnostics.len(), "parse failed");
            Err(DhallSyntaxError::Parse(diagnostics))
        }
    }
}

/// Parses a complete source: one primitive expression with optional
/// surrounding whitespace and comments. A final line comment may end
/// without a line break.
pub fn parse_expression(source: &str) -> DhallResult<Expr> {
    let complete = expression::primitive_expression()
        .padded_by(whitespace::whitespace())
        .then_ignore(whitespace::line_comment_prefix().or_not());
    parse_all("expression", complete, source)
}

pub fn parse_import(source: &str) -> DhallResult<Import> {
    parse_all(
        "import",
        import::import(expression::primitive_expression()),
        source,
    )
}

pub fn parse_text_literal(source: &str) -> DhallResult<TextLit> {
    parse_all(
        "text",
        text::text_literal(expression::primitive_expression()),
        source,
    )
}

pub fn parse_natural(source: &str) -> DhallResult<BigUint> {
    parse_all("natural", number::natural_literal(), source)
}

pub fn parse_integer(source: &str) -> DhallResult<BigInt> {
    parse_all("integer", number::integer_literal(), source)
}

pub fn parse_double(source: &str) -> DhallResult<f64> {
    parse_all("double", number::double_literal(), source)
}

/// A simple or quoted label. Built-in names are accepted.
pub fn parse_label(source: &str) -> DhallResult<String> {
    parse_all("label", label::label(), source)
}

/// A label that may name a variable: neither a keyword (unquoted) nor a
/// built-in (quoted or not).
pub fn parse_nonreserved_label(source: &str) -> DhallResult<String> {
    parse_all("nonreserved_label", label::nonreserved_label(), source)
}

pub fn parse_hash(source: &str) -> DhallResult<Hash> {
    parse_all("hash", hash::hash(), source)
}
