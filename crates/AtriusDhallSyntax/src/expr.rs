//! Expression leaves produced by the lexical grammar

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::Signed;

use crate::chars::{is_simple_label_first_char, is_simple_label_next_char};
use crate::import::Import;
use crate::reserved::{Builtin, is_keyword};
use crate::text::TextLit;

/// A variable reference: a label plus a de Bruijn index.
///
/// `x@1` refers to the second-innermost binder named `x`; a bare `x` has
/// index 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct V {
    pub label: String,
    pub index: usize,
}

impl V {
    pub fn new(label: impl Into<String>, index: usize) -> Self {
        V {
            label: label.into(),
            index,
        }
    }
}

/// A Dhall expression.
///
/// Only the leaves built by the lexical layer live here; compound forms
/// belong to the expression grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `x`, `x@n`
    Var(V),
    /// `Natural/show`, `Bool`, `True`, ...
    Builtin(Builtin),
    /// `0`, `42`, `0x2A`
    NaturalLit(BigUint),
    /// `+1`, `-0x10`
    IntegerLit(BigInt),
    /// `1.5`, `-2e10`, `Infinity`, `NaN`
    DoubleLit(f64),
    /// `"..."` and `''...''`
    TextLit(TextLit),
    /// `./file`, `https://host./path`, `env:HOME`, `missing`, ...
    Import(Import),
}

/// Writes a label, backtick-quoting it when it would not re-parse as the
/// same unquoted simple label.
pub fn write_label(f: &mut fmt::Formatter<'_>, label: &str) -> fmt::Result {
    let mut chars = label.chars();
    let simple = chars.next().is_some_and(is_simple_label_first_char)
        && chars.all(is_simple_label_next_char)
        && !is_keyword(label);
    if simple {
        f.write_str(label)
    } else {
        write!(f, "`{label}`")
    }
}

impl fmt::Display for V {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_label(f, &self.label)?;
        if self.index != 0 {
            write!(f, "@{}", self.index)?;
        }
        Ok(())
    }
}

fn write_double(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{value:?}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(v) => write!(f, "{v}"),
            Expr::Builtin(b) => write!(f, "{b}"),
            Expr::NaturalLit(n) => write!(f, "{n}"),
            Expr::IntegerLit(i) if i.is_negative() => write!(f, "{i}"),
            Expr::IntegerLit(i) => write!(f, "+{i}"),
            Expr::DoubleLit(d) => write_double(f, *d),
            Expr::TextLit(t) => write!(f, "{t}"),
            Expr::Import(i) => write!(f, "{i}"),
        }
    }
}
