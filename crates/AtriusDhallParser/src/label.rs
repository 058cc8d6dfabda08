//! Labels, variables and built-in names

use atrius_dhall_syntax::chars::{
    is_quoted_label_char, is_simple_label_first_char, is_simple_label_next_char,
};
use atrius_dhall_syntax::{Builtin, V, is_builtin, is_keyword};
use chumsky::prelude::*;
use num_traits::ToPrimitive;

use crate::Extra;
use crate::number::natural_literal;
use crate::primitives::satisfy;
use crate::whitespace::whitespace;

/// The maximal run of simple-label characters, keyword or not.
fn simple_label_text<'src>() -> impl Parser<'src, &'src str, &'src str, Extra<'src>> + Clone {
    satisfy(is_simple_label_first_char)
        .then(satisfy(is_simple_label_next_char).repeated())
        .to_slice()
}

/// An unquoted label that is not a reserved keyword.
pub fn simple_label<'src>() -> impl Parser<'src, &'src str, String, Extra<'src>> + Clone {
    simple_label_text().try_map(|label: &str, span| {
        if is_keyword(label) {
            Err(Rich::custom(
                span,
                format!("`{label}` is a reserved keyword and cannot be used as a label"),
            ))
        } else {
            Ok(label.to_string())
        }
    })
}

/// A backtick-quoted label. Keywords are allowed here.
pub fn quoted_label<'src>() -> impl Parser<'src, &'src str, String, Extra<'src>> + Clone {
    satisfy(is_quoted_label_char)
        .repeated()
        .to_slice()
        .delimited_by(just('`'), just('`'))
        .map(String::from)
}

pub fn label<'src>() -> impl Parser<'src, &'src str, String, Extra<'src>> + Clone {
    choice((quoted_label(), simple_label()))
}

/// A label usable as a variable name: quoted or not, it must not spell a
/// built-in.
pub fn nonreserved_label<'src>() -> impl Parser<'src, &'src str, String, Extra<'src>> + Clone {
    label().try_map(|label: String, span| {
        if is_builtin(&label) {
            Err(Rich::custom(
                span,
                format!("`{label}` is a built-in and cannot be used as a variable name"),
            ))
        } else {
            Ok(label)
        }
    })
}

/// `x` or `x@n`, with optional whitespace around the `@`.
pub fn variable<'src>() -> impl Parser<'src, &'src str, V, Extra<'src>> + Clone {
    let index = whitespace()
        .ignore_then(just('@'))
        .ignore_then(whitespace())
        .ignore_then(natural_literal())
        .try_map(|n, span| {
            n.to_usize()
                .ok_or_else(|| Rich::custom(span, format!("de Bruijn index {n} is too large")))
        });

    nonreserved_label()
        .then(index.or_not())
        .map(|(label, index)| V::new(label, index.unwrap_or(0)))
}

/// A built-in name, matched as a whole label so that `Natural` never
/// shadows `Natural/show` and `Naturalx` is left for the variable rule.
pub fn builtin<'src>() -> impl Parser<'src, &'src str, Builtin, Extra<'src>> + Clone {
    simple_label_text().try_map(|label: &str, span| {
        Builtin::from_label(label)
            .ok_or_else(|| Rich::custom(span, format!("`{label}` is not a built-in")))
    })
}
