//! Primitive expressions
//!
//! The smallest expression grammar that closes the loop through text
//! interpolation and `using` headers: literals, imports, built-ins,
//! variables and parentheses. Operators, `let`, lambdas, records and
//! application are not part of it.

use atrius_dhall_syntax::Expr;
use chumsky::prelude::*;
use chumsky::recursive::Direct;

use crate::Extra;
use crate::import::import;
use crate::label::{builtin, variable};
use crate::number::{double_literal, integer_literal, natural_literal};
use crate::text::text_literal;
use crate::whitespace::whitespace;

/// One expression with no surrounding whitespace.
///
/// Alternatives are tried in order: double, natural, integer, text,
/// import, built-in, variable, parenthesised expression. `1.5` and `1e3`
/// are doubles, `1` falls through to natural, `+1` to integer.
pub fn primitive_expression<'src>()
-> impl Parser<'src, &'src str, Expr, Extra<'src>> + Clone + 'src {
    recursive(|expr: Recursive<Direct<'src, 'src, &'src str, Expr, Extra<'src>>>| {
        let parenthesised = expr
            .clone()
            .padded_by(whitespace())
            .delimited_by(just('('), just(')'));

        choice((
            double_literal().map(Expr::DoubleLit),
            natural_literal().map(Expr::NaturalLit),
            integer_literal().map(Expr::IntegerLit),
            text_literal(expr.clone()).map(Expr::TextLit),
            import(expr).map(Expr::Import),
            builtin().map(Expr::Builtin),
            variable().map(Expr::Var),
            parenthesised,
        ))
        .boxed()
    })
}
