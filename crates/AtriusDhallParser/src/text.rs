//! Double-quoted and single-quoted text literals
//!
//! Every chunk parser yields a `TextLit` and a literal is the sum of its
//! chunks, so adjacent plain spans merge and interpolations keep their
//! position.

use atrius_dhall_syntax::chars::{is_double_quote_char, is_hex_digit, is_single_quote_char};
use atrius_dhall_syntax::{Expr, TextLit};
use chumsky::prelude::*;

use crate::Extra;
use crate::primitives::{at_least, between, exactly, satisfy};
use crate::whitespace::{end_of_line, whitespace};

fn hex_digit<'src>() -> impl Parser<'src, &'src str, char, Extra<'src>> + Clone {
    satisfy(is_hex_digit)
}

/// Four hex digits naming a BMP scalar value other than a surrogate or the
/// `U+FFFE`/`U+FFFF` noncharacters.
fn unbraced_escape<'src>() -> impl Parser<'src, &'src str, &'src str, Extra<'src>> + Clone {
    choice((
        one_of("0123456789ABCabc")
            .then(exactly(3, hex_digit()))
            .to_slice(),
        one_of("Dd")
            .then(one_of("01234567"))
            .then(exactly(2, hex_digit()))
            .to_slice(),
        one_of("Ee").then(exactly(3, hex_digit())).to_slice(),
        one_of("Ff")
            .then(exactly(2, hex_digit()))
            .then(one_of("0123456789ABCDabcd"))
            .to_slice(),
    ))
}

/// The low 16 bits of a supplementary-plane code point, excluding the
/// plane's two trailing noncharacters.
fn unicode_suffix<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    choice((
        one_of("0123456789ABCDEabcde")
            .then(exactly(3, hex_digit()))
            .ignored(),
        one_of("Ff")
            .then(exactly(2, hex_digit()))
            .then(one_of("0123456789ABCDabcd"))
            .ignored(),
    ))
}

/// The body of a braced escape after its leading zeros.
fn braced_codepoint<'src>() -> impl Parser<'src, &'src str, &'src str, Extra<'src>> + Clone {
    choice((
        just("10").then(unicode_suffix()).to_slice(),
        hex_digit().then(unicode_suffix()).to_slice(),
        unbraced_escape(),
        between(1, 3, hex_digit()),
    ))
}

/// What follows `\u`: `XXXX` or `{...}`. Only-zero braces denote U+0000.
pub fn unicode_escape<'src>() -> impl Parser<'src, &'src str, char, Extra<'src>> + Clone {
    let braced = choice((
        just('0').repeated().ignore_then(braced_codepoint()),
        at_least(1, just('0')),
    ))
    .delimited_by(just('{'), just('}'));

    choice((unbraced_escape(), braced)).try_map(|digits: &str, span| {
        u32::from_str_radix(digits, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| Rich::custom(span, format!("invalid unicode escape `{digits}`")))
    })
}

fn double_quote_escape<'src>() -> impl Parser<'src, &'src str, char, Extra<'src>> + Clone {
    just('\\').ignore_then(choice((
        just('"').to('"'),
        just('$').to('$'),
        just('\\').to('\\'),
        just('/').to('/'),
        just('b').to('\u{8}'),
        just('f').to('\u{C}'),
        just('n').to('\n'),
        just('r').to('\r'),
        just('t').to('\t'),
        just('u').ignore_then(unicode_escape()),
    )))
}

/// `${ expr }`, with whitespace allowed inside the braces.
pub fn interpolation<'src, E>(expr: E) -> impl Parser<'src, &'src str, Expr, Extra<'src>> + Clone
where
    E: Parser<'src, &'src str, Expr, Extra<'src>> + Clone,
{
    just("${")
        .ignore_then(whitespace())
        .ignore_then(expr)
        .then_ignore(whitespace())
        .then_ignore(just('}'))
}

pub fn double_quote_literal<'src, E>(
    expr: E,
) -> impl Parser<'src, &'src str, TextLit, Extra<'src>> + Clone
where
    E: Parser<'src, &'src str, Expr, Extra<'src>> + Clone,
{
    let plain = satisfy(is_double_quote_char)
        .and_is(just("${").not())
        .repeated()
        .at_least(1)
        .to_slice()
        .map(TextLit::from);

    let chunk = choice((
        interpolation(expr).map(TextLit::interpolation),
        double_quote_escape().map(TextLit::from),
        plain,
    ));

    chunk
        .repeated()
        .collect::<Vec<TextLit>>()
        .delimited_by(just('"'), just('"'))
        .map(|chunks: Vec<TextLit>| chunks.into_iter().sum::<TextLit>())
}

/// `''` + line end, then content up to the closing `''`.
///
/// Line ends are kept verbatim and no indentation is stripped.
pub fn single_quote_literal<'src, E>(
    expr: E,
) -> impl Parser<'src, &'src str, TextLit, Extra<'src>> + Clone
where
    E: Parser<'src, &'src str, Expr, Extra<'src>> + Clone,
{
    let content = satisfy(is_single_quote_char)
        .and_is(just("''").not())
        .and_is(just("${").not())
        .repeated()
        .at_least(1)
        .to_slice()
        .map(TextLit::from);

    let chunk = choice((
        interpolation(expr).map(TextLit::interpolation),
        just("'''").to(TextLit::from("''")),
        just("''${").to(TextLit::from("${")),
        content,
        end_of_line().to_slice().map(TextLit::from),
    ));

    just("''")
        .ignore_then(end_of_line())
        .ignore_then(chunk.repeated().collect::<Vec<TextLit>>())
        .then_ignore(just("''"))
        .map(|chunks: Vec<TextLit>| chunks.into_iter().sum::<TextLit>())
}

pub fn text_literal<'src, E>(expr: E) -> impl Parser<'src, &'src str, TextLit, Extra<'src>> + Clone
where
    E: Parser<'src, &'src str, Expr, Extra<'src>> + Clone,
{
    choice((double_quote_literal(expr.clone()), single_quote_literal(expr)))
}
