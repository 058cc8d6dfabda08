//! Remote import locations (RFC 3986 subset)
//!
//! Authority, path segments and query are validated but kept as written:
//! percent-encoded triples are never decoded here.

use atrius_dhall_syntax::chars::{
    is_alphanum, is_digit, is_hex_digit, is_nonzero_digit, is_pchar, is_sub_delim,
    is_unreserved,
};
use atrius_dhall_syntax::{Expr, File, Scheme, Url};
use chumsky::prelude::*;

use crate::Extra;
use crate::primitives::{at_least, at_most, between, exactly, keyword, satisfy};
use crate::whitespace::{nonempty_whitespace, whitespace};

pub fn scheme<'src>() -> impl Parser<'src, &'src str, Scheme, Extra<'src>> + Clone {
    just("http")
        .ignore_then(just('s').or_not())
        .map(|s| if s.is_some() { Scheme::HTTPS } else { Scheme::HTTP })
}

/// `%` and two hex digits, kept verbatim.
pub fn pct_encoded<'src>() -> impl Parser<'src, &'src str, &'src str, Extra<'src>> + Clone {
    just('%').then(exactly(2, satisfy(is_hex_digit))).to_slice()
}

fn pchar<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    choice((satisfy(is_pchar).ignored(), pct_encoded().ignored()))
}

fn userinfo<'src>() -> impl Parser<'src, &'src str, &'src str, Extra<'src>> + Clone {
    choice((
        satisfy(|c| is_unreserved(c) || is_sub_delim(c) || c == ':').ignored(),
        pct_encoded().ignored(),
    ))
    .repeated()
    .to_slice()
}

fn h16<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    between(1, 4, satisfy(is_hex_digit)).ignored()
}

/// One of `250-255`, `200-249`, `100-199`, `10-99`, `0-9`, most specific
/// first.
pub fn dec_octet<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    choice((
        just("25").then(one_of("012345")).ignored(),
        just('2')
            .then(one_of("01234"))
            .then(satisfy(is_digit))
            .ignored(),
        just('1').then(exactly(2, satisfy(is_digit))).ignored(),
        satisfy(is_nonzero_digit).then(satisfy(is_digit)).ignored(),
        satisfy(is_digit).ignored(),
    ))
}

pub fn ipv4_address<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    dec_octet()
        .then(exactly(3, just('.').then(dec_octet())))
        .ignored()
}

/// `h16 ":" h16`, else an embedded IPv4 address.
fn ls32<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    choice((
        h16().then(just(':')).then(h16()).ignored(),
        ipv4_address(),
    ))
}

/// `k` repetitions of `h16 ":"`.
fn groups<'src>(k: usize) -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    exactly(k, h16().then(just(':'))).ignored()
}

/// The optional run before `::`: `h16` followed by up to `n` more
/// `":" h16`. Written this way so a greedy repetition never eats the first
/// colon of `::`.
fn compressed_prefix<'src>(n: usize) -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    h16()
        .then(at_most(n, just(':').then(h16())))
        .ignored()
        .or_not()
        .ignored()
}

/// The nine forms of RFC 3986 `IPv6address`, from no compression down to a
/// bare `::`. The first form that matches wins.
pub fn ipv6_address<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone + 'src {
    let compressed = || just("::");
    choice((
        groups(6).then(ls32()).ignored(),
        compressed().then(groups(5)).then(ls32()).ignored(),
        compressed_prefix(0)
            .then(compressed())
            .then(groups(4))
            .then(ls32())
            .ignored(),
        compressed_prefix(1)
            .then(compressed())
            .then(groups(3))
            .then(ls32())
            .ignored(),
        compressed_prefix(2)
            .then(compressed())
            .then(groups(2))
            .then(ls32())
            .ignored(),
        compressed_prefix(3)
            .then(compressed())
            .then(groups(1))
            .then(ls32())
            .ignored(),
        compressed_prefix(4).then(compressed()).then(ls32()).ignored(),
        compressed_prefix(5).then(compressed()).then(h16()).ignored(),
        compressed_prefix(6).then(compressed()).ignored(),
    ))
    .boxed()
}

/// `v` hex `.` then unreserved, sub-delims or `:`.
fn ipvfuture<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    one_of("vV")
        .then(at_least(1, satisfy(is_hex_digit)))
        .then(just('.'))
        .then(at_least(
            1,
            satisfy(|c| is_unreserved(c) || is_sub_delim(c) || c == ':'),
        ))
        .ignored()
}

fn ip_literal<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    choice((ipv6_address(), ipvfuture())).delimited_by(just('['), just(']'))
}

/// Alphanumeric runs joined by hyphen runs; no leading or trailing hyphen.
fn domain_label<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    let alphanum = || satisfy(is_alphanum).repeated().at_least(1);
    alphanum()
        .then(just('-').repeated().at_least(1).then(alphanum()).repeated())
        .ignored()
}

/// Dot-separated labels with a mandatory trailing dot: `example.com.`.
pub fn domain<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    domain_label()
        .then(just('.').then(domain_label()).repeated())
        .then(just('.'))
        .ignored()
}

pub fn host<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    choice((ip_literal(), ipv4_address(), domain()))
}

/// `[userinfo "@"] host [":" port]`, returned exactly as written.
pub fn authority<'src>() -> impl Parser<'src, &'src str, String, Extra<'src>> + Clone {
    userinfo()
        .then(just('@'))
        .or_not()
        .then(host())
        .then(just(':').then(satisfy(is_digit).repeated()).or_not())
        .to_slice()
        .map(String::from)
}

/// Zero or more `/`-prefixed segments. Each segment may be empty.
pub fn url_path<'src>() -> impl Parser<'src, &'src str, File, Extra<'src>> + Clone {
    just('/')
        .ignore_then(pchar().repeated().to_slice().map(String::from))
        .repeated()
        .collect::<Vec<String>>()
        .map(File::from_components)
}

pub fn query<'src>() -> impl Parser<'src, &'src str, String, Extra<'src>> + Clone {
    choice((pchar(), one_of("/?").ignored()))
        .repeated()
        .to_slice()
        .map(String::from)
}

/// A URL without headers.
pub fn http_raw<'src>() -> impl Parser<'src, &'src str, Url, Extra<'src>> + Clone + 'src {
    scheme()
        .then_ignore(just("://"))
        .then(authority())
        .then(url_path())
        .then(just('?').ignore_then(query()).or_not())
        .map(|(((scheme, authority), path), query)| Url {
            scheme,
            authority,
            path,
            query,
            headers: None,
        })
        .boxed()
}

/// A URL optionally followed by `using <headers>`.
pub fn http<'src, E>(
    import_expression: E,
) -> impl Parser<'src, &'src str, Url, Extra<'src>> + Clone + 'src
where
    E: Parser<'src, &'src str, Expr, Extra<'src>> + Clone + 'src,
{
    let headers = whitespace()
        .ignore_then(keyword("using"))
        .ignore_then(nonempty_whitespace())
        .ignore_then(import_expression);

    http_raw()
        .then(headers.or_not())
        .map(|(url, headers)| Url {
            headers: headers.map(Box::new),
            ..url
        })
}
