//! Single-character parsers, bounded repetition and digit folding
//!
//! The repetition helpers return the matched source slice rather than a
//! collection: almost every caller either stores the text verbatim (URL
//! authorities, percent-encoded triples) or folds it into a number.

use chumsky::prelude::*;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::Extra;

/// Matches one character satisfying `pred`.
pub fn satisfy<'src>(
    pred: fn(char) -> bool,
) -> impl Parser<'src, &'src str, char, Extra<'src>> + Clone {
    any().filter(move |c: &char| pred(*c))
}

/// Exactly `n` occurrences of `p`.
pub fn exactly<'src, O, P>(
    n: usize,
    p: P,
) -> impl Parser<'src, &'src str, &'src str, Extra<'src>> + Clone
where
    P: Parser<'src, &'src str, O, Extra<'src>> + Clone,
{
    p.repeated().exactly(n).to_slice()
}

/// Up to `n` occurrences of `p`, as many as match. Zero is a success.
pub fn at_most<'src, O, P>(
    n: usize,
    p: P,
) -> impl Parser<'src, &'src str, &'src str, Extra<'src>> + Clone
where
    P: Parser<'src, &'src str, O, Extra<'src>> + Clone,
{
    p.repeated().at_most(n).to_slice()
}

/// `n` occurrences of `p`, then any further matches.
pub fn at_least<'src, O, P>(
    n: usize,
    p: P,
) -> impl Parser<'src, &'src str, &'src str, Extra<'src>> + Clone
where
    P: Parser<'src, &'src str, O, Extra<'src>> + Clone,
{
    p.repeated().at_least(n).to_slice()
}

/// Between `lo` and `hi` occurrences of `p` (inclusive).
pub fn between<'src, O, P>(
    lo: usize,
    hi: usize,
    p: P,
) -> impl Parser<'src, &'src str, &'src str, Extra<'src>> + Clone
where
    P: Parser<'src, &'src str, O, Extra<'src>> + Clone,
{
    p.repeated().at_least(lo).at_most(hi).to_slice()
}

/// Folds digits left to right: `result = result * radix + digit`.
///
/// Characters that are not digits of `radix` are skipped; the grammar only
/// ever hands over slices it has already validated.
pub fn base(digits: &str, radix: u32) -> BigUint {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(BigUint::zero(), |acc, digit| acc * radix + digit)
}

/// `kw` as a whole word: it must not run on into a longer label.
pub fn keyword<'src>(kw: &'static str) -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    just(kw)
        .ignored()
        .then_ignore(satisfy(atrius_dhall_syntax::chars::is_simple_label_next_char).not())
}
