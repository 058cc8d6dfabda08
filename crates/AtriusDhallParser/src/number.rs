//! Natural, integer and double literals

use atrius_dhall_syntax::chars::{is_digit, is_hex_digit, is_nonzero_digit};
use chumsky::prelude::*;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::Extra;
use crate::primitives::{at_least, base, keyword, satisfy};

/// `0x` hex, decimal without a leading zero, or `0`.
///
/// `007` is not a natural: the `0` alternative matches and leaves `07`
/// behind for the caller to reject.
pub fn natural_literal<'src>() -> impl Parser<'src, &'src str, BigUint, Extra<'src>> + Clone {
    choice((
        just("0x")
            .ignore_then(at_least(1, satisfy(is_hex_digit)))
            .map(|digits| base(digits, 16)),
        satisfy(is_nonzero_digit)
            .then(satisfy(is_digit).repeated())
            .to_slice()
            .map(|digits| base(digits, 10)),
        just('0').to(BigUint::zero()),
    ))
}

fn sign<'src>() -> impl Parser<'src, &'src str, bool, Extra<'src>> + Clone {
    choice((just('+').to(false), just('-').to(true)))
}

/// An optionally signed natural. `true` in `sign` means negative.
pub fn integer_literal<'src>() -> impl Parser<'src, &'src str, BigInt, Extra<'src>> + Clone {
    sign()
        .or_not()
        .then(natural_literal())
        .map(|(negative, n)| {
            let value = BigInt::from(n);
            if negative == Some(true) { -value } else { value }
        })
}

/// Decimal doubles, then the keyword forms `Infinity`, `-Infinity`, `NaN`.
pub fn double_literal<'src>() -> impl Parser<'src, &'src str, f64, Extra<'src>> + Clone {
    let digits = || at_least(1, satisfy(is_digit));

    let exponent = one_of("eE")
        .ignore_then(sign().or_not())
        .then(digits())
        .map(|(negative, digits)| {
            let value = BigInt::from(base(digits, 10));
            if negative == Some(true) { -value } else { value }
        });

    let fraction_and_exponent = choice((
        just('.')
            .ignore_then(digits())
            .then(exponent.clone().or_not()),
        exponent.map(|e| ("", Some(e))),
    ));

    let numeric = sign()
        .or_not()
        .then(digits())
        .then(fraction_and_exponent)
        .try_map(|((negative, whole), (fraction, exponent)), span| {
            let mut mantissa_digits = String::with_capacity(whole.len() + fraction.len());
            mantissa_digits.push_str(whole);
            mantissa_digits.push_str(fraction);
            let mantissa = base(&mantissa_digits, 10);
            let exponent =
                exponent.unwrap_or_else(BigInt::zero) - BigInt::from(fraction.len());

            // One correctly rounded conversion; out-of-range exponents
            // saturate to infinity or zero.
            let value = format!("{mantissa}e{exponent}")
                .parse::<f64>()
                .map_err(|e| Rich::custom(span, format!("invalid double literal: {e}")))?;
            Ok(if negative == Some(true) { -value } else { value })
        });

    choice((
        numeric,
        keyword("Infinity").to(f64::INFINITY),
        just('-')
            .ignore_then(keyword("Infinity"))
            .to(f64::NEG_INFINITY),
        keyword("NaN").to(f64::NAN),
    ))
}
