//! Integrity checks

use atrius_dhall_syntax::Hash;
use atrius_dhall_syntax::chars::is_hex_digit;
use chumsky::prelude::*;

use crate::Extra;
use crate::primitives::{exactly, satisfy};

/// `sha256:` followed by exactly 64 hex digits, decoded to a 32-byte digest.
///
/// A 65th hex digit is an error here rather than trailing input.
pub fn hash<'src>() -> impl Parser<'src, &'src str, Hash, Extra<'src>> + Clone {
    just("sha256:")
        .ignore_then(exactly(64, satisfy(is_hex_digit)))
        .then_ignore(satisfy(is_hex_digit).not())
        .try_map(|digits: &str, span| {
            Hash::sha256_from_hex(digits).map_err(|message| Rich::custom(span, message))
        })
}
