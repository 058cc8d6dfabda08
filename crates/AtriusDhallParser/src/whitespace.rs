//! Whitespace and comments

use atrius_dhall_syntax::chars::{is_block_comment_char, is_line_comment_char};
use chumsky::prelude::*;

use crate::Extra;
use crate::primitives::satisfy;

/// `\n` or `\r\n`. A lone `\r` is not a line end.
pub fn end_of_line<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    choice((just('\n').ignored(), just("\r\n").ignored()))
}

/// `--` and the rest of the line, without the line end.
pub fn line_comment_prefix<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    just("--")
        .then(satisfy(is_line_comment_char).repeated())
        .ignored()
}

pub fn line_comment<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    line_comment_prefix().then(end_of_line()).ignored()
}

/// `{- ... -}`, nesting. Unterminated comments fail.
pub fn block_comment<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    recursive(|nested| {
        let content = choice((
            nested,
            end_of_line(),
            satisfy(is_block_comment_char).ignored(),
        ))
        .and_is(just("-}").not());

        just("{-")
            .then(content.repeated())
            .then(just("-}"))
            .ignored()
    })
}

pub fn whitespace_chunk<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    choice((
        just(' ').ignored(),
        just('\t').ignored(),
        end_of_line(),
        line_comment(),
        block_comment(),
    ))
}

/// Zero or more whitespace chunks. Never fails.
pub fn whitespace<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    whitespace_chunk().repeated().ignored()
}

/// One or more whitespace chunks.
pub fn nonempty_whitespace<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    whitespace_chunk().repeated().at_least(1).ignored()
}
