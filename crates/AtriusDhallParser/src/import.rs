//! Local paths, environment variables, `missing` and import assembly

use atrius_dhall_syntax::chars::{
    is_bash_env_first_char, is_bash_env_next_char, is_path_char, is_posix_env_char,
    is_quoted_path_char,
};
use atrius_dhall_syntax::{Expr, File, FilePrefix, Import, ImportMode, ImportType};
use chumsky::prelude::*;

use crate::Extra;
use crate::hash::hash;
use crate::primitives::{at_least, keyword, satisfy};
use crate::url::http;
use crate::whitespace::{nonempty_whitespace, whitespace};

/// `/component` where the component is a run of path characters or a
/// double-quoted run that may contain spaces and other punctuation.
fn path_component<'src>() -> impl Parser<'src, &'src str, String, Extra<'src>> + Clone {
    let quoted = at_least(1, satisfy(is_quoted_path_char)).delimited_by(just('"'), just('"'));
    let unquoted = at_least(1, satisfy(is_path_char));

    just('/')
        .ignore_then(choice((quoted, unquoted)))
        .map(String::from)
}

pub fn path<'src>() -> impl Parser<'src, &'src str, File, Extra<'src>> + Clone {
    path_component()
        .repeated()
        .at_least(1)
        .collect::<Vec<String>>()
        .map(File::from_components)
}

/// `../p`, `./p`, `~/p` or `/p`. `..` is tried before `.`.
pub fn local<'src>() -> impl Parser<'src, &'src str, (FilePrefix, File), Extra<'src>> + Clone {
    choice((
        just("..").ignore_then(path()).map(|f| (FilePrefix::Parent, f)),
        just('.').ignore_then(path()).map(|f| (FilePrefix::Here, f)),
        just('~').ignore_then(path()).map(|f| (FilePrefix::Home, f)),
        path().map(|f| (FilePrefix::Absolute, f)),
    ))
}

fn bash_environment_variable<'src>() -> impl Parser<'src, &'src str, String, Extra<'src>> + Clone
{
    satisfy(is_bash_env_first_char)
        .then(satisfy(is_bash_env_next_char).repeated())
        .to_slice()
        .map(String::from)
}

fn posix_environment_variable<'src>()
-> impl Parser<'src, &'src str, String, Extra<'src>> + Clone {
    let escape = just('\\').ignore_then(choice((
        just('"').to('"'),
        just('\\').to('\\'),
        just('a').to('\u{7}'),
        just('b').to('\u{8}'),
        just('f').to('\u{C}'),
        just('n').to('\n'),
        just('r').to('\r'),
        just('t').to('\t'),
        just('v').to('\u{B}'),
    )));

    choice((escape, satisfy(is_posix_env_char)))
        .repeated()
        .at_least(1)
        .collect::<String>()
        .delimited_by(just('"'), just('"'))
}

/// `env:NAME` or `env:"quoted name"`.
pub fn env<'src>() -> impl Parser<'src, &'src str, String, Extra<'src>> + Clone {
    just("env:").ignore_then(choice((
        bash_environment_variable(),
        posix_environment_variable(),
    )))
}

pub fn missing<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    keyword("missing")
}

/// `missing`, local, remote, then environment, in that order.
pub fn import_type<'src, E>(
    import_expression: E,
) -> impl Parser<'src, &'src str, ImportType, Extra<'src>> + Clone + 'src
where
    E: Parser<'src, &'src str, Expr, Extra<'src>> + Clone + 'src,
{
    choice((
        missing().to(ImportType::Missing),
        local().map(|(prefix, file)| ImportType::Local(prefix, file)),
        http(import_expression).map(ImportType::Remote),
        env().map(ImportType::Env),
    ))
    .boxed()
}

fn import_mode<'src>() -> impl Parser<'src, &'src str, ImportMode, Extra<'src>> + Clone {
    whitespace()
        .ignore_then(keyword("as"))
        .ignore_then(nonempty_whitespace())
        .ignore_then(choice((
            keyword("Text").to(ImportMode::RawText),
            keyword("Location").to(ImportMode::Location),
        )))
}

/// An import location, then an optional ` sha256:...`, then an optional
/// ` as Text` / ` as Location`.
pub fn import<'src, E>(
    import_expression: E,
) -> impl Parser<'src, &'src str, Import, Extra<'src>> + Clone + 'src
where
    E: Parser<'src, &'src str, Expr, Extra<'src>> + Clone + 'src,
{
    import_type(import_expression)
        .then(nonempty_whitespace().ignore_then(hash()).or_not())
        .then(import_mode().or_not())
        .map(|((import_type, hash), mode)| Import {
            import_type,
            mode: mode.unwrap_or_default(),
            hash,
        })
        .boxed()
}
