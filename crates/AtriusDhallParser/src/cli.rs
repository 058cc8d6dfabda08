//! # Dhall Syntax CLI Tool
//!
//! Parses a Dhall source (or a single production) and prints either its
//! canonical rendering or a JSON parse debug tree. Nothing is resolved,
//! imported or evaluated.
//!
//! ## Command Line Options
//!
//! ```text
//! -e, --expression <SOURCE>        Source text to parse
//! -f, --file <PATH>                Read the source from a file ('-' for stdin)
//! -p, --production <PRODUCTION>    Grammar production [env: DHALL_SYNTAX_PRODUCTION] [default: expression]
//!     --parse-debug-tree           Output the parse debug tree as JSON
//! -o, --output <OUTPUT>            Output file path (defaults to stdout)
//! -l, --log-level <LEVEL>          Log level [env: DHALL_SYNTAX_LOG_LEVEL] [default: warn]
//! -h, --help                       Print help
//! ```
//!
//! ## Usage Examples
//!
//! ```bash
//! dhall-syntax-cli -e './package.dhall sha256:2ca5...  as Text'
//! dhall-syntax-cli -p natural -e 0x1A
//! dhall-syntax-cli -f config.dhall --parse-debug-tree -o tree.json
//! cat config.dhall | dhall-syntax-cli -f -
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use atrius_dhall_syntax::{Expr, V};
use clap::{Parser, ValueEnum};
use tracing::info;

use crate::error::{DhallResult, DhallSyntaxError};
use crate::parse_debug::{expression_to_debug_tree, hash_to_debug_tree};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Production {
    Expression,
    Import,
    Text,
    Natural,
    Integer,
    Double,
    Label,
    Hash,
}

#[derive(Parser, Debug)]
#[command(name = "dhall-syntax-cli")]
#[command(about = "Parse Dhall sources and literals without evaluating them")]
#[command(
    long_about = "Parse a Dhall expression or a single lexical production and print its canonical rendering or a parse debug tree"
)]
pub struct Args {
    /// Source text to parse
    #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
    pub expression: Option<String>,

    /// Read the source from a file (use '-' for stdin)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Grammar production to parse the source as
    #[arg(
        short,
        long,
        value_enum,
        env = "DHALL_SYNTAX_PRODUCTION",
        default_value_t = Production::Expression
    )]
    pub production: Production,

    /// Output parse debug tree as JSON
    #[arg(long)]
    pub parse_debug_tree: bool,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "DHALL_SYNTAX_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// Installs the tracing subscriber. `RUST_LOG` wins over `log_level`.
pub fn init_tracing(log_level: &str) {
    let filter = format!("atrius_dhall_parser={log_level},dhall_syntax_cli={log_level}");
    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .try_init();
}

/// Main CLI execution function
pub fn run_cli(args: Args) -> DhallResult<()> {
    let source = read_source(&args)?;
    info!(production = ?args.production, "parsing {} bytes", source.len());
    let output = render(&source, args.production, args.parse_debug_tree)?;
    write_output(&args.output, &output)
}

/// Parses `source` as `production` and renders the result.
pub fn render(source: &str, production: Production, debug_tree: bool) -> DhallResult<String> {
    let expr = match production {
        Production::Expression => crate::parse_expression(source)?,
        Production::Import => Expr::Import(crate::parse_import(source)?),
        Production::Text => Expr::TextLit(crate::parse_text_literal(source)?),
        Production::Natural => Expr::NaturalLit(crate::parse_natural(source)?),
        Production::Integer => Expr::IntegerLit(crate::parse_integer(source)?),
        Production::Double => Expr::DoubleLit(crate::parse_double(source)?),
        Production::Label => Expr::Var(V::new(crate::parse_label(source)?, 0)),
        Production::Hash => {
            let hash = crate::parse_hash(source)?;
            return if debug_tree {
                Ok(serde_json::to_string_pretty(&hash_to_debug_tree(&hash))?)
            } else {
                Ok(hash.to_string())
            };
        }
    };

    if debug_tree {
        Ok(serde_json::to_string_pretty(&expression_to_debug_tree(&expr))?)
    } else {
        Ok(expr.to_string())
    }
}

fn read_source(args: &Args) -> DhallResult<String> {
    match (&args.expression, &args.file) {
        (Some(expression), _) => Ok(expression.clone()),
        (None, Some(path)) if path.to_str() == Some("-") => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => Err(DhallSyntaxError::InvalidInput(
            "either --expression or --file is required".to_string(),
        )),
    }
}

/// Write output to file or stdout
fn write_output(path: &Option<PathBuf>, content: &str) -> DhallResult<()> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}
