//! # Dhall Syntax Types
//!
//! Value types shared by the Dhall lexical grammar and the layers built on top
//! of it (type-checker, normalizer, import resolver). Nothing in this crate
//! parses source text; see `atrius-dhall-parser` for the grammar.
//!
//! ## Contents
//!
//! - **Character classes** (`chars`): exact ABNF range predicates
//! - **Reserved names** (`reserved`): the keyword table and the ordered
//!   built-in table
//! - **Expression leaves** (`expr`): variables, built-ins, numeric literals
//! - **Text literals** (`text`): chunked text with interpolation and
//!   associative concatenation
//! - **Imports** (`import`): local paths, URLs, environment variables,
//!   `missing`, SHA-256 integrity checks and import modes
//!
//! Every value implements `Display` with its canonical surface syntax, so a
//! rendered value parses back to an equal value.
//!
//! ```rust
//! use atrius_dhall_syntax::{Expr, TextLit, V};
//!
//! let text = TextLit::from("Hello, ") + TextLit::interpolation(Expr::Var(V::new("name", 0)));
//! assert_eq!(text.to_string(), "\"Hello, ${name}\"");
//! ```

pub mod chars;
pub mod expr;
pub mod import;
pub mod reserved;
pub mod text;

pub use expr::{Expr, V};
pub use import::{File, FilePrefix, Hash, Import, ImportMode, ImportType, Scheme, Url};
pub use reserved::{BUILTINS, Builtin, KEYWORDS, is_builtin, is_keyword};
pub use text::TextLit;
