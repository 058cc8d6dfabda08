//! Import locations, modes and integrity checks
//!
//! These are the values the import grammar produces. Nothing here resolves
//! or fetches anything: authorities and queries keep their percent-encoded
//! triples verbatim, and paths are plain component lists.

use std::fmt;

use crate::chars::{
    is_bash_env_first_char, is_bash_env_next_char, is_path_char, is_posix_env_char,
};
use crate::expr::Expr;

/// The prefix of a local import path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilePrefix {
    /// `/absolute/path`
    Absolute,
    /// `./relative/path`
    Here,
    /// `../relative/path`
    Parent,
    /// `~/home/anchored/path`
    Home,
}

impl FilePrefix {
    pub fn as_str(self) -> &'static str {
        match self {
            FilePrefix::Absolute => "",
            FilePrefix::Here => ".",
            FilePrefix::Parent => "..",
            FilePrefix::Home => "~",
        }
    }
}

/// A path: zero or more directory components followed by exactly one final
/// component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
    pub directory: Vec<String>,
    pub file: String,
}

impl File {
    /// Splits components into directories and the final component.
    ///
    /// An empty list yields a single empty final component, which is how a
    /// URL without a path is represented.
    pub fn from_components(mut components: Vec<String>) -> File {
        let file = components.pop().unwrap_or_default();
        File {
            directory: components,
            file,
        }
    }

    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.directory
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.file.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    HTTP,
    HTTPS,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::HTTP => f.write_str("http"),
            Scheme::HTTPS => f.write_str("https"),
        }
    }
}

/// A remote import location
#[derive(Debug, Clone, PartialEq)]
pub struct Url {
    pub scheme: Scheme,
    /// `[userinfo@]host[:port]` exactly as written
    pub authority: String,
    pub path: File,
    /// Text after `?`, exactly as written
    pub query: Option<String>,
    /// The expression after `using`, if any
    pub headers: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportType {
    Missing,
    Local(FilePrefix, File),
    Remote(Url),
    Env(String),
}

/// How the imported content is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImportMode {
    /// Parsed as a Dhall expression
    #[default]
    Code,
    /// `as Text`
    RawText,
    /// `as Location`
    Location,
}

/// An integrity check attached to an import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hash {
    Sha256([u8; 32]),
}

impl Hash {
    /// Decodes 64 hex digits into a SHA-256 digest.
    pub fn sha256_from_hex(digits: &str) -> Result<Hash, String> {
        let bytes = hex::decode(digits).map_err(|e| format!("invalid sha256 digest: {e}"))?;
        let digest: [u8; 32] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| format!("sha256 digest must be 32 bytes, found {}", b.len()))?;
        Ok(Hash::Sha256(digest))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Hash::Sha256(digest) => digest,
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

/// A complete import: location, integrity check and mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub import_type: ImportType,
    pub mode: ImportMode,
    pub hash: Option<Hash>,
}

impl Import {
    pub fn new(import_type: ImportType) -> Self {
        Import {
            import_type,
            mode: ImportMode::Code,
            hash: None,
        }
    }
}

fn write_path_component(f: &mut fmt::Formatter<'_>, component: &str) -> fmt::Result {
    if !component.is_empty() && component.chars().all(is_path_char) {
        write!(f, "/{component}")
    } else {
        write!(f, "/\"{component}\"")
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.components()
            .try_for_each(|component| write_path_component(f, component))
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)?;
        for segment in self.path.components() {
            write!(f, "/{segment}")?;
        }
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(headers) = &self.headers {
            write!(f, " using ({headers})")?;
        }
        Ok(())
    }
}

fn write_env_name(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    let mut chars = name.chars();
    let bash = chars.next().is_some_and(is_bash_env_first_char) && chars.all(is_bash_env_next_char);
    if bash {
        return f.write_str(name);
    }
    f.write_str("\"")?;
    for c in name.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{7}' => f.write_str("\\a")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{C}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{B}' => f.write_str("\\v")?,
            c if is_posix_env_char(c) => write!(f, "{c}")?,
            // Not representable in a POSIX name; emitted as-is so the
            // rendering at least shows the offending character.
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

impl fmt::Display for ImportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportType::Missing => f.write_str("missing"),
            ImportType::Local(prefix, file) => write!(f, "{}{file}", prefix.as_str()),
            ImportType::Remote(url) => write!(f, "{url}"),
            ImportType::Env(name) => {
                f.write_str("env:")?;
                write_env_name(f, name)
            }
        }
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hash::Sha256(_) => write!(f, "sha256:{}", self.to_hex()),
        }
    }
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportMode::Code => Ok(()),
            ImportMode::RawText => f.write_str("Text"),
            ImportMode::Location => f.write_str("Location"),
        }
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.import_type)?;
        if let Some(hash) = &self.hash {
            write!(f, " {hash}")?;
        }
        if self.mode != ImportMode::Code {
            write!(f, " as {}", self.mode)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(components: &[&str]) -> File {
        File::from_components(components.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_file_from_components() {
        let f = file(&["a", "b", "c.dhall"]);
        assert_eq!(f.directory, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(f.file, "c.dhall");

        let empty = File::from_components(Vec::new());
        assert!(empty.directory.is_empty());
        assert_eq!(empty.file, "");
    }

    #[test]
    fn test_local_rendering_quotes_when_needed() {
        let import = ImportType::Local(FilePrefix::Here, file(&["my dir", "package.dhall"]));
        assert_eq!(import.to_string(), "./\"my dir\"/package.dhall");

        let import = ImportType::Local(FilePrefix::Absolute, file(&["etc", "x"]));
        assert_eq!(import.to_string(), "/etc/x");
    }

    #[test]
    fn test_env_rendering() {
        assert_eq!(ImportType::Env("HOME".into()).to_string(), "env:HOME");
        assert_eq!(
            ImportType::Env("a b\"c\n".into()).to_string(),
            "env:\"a b\\\"c\\n\""
        );
    }

    #[test]
    fn test_hash_from_hex() {
        let digits = "ab".repeat(32);
        let hash = Hash::sha256_from_hex(&digits).unwrap();
        assert_eq!(hash.as_bytes(), &[0xAB; 32]);
        assert_eq!(hash.to_string(), format!("sha256:{digits}"));

        assert!(Hash::sha256_from_hex("abcd").is_err());
        assert!(Hash::sha256_from_hex(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn test_import_rendering() {
        let url = Url {
            scheme: Scheme::HTTPS,
            authority: "example.com.".into(),
            path: file(&["a", "b"]),
            query: Some("x=%20".into()),
            headers: None,
        };
        let import = Import {
            import_type: ImportType::Remote(url),
            mode: ImportMode::RawText,
            hash: Some(Hash::Sha256([0; 32])),
        };
        assert_eq!(
            import.to_string(),
            format!("https://example.com./a/b?x=%20 sha256:{} as Text", "0".repeat(64))
        );
    }
}
