//! Text literals with interpolation

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::expr::Expr;

/// A text literal: literal prefixes interleaved with interpolated expressions,
/// followed by a trailing literal suffix.
///
/// `"a${x}b${y}c"` is `chunks = [("a", x), ("b", y)]`, `suffix = "c"`.
/// A literal without interpolation has no chunks and keeps all of its text in
/// the suffix.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLit {
    chunks: Vec<(String, Expr)>,
    suffix: String,
}

impl TextLit {
    pub fn new(chunks: Vec<(String, Expr)>, suffix: impl Into<String>) -> Self {
        TextLit {
            chunks,
            suffix: suffix.into(),
        }
    }

    /// A literal consisting of a single `${expr}` with no surrounding text.
    pub fn interpolation(expr: Expr) -> Self {
        TextLit {
            chunks: vec![(String::new(), expr)],
            suffix: String::new(),
        }
    }

    pub fn chunks(&self) -> &[(String, Expr)] {
        &self.chunks
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn is_plain(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The literal's text when it has no interpolation.
    pub fn as_plain(&self) -> Option<&str> {
        self.is_plain().then_some(self.suffix.as_str())
    }

    pub fn into_parts(self) -> (Vec<(String, Expr)>, String) {
        (self.chunks, self.suffix)
    }
}

impl From<String> for TextLit {
    fn from(text: String) -> Self {
        TextLit {
            chunks: Vec::new(),
            suffix: text,
        }
    }
}

impl From<&str> for TextLit {
    fn from(text: &str) -> Self {
        TextLit::from(text.to_string())
    }
}

impl From<char> for TextLit {
    fn from(c: char) -> Self {
        TextLit::from(c.to_string())
    }
}

/// Concatenation: the left suffix is glued onto the right's leading text.
impl Add for TextLit {
    type Output = TextLit;

    fn add(mut self, rhs: TextLit) -> TextLit {
        let mut rest = rhs.chunks.into_iter();
        match rest.next() {
            None => self.suffix.push_str(&rhs.suffix),
            Some((text, expr)) => {
                let mut lead = std::mem::take(&mut self.suffix);
                lead.push_str(&text);
                self.chunks.push((lead, expr));
                self.chunks.extend(rest);
                self.suffix = rhs.suffix;
            }
        }
        self
    }
}

impl Sum for TextLit {
    fn sum<I: Iterator<Item = TextLit>>(iter: I) -> TextLit {
        iter.fold(TextLit::default(), Add::add)
    }
}

pub(crate) fn write_escaped_text(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '$' => f.write_str("\\$")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{C}' => f.write_str("\\f")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04X}", c as u32)?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}

impl fmt::Display for TextLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for (text, expr) in &self.chunks {
            write_escaped_text(f, text)?;
            write!(f, "${{{expr}}}")?;
        }
        write_escaped_text(f, &self.suffix)?;
        f.write_str("\"")
    }
}
