//! Character classes of the Dhall grammar
//!
//! Every predicate here is an exact interval-membership test against the
//! ABNF character ranges. They are shared by the parser (which consumes
//! characters matching them) and by the renderers in this crate (which decide
//! when a value must be quoted or escaped to survive a re-parse).

/// The non-ASCII code points a Dhall source may contain.
///
/// Surrogates and the two noncharacters at the end of every plane
/// (`U+xFFFE`, `U+xFFFF`) are excluded.
pub const VALID_NON_ASCII: &[(u32, u32)] = &[
    (0x80, 0xD7FF),
    (0xE000, 0xFFFD),
    (0x10000, 0x1FFFD),
    (0x20000, 0x2FFFD),
    (0x30000, 0x3FFFD),
    (0x40000, 0x4FFFD),
    (0x50000, 0x5FFFD),
    (0x60000, 0x6FFFD),
    (0x70000, 0x7FFFD),
    (0x80000, 0x8FFFD),
    (0x90000, 0x9FFFD),
    (0xA0000, 0xAFFFD),
    (0xB0000, 0xBFFFD),
    (0xC0000, 0xCFFFD),
    (0xD0000, 0xDFFFD),
    (0xE0000, 0xEFFFD),
    (0xF0000, 0xFFFFD),
    (0x100000, 0x10FFFD),
];

fn in_ranges(c: char, ranges: &[(u32, u32)]) -> bool {
    let code = c as u32;
    ranges.iter().any(|&(lo, hi)| lo <= code && code <= hi)
}

pub fn is_valid_non_ascii(c: char) -> bool {
    in_ranges(c, VALID_NON_ASCII)
}

/// `%x20-7F`
pub fn is_printable_ascii(c: char) -> bool {
    ('\u{20}'..='\u{7F}').contains(&c)
}

pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_nonzero_digit(c: char) -> bool {
    ('1'..='9').contains(&c)
}

pub fn is_alphanum(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// ABNF `HEXDIG`; case-insensitive like every ABNF literal.
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Characters allowed inside a line comment after `--`.
pub fn is_line_comment_char(c: char) -> bool {
    is_printable_ascii(c) || is_valid_non_ascii(c) || c == '\t'
}

/// Single characters allowed inside a block comment (line ends are matched
/// separately so that `\r` only appears as part of `\r\n`).
pub fn is_block_comment_char(c: char) -> bool {
    is_line_comment_char(c)
}

pub fn is_simple_label_first_char(c: char) -> bool {
    is_alpha(c) || c == '_'
}

pub fn is_simple_label_next_char(c: char) -> bool {
    is_alphanum(c) || matches!(c, '-' | '/' | '_')
}

/// `%x20-5F / %x61-7E`: printable ASCII without the backtick.
pub fn is_quoted_label_char(c: char) -> bool {
    ('\u{20}'..='\u{5F}').contains(&c) || ('\u{61}'..='\u{7E}').contains(&c)
}

/// Unescaped characters of a double-quoted text literal:
/// everything printable except `"` and `\`.
pub fn is_double_quote_char(c: char) -> bool {
    ('\u{20}'..='\u{21}').contains(&c)
        || ('\u{23}'..='\u{5B}').contains(&c)
        || ('\u{5D}'..='\u{7F}').contains(&c)
        || is_valid_non_ascii(c)
}

/// Content characters of a single-quoted (multi-line) text literal,
/// excluding line ends.
pub fn is_single_quote_char(c: char) -> bool {
    is_printable_ascii(c) || is_valid_non_ascii(c) || c == '\t'
}

/// Characters of an unquoted local path component.
///
/// Excludes space, `"`, `#`, `(`, `)`, `,`, `/`, `<`, `>`, `?`, `[`, `\`,
/// `]`, `{`, `}` and everything outside printable ASCII.
pub fn is_path_char(c: char) -> bool {
    matches!(c as u32,
        0x21
        | 0x24..=0x27
        | 0x2A..=0x2B
        | 0x2D..=0x2E
        | 0x30..=0x3B
        | 0x3D
        | 0x40..=0x5A
        | 0x5E..=0x7A
        | 0x7C
        | 0x7E)
}

/// Characters of a double-quoted local path component.
pub fn is_quoted_path_char(c: char) -> bool {
    ('\u{20}'..='\u{21}').contains(&c)
        || ('\u{23}'..='\u{2E}').contains(&c)
        || ('\u{30}'..='\u{7E}').contains(&c)
        || is_valid_non_ascii(c)
}

/// RFC 3986 `unreserved`.
pub fn is_unreserved(c: char) -> bool {
    is_alphanum(c) || matches!(c, '-' | '.' | '_' | '~')
}

/// RFC 3986 `sub-delims`.
pub fn is_sub_delim(c: char) -> bool {
    matches!(c, '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=')
}

/// RFC 3986 `pchar` minus the percent-encoded form.
pub fn is_pchar(c: char) -> bool {
    is_unreserved(c) || is_sub_delim(c) || matches!(c, ':' | '@')
}

pub fn is_bash_env_first_char(c: char) -> bool {
    is_alpha(c) || c == '_'
}

pub fn is_bash_env_next_char(c: char) -> bool {
    is_alphanum(c) || c == '_'
}

/// Unescaped characters of a quoted POSIX environment variable name:
/// printable ASCII except `"`, `=` and `\`.
pub fn is_posix_env_char(c: char) -> bool {
    ('\u{20}'..='\u{21}').contains(&c)
        || ('\u{23}'..='\u{3C}').contains(&c)
        || ('\u{3E}'..='\u{5B}').contains(&c)
        || ('\u{5D}'..='\u{7E}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_non_ascii_boundaries() {
        assert!(!is_valid_non_ascii('\u{7F}'));
        assert!(is_valid_non_ascii('\u{80}'));
        assert!(is_valid_non_ascii('\u{D7FF}'));
        assert!(is_valid_non_ascii('\u{E000}'));
        assert!(is_valid_non_ascii('\u{FFFD}'));
        assert!(!is_valid_non_ascii('\u{FFFE}'));
        assert!(!is_valid_non_ascii('\u{FFFF}'));
        assert!(is_valid_non_ascii('\u{10000}'));
        assert!(!is_valid_non_ascii('\u{1FFFE}'));
        assert!(is_valid_non_ascii('\u{10FFFD}'));
        assert!(!is_valid_non_ascii('\u{10FFFF}'));
    }

    #[test]
    fn test_every_plane_range_ends_before_noncharacters() {
        for &(lo, hi) in &VALID_NON_ASCII[2..] {
            assert_eq!(lo & 0xFFFF, 0);
            assert_eq!(hi & 0xFFFF, 0xFFFD);
            assert_eq!(lo >> 16, hi >> 16);
        }
        assert_eq!(VALID_NON_ASCII.len(), 18);
    }

    #[test]
    fn test_path_chars() {
        for c in ['a', 'Z', '0', '.', '-', '_', '~', '!', '@', '=', '|', '^'] {
            assert!(is_path_char(c), "{c:?} should be a path character");
        }
        for c in [' ', '"', '#', '(', ')', ',', '/', '<', '>', '?', '[', '\\', ']', '{', '}'] {
            assert!(!is_path_char(c), "{c:?} should not be a path character");
        }
        assert!(is_quoted_path_char(' '));
        assert!(is_quoted_path_char('#'));
        assert!(!is_quoted_path_char('"'));
        assert!(!is_quoted_path_char('/'));
    }

    #[test]
    fn test_quoted_label_excludes_backtick() {
        assert!(is_quoted_label_char(' '));
        assert!(is_quoted_label_char('_'));
        assert!(is_quoted_label_char('~'));
        assert!(!is_quoted_label_char('`'));
        assert!(!is_quoted_label_char('\u{7F}'));
    }

    #[test]
    fn test_double_quote_chars() {
        assert!(is_double_quote_char('$'));
        assert!(is_double_quote_char('\u{7F}'));
        assert!(!is_double_quote_char('"'));
        assert!(!is_double_quote_char('\\'));
        assert!(!is_double_quote_char('\n'));
        assert!(is_double_quote_char('λ'));
    }
}
