use atrius_dhall_parser::parse_text_literal;
use atrius_dhall_syntax::{Expr, TextLit, V};
use num_bigint::BigUint;

fn plain(source: &str) -> Option<String> {
    parse_text_literal(source)
        .ok()
        .and_then(|t| t.as_plain().map(str::to_string))
}

fn var(name: &str) -> Expr {
    Expr::Var(V::new(name, 0))
}

#[test]
fn test_plain_double_quoted() {
    assert_eq!(plain(r#""""#), Some(String::new()));
    assert_eq!(plain(r#""abc""#), Some("abc".to_string()));
    assert_eq!(plain(r#""λ → ∀""#), Some("λ → ∀".to_string()));
    assert_eq!(plain(r#""cost: $5""#), Some("cost: $5".to_string()));
}

#[test]
fn test_double_quoted_escapes() {
    assert_eq!(
        plain(r#""\"\$\\\/\b\f\n\r\t""#),
        Some("\"$\\/\u{8}\u{C}\n\r\t".to_string())
    );
    assert_eq!(plain(r#""\${x}""#), Some("${x}".to_string()));
    assert!(parse_text_literal(r#""\q""#).is_err());
}

#[test]
fn test_unbraced_unicode_escapes() {
    assert_eq!(plain(r#""\u0041""#), Some("A".to_string()));
    assert_eq!(plain(r#""\u00e9""#), Some("é".to_string()));
    assert_eq!(plain(r#""\uD7FF""#), Some("\u{D7FF}".to_string()));
    assert_eq!(plain(r#""\ufffd""#), Some("\u{FFFD}".to_string()));
    // Surrogates and noncharacters
    assert!(parse_text_literal(r#""\uD800""#).is_err());
    assert!(parse_text_literal(r#""\uDFFF""#).is_err());
    assert!(parse_text_literal(r#""\uFFFE""#).is_err());
    assert!(parse_text_literal(r#""\uFFFF""#).is_err());
    assert!(parse_text_literal(r#""\u41""#).is_err());
}

#[test]
fn test_braced_unicode_escapes() {
    assert_eq!(plain(r#""\u{41}""#), Some("A".to_string()));
    assert_eq!(plain(r#""\u{000041}""#), Some("A".to_string()));
    assert_eq!(plain(r#""\u{1F600}""#), Some("😀".to_string()));
    assert_eq!(plain(r#""\u{10000}""#), Some("\u{10000}".to_string()));
    assert_eq!(plain(r#""\u{10FFFD}""#), Some("\u{10FFFD}".to_string()));
    assert_eq!(plain(r#""\u{0}""#), Some("\u{0}".to_string()));
    assert_eq!(plain(r#""\u{0000}""#), Some("\u{0}".to_string()));

    assert!(parse_text_literal(r#""\u{}""#).is_err());
    assert!(parse_text_literal(r#""\u{D800}""#).is_err());
    assert!(parse_text_literal(r#""\u{FFFF}""#).is_err());
    assert!(parse_text_literal(r#""\u{1FFFF}""#).is_err());
    assert!(parse_text_literal(r#""\u{10FFFF}""#).is_err());
    assert!(parse_text_literal(r#""\u{110000}""#).is_err());
}

#[test]
fn test_interpolation() {
    let text = parse_text_literal(r#""a${x}b""#).unwrap();
    assert_eq!(text.chunks(), &[("a".to_string(), var("x"))]);
    assert_eq!(text.suffix(), "b");

    let spaced = parse_text_literal(r#""${ x }""#).unwrap();
    assert_eq!(spaced, TextLit::interpolation(var("x")));

    let numeric = parse_text_literal(r#""n=${0x1A}""#).unwrap();
    assert_eq!(
        numeric.chunks(),
        &[("n=".to_string(), Expr::NaturalLit(BigUint::from(26u32)))]
    );
}

#[test]
fn test_nested_interpolation() {
    let text = parse_text_literal(r#""a${"b${y}"}c""#).unwrap();
    let inner = TextLit::new(vec![("b".to_string(), var("y"))], "");
    assert_eq!(text.chunks(), &[("a".to_string(), Expr::TextLit(inner))]);
    assert_eq!(text.suffix(), "c");
}

#[test]
fn test_malformed_double_quoted() {
    for source in [
        r#""abc"#,
        "\"a\nb\"",
        r#""${""#,
        r#""${}""#,
        r#""${x""#,
        r#""${if}""#,
    ] {
        assert!(parse_text_literal(source).is_err(), "{source:?} should fail");
    }
}

#[test]
fn test_single_quoted() {
    assert_eq!(plain("''\nfoo\nbar''"), Some("foo\nbar".to_string()));
    assert_eq!(plain("''\r\nfoo''"), Some("foo".to_string()));
    assert_eq!(plain("''\n''"), Some(String::new()));
    assert_eq!(plain("''\na'b\"c\\d''"), Some("a'b\"c\\d".to_string()));
}

#[test]
fn test_single_quoted_keeps_layout() {
    // No indentation is stripped and line ends are kept as written.
    assert_eq!(
        plain("''\n  indented\n    more\n''"),
        Some("  indented\n    more\n".to_string())
    );
    assert_eq!(plain("''\nx\r\ny''"), Some("x\r\ny".to_string()));
    assert_eq!(plain("''\na\tb''"), Some("a\tb".to_string()));
}

#[test]
fn test_single_quoted_escapes() {
    assert_eq!(plain("''\n'''x''"), Some("''x".to_string()));
    assert_eq!(plain("''\n''${x}''"), Some("${x}".to_string()));
    assert_eq!(plain("''\n$x''"), Some("$x".to_string()));
}

#[test]
fn test_single_quoted_interpolation() {
    let text = parse_text_literal("''\na${x}b\n''").unwrap();
    assert_eq!(text.chunks(), &[("a".to_string(), var("x"))]);
    assert_eq!(text.suffix(), "b\n");
}

#[test]
fn test_malformed_single_quoted() {
    for source in ["''foo''", "''\nfoo", "''\n${x''", "''\rfoo''"] {
        assert!(parse_text_literal(source).is_err(), "{source:?} should fail");
    }
}
