use atrius_dhall_parser::parse_debug::{
    expression_to_debug_tree, hash_to_debug_tree, import_to_debug_tree,
};
use atrius_dhall_parser::{parse_expression, parse_hash, parse_import};
use serde_json::{Value, json};

fn tree(source: &str) -> Value {
    let expr = parse_expression(source).expect("Failed to parse expression");
    expression_to_debug_tree(&expr)
}

fn str_field<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    node.get(key).and_then(|v| v.as_str())
}

#[test]
fn test_variable_node() {
    let node = tree("x@2");
    assert_eq!(str_field(&node, "ExpressionType"), Some("Variable"));
    assert_eq!(str_field(&node, "Name"), Some("x"));
    assert_eq!(node["Index"], json!(2));
    assert_eq!(node["Arguments"], json!([]));
}

#[test]
fn test_literal_nodes() {
    let node = tree("0x1A");
    assert_eq!(str_field(&node, "ExpressionType"), Some("NaturalLiteral"));
    assert_eq!(str_field(&node, "Name"), Some("26"));

    let node = tree("-3");
    assert_eq!(str_field(&node, "ExpressionType"), Some("IntegerLiteral"));
    assert_eq!(str_field(&node, "Name"), Some("-3"));

    let node = tree("2.5");
    assert_eq!(str_field(&node, "ExpressionType"), Some("DoubleLiteral"));
    assert_eq!(str_field(&node, "Name"), Some("2.5"));

    let node = tree("List/fold");
    assert_eq!(str_field(&node, "ExpressionType"), Some("Builtin"));
    assert_eq!(str_field(&node, "Name"), Some("List/fold"));
}

#[test]
fn test_text_node_lists_interpolations() {
    let node = tree(r#""a${x}b${"c"}d""#);
    assert_eq!(str_field(&node, "ExpressionType"), Some("TextLiteral"));
    assert_eq!(node["Chunks"], json!(["a", "b"]));
    assert_eq!(str_field(&node, "Suffix"), Some("d"));

    let arguments = node["Arguments"].as_array().unwrap();
    assert_eq!(arguments.len(), 2);
    assert_eq!(str_field(&arguments[0], "ExpressionType"), Some("Variable"));
    assert_eq!(str_field(&arguments[1], "ExpressionType"), Some("TextLiteral"));
    assert_eq!(str_field(&arguments[1], "Suffix"), Some("c"));
}

#[test]
fn test_local_import_node() {
    let import = parse_import("./a/b.dhall as Text").unwrap();
    let node = import_to_debug_tree(&import);
    assert_eq!(str_field(&node, "ExpressionType"), Some("Import"));
    assert_eq!(str_field(&node, "ImportType"), Some("Local"));
    assert_eq!(str_field(&node, "Prefix"), Some("Here"));
    assert_eq!(node["Directory"], json!(["a"]));
    assert_eq!(str_field(&node, "File"), Some("b.dhall"));
    assert_eq!(str_field(&node, "Mode"), Some("RawText"));
    assert_eq!(node["Hash"], Value::Null);
    assert_eq!(str_field(&node, "Name"), Some("./a/b.dhall as Text"));
}

#[test]
fn test_remote_import_node_carries_headers() {
    let import = parse_import("https://example.com./p?q using h").unwrap();
    let node = import_to_debug_tree(&import);
    assert_eq!(str_field(&node, "ImportType"), Some("Remote"));
    assert_eq!(str_field(&node, "Scheme"), Some("https"));
    assert_eq!(str_field(&node, "Authority"), Some("example.com."));
    assert_eq!(node["Path"], json!(["p"]));
    assert_eq!(str_field(&node, "Query"), Some("q"));

    let arguments = node["Arguments"].as_array().unwrap();
    assert_eq!(arguments.len(), 1);
    assert_eq!(str_field(&arguments[0], "Name"), Some("h"));
}

#[test]
fn test_env_and_missing_nodes() {
    let node = tree("env:HOME");
    assert_eq!(str_field(&node, "ImportType"), Some("Env"));
    assert_eq!(str_field(&node, "Variable"), Some("HOME"));
    assert_eq!(str_field(&node, "Mode"), Some("Code"));

    let node = tree("missing");
    assert_eq!(str_field(&node, "ImportType"), Some("Missing"));
}

#[test]
fn test_hash_node() {
    let digits = "0f".repeat(32);
    let hash = parse_hash(&format!("sha256:{digits}")).unwrap();
    let node = hash_to_debug_tree(&hash);
    assert_eq!(str_field(&node, "Algorithm"), Some("sha256"));
    assert_eq!(str_field(&node, "Digest"), Some(digits.as_str()));

    let import = parse_import(&format!("missing sha256:{digits}")).unwrap();
    let node = import_to_debug_tree(&import);
    assert_eq!(str_field(&node, "Hash"), Some(digits.as_str()));
}

#[test]
fn test_debug_tree_serializes() {
    let node = tree(r#""${./x}""#);
    let json_string = serde_json::to_string_pretty(&node).expect("Failed to serialize JSON");
    assert!(json_string.contains("\"ExpressionType\": \"Import\""));
}
