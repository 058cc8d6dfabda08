//! Parse debug tree generation
//!
//! Converts parsed values into JSON nodes carrying `ExpressionType`, `Name`
//! and `Arguments` keys. Child expressions (text interpolations, URL
//! headers) appear under `Arguments`; import nodes also spell out their
//! location, mode and integrity check.

use atrius_dhall_syntax::{Expr, Hash, Import, ImportType, TextLit};
use serde_json::{Value, json};

/// Convert an expression to a JSON debug tree
///
/// ```json
/// {
///   "ExpressionType": "TextLiteral",
///   "Name": "\"a${x}b\"",
///   "Chunks": ["a"],
///   "Suffix": "b",
///   "Arguments": [{ "ExpressionType": "Variable", "Name": "x", "Index": 0, "Arguments": [] }]
/// }
/// ```
pub fn expression_to_debug_tree(expr: &Expr) -> Value {
    match expr {
        Expr::Var(v) => json!({
            "ExpressionType": "Variable",
            "Name": v.label,
            "Index": v.index,
            "Arguments": [],
        }),
        Expr::Builtin(b) => leaf("Builtin", b.to_string()),
        Expr::NaturalLit(n) => leaf("NaturalLiteral", n.to_string()),
        Expr::IntegerLit(_) => leaf("IntegerLiteral", expr.to_string()),
        Expr::DoubleLit(_) => leaf("DoubleLiteral", expr.to_string()),
        Expr::TextLit(text) => text_to_debug_tree(text),
        Expr::Import(import) => import_to_debug_tree(import),
    }
}

fn leaf(expression_type: &str, name: String) -> Value {
    json!({
        "ExpressionType": expression_type,
        "Name": name,
        "Arguments": [],
    })
}

pub fn text_to_debug_tree(text: &TextLit) -> Value {
    let prefixes: Vec<&str> = text.chunks().iter().map(|(s, _)| s.as_str()).collect();
    let arguments: Vec<Value> = text
        .chunks()
        .iter()
        .map(|(_, e)| expression_to_debug_tree(e))
        .collect();
    json!({
        "ExpressionType": "TextLiteral",
        "Name": text.to_string(),
        "Chunks": prefixes,
        "Suffix": text.suffix(),
        "Arguments": arguments,
    })
}

pub fn hash_to_debug_tree(hash: &Hash) -> Value {
    json!({
        "ExpressionType": "Hash",
        "Name": hash.to_string(),
        "Algorithm": "sha256",
        "Digest": hash.to_hex(),
        "Arguments": [],
    })
}

pub fn import_to_debug_tree(import: &Import) -> Value {
    let mut node = json!({
        "ExpressionType": "Import",
        "Name": import.to_string(),
        "Mode": format!("{:?}", import.mode),
        "Hash": import.hash.as_ref().map(Hash::to_hex),
        "Arguments": [],
    });

    match &import.import_type {
        ImportType::Missing => {
            node["ImportType"] = json!("Missing");
        }
        ImportType::Local(prefix, file) => {
            node["ImportType"] = json!("Local");
            node["Prefix"] = json!(format!("{prefix:?}"));
            node["Directory"] = json!(file.directory);
            node["File"] = json!(file.file);
        }
        ImportType::Remote(url) => {
            node["ImportType"] = json!("Remote");
            node["Scheme"] = json!(url.scheme.to_string());
            node["Authority"] = json!(url.authority);
            node["Path"] = json!(url.path.components().collect::<Vec<_>>());
            node["Query"] = json!(url.query);
            if let Some(headers) = &url.headers {
                node["Arguments"] = json!([expression_to_debug_tree(headers)]);
            }
        }
        ImportType::Env(name) => {
            node["ImportType"] = json!("Env");
            node["Variable"] = json!(name);
        }
    }

    node
}
