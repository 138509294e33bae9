//! Parameter inference
//!
//! Approximates a function's parameter list from its body: a `local`/
//! `declare` assignment whose value is exactly a positional parameter
//! contributes its declared name, and any other positional reference
//! contributes an `argN` placeholder. Duplicate mentions of the same
//! position collapse to the first-seen entry. Single-quoted text never
//! expands, so it never contributes.
//!
//! This is best-effort metadata, not a contract toward callers.

use tree_sitter::Node;

use crate::extract::node_text;

/// Infer parameter names from a function body subtree, in first-use order
pub fn infer_params(body: &Node, source: &str) -> Vec<String> {
    let mut seen: Vec<(usize, String)> = Vec::new();
    let mut cursor = body.walk();
    for child in body.children(&mut cursor) {
        scan(&child, source, &mut seen);
    }
    seen.into_iter().map(|(_, name)| name).collect()
}

fn scan(node: &Node, source: &str, seen: &mut Vec<(usize, String)>) {
    match node.kind() {
        // Nested function bodies have their own parameters
        "function_definition" => {}
        "variable_assignment" => {
            // Only `local`/`declare`-style bindings contribute their name;
            // a plain `target=$1` is just a positional reference.
            let declared = node
                .parent()
                .map(|parent| parent.kind() == "declaration_command")
                .unwrap_or(false);
            if declared {
                if let (Some(name_node), Some(value)) = (
                    node.child_by_field_name("name"),
                    node.child_by_field_name("value"),
                ) {
                    if let Some(position) = direct_positional(&value, source) {
                        record(seen, position, node_text(&name_node, source));
                        return;
                    }
                }
            }
            scan_children(node, source, seen);
        }
        "simple_expansion" | "expansion" => {
            if let Some(position) = positional_of(node, source) {
                record(seen, position, format!("arg{position}"));
            }
        }
        _ => scan_children(node, source, seen),
    }
}

fn scan_children(node: &Node, source: &str, seen: &mut Vec<(usize, String)>) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        scan(&child, source, seen);
    }
}

fn record(seen: &mut Vec<(usize, String)>, position: usize, name: String) {
    if seen.iter().any(|(p, _)| *p == position) {
        return;
    }
    seen.push((position, name));
}

/// The positional index of `$N` / `${N}` / `${N:-...}`, if this node is one
fn positional_of(node: &Node, source: &str) -> Option<usize> {
    if node.kind() != "simple_expansion" && node.kind() != "expansion" {
        return None;
    }
    let mut cursor = node.walk();
    let variable = node
        .children(&mut cursor)
        .find(|child| child.kind() == "variable_name")?;
    let text = node_text(&variable, source);
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // $0 is the script name, not a parameter
    let position: usize = text.parse().ok()?;
    (position >= 1).then_some(position)
}

/// Recognize an assignment value that is exactly one positional reference,
/// bare (`$1`) or double-quoted (`"$1"`).
fn direct_positional(value: &Node, source: &str) -> Option<usize> {
    match value.kind() {
        "simple_expansion" | "expansion" => positional_of(value, source),
        "string" => {
            let mut cursor = value.walk();
            let inner: Vec<Node> = value.named_children(&mut cursor).collect();
            let [only] = inner.as_slice() else {
                return None;
            };
            let position = positional_of(only, source)?;
            // Nothing but the expansion between the quotes
            let expected = format!("\"{}\"", node_text(only, source));
            (node_text(value, source) == expected).then_some(position)
        }
        _ => None,
    }
}
