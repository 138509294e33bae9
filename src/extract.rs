//! Function extraction from the syntax tree
//!
//! Walks a parsed tree for `function_definition` nodes and turns each one
//! into a `FunctionRecord` with an exact line span. Because only real
//! definition nodes are visited, textually similar content inside heredocs,
//! strings, or comments can never produce a record.
//!
//! Span contract: slicing the file from `start` through `start + size - 1`
//! reproduces the declaration verbatim, from the signature line through the
//! matching closing brace.

use tree_sitter::{Node, Tree};

use crate::category::categorize;
use crate::params::infer_params;
use crate::purpose::resolve_purpose;
use crate::schema::FunctionRecord;
use crate::script::ScriptFile;

/// Extract all function definitions from a parsed script, in file order
pub fn extract_functions(script: &ScriptFile, tree: &Tree) -> Vec<FunctionRecord> {
    let mut records = Vec::new();
    collect_functions(&tree.root_node(), script, &mut records);
    records
}

fn collect_functions(node: &Node, script: &ScriptFile, records: &mut Vec<FunctionRecord>) {
    if node.kind() == "function_definition" {
        if let Some(record) = record_for(node, script) {
            records.push(record);
        }
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_functions(&child, script, records);
    }
}

fn record_for(node: &Node, script: &ScriptFile) -> Option<FunctionRecord> {
    let source = script.content();
    let name_node = function_name_node(node)?;
    let name = node_text(&name_node, source);
    if name.is_empty() {
        return None;
    }

    // Both accepted syntaxes put the name on the definition's first line,
    // so the name token row doubles as the signature line.
    let start = name_node.start_position().row + 1;
    let end = node.end_position().row + 1;
    let size = end - start + 1;

    let purpose = resolve_purpose(script, node.start_position().row + 1);
    let params = node
        .child_by_field_name("body")
        .map(|body| infer_params(&body, source))
        .unwrap_or_default();
    let category = categorize(&name);

    Some(FunctionRecord {
        name,
        file: script.display_path.clone(),
        start,
        size,
        params,
        purpose,
        category,
    })
}

/// Resolve the function name: the grammar's `name` field for both
/// `name() { ... }` and `function name { ... }`, with a `word` child
/// fallback.
fn function_name_node<'a>(node: &'a Node) -> Option<Node<'a>> {
    if let Some(name) = node.child_by_field_name("name") {
        return Some(name);
    }
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .find(|child| child.kind() == "word");
    found
}

/// Get text content of a node
pub(crate) fn node_text(node: &Node, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_source;
    use std::path::PathBuf;

    fn extract(source: &str) -> Vec<FunctionRecord> {
        let script = ScriptFile::new(
            PathBuf::from("/tmp/test.sh"),
            "test.sh".to_string(),
            source.to_string(),
        );
        let tree = parse_source("test.sh", source).unwrap();
        extract_functions(&script, &tree)
    }

    #[test]
    fn test_basic_function_span() {
        let source = "greet() {\n  echo hi\n}\n";
        let records = extract(source);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "greet");
        assert_eq!(records[0].start, 1);
        assert_eq!(records[0].size, 3);
    }

    #[test]
    fn test_function_keyword_syntax() {
        let source =
            "function deploy {\n  echo deploying\n}\n\nfunction undeploy() {\n  echo gone\n}\n";
        let records = extract(source);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "deploy");
        assert_eq!(records[0].start, 1);
        assert_eq!(records[0].size, 3);
        assert_eq!(records[1].name, "undeploy");
        assert_eq!(records[1].start, 5);
        assert_eq!(records[1].size, 3);
    }

    #[test]
    fn test_heredoc_body_is_not_a_function() {
        let source = "cat <<EOF\nfake_func() { echo hi }\nEOF\nreal_func() {\n  true\n}\n";
        let records = extract(source);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["real_func"]);
    }

    #[test]
    fn test_quoted_and_commented_text_are_not_functions() {
        let source = "echo 'fake_one() { }'\necho \"fake_two() { }\"\n# fake_three() { }\n";
        assert!(extract(source).is_empty());
    }

    #[test]
    fn test_nested_braces_in_if_and_case() {
        let source = "check_all() {\n  if [ -f x ]; then\n    case \"$1\" in\n      a) echo \"${HOME}\" ;;\n      *) echo other ;;\n    esac\n  fi\n}\n";
        let records = extract(source);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].start, 1);
        assert_eq!(records[0].size, 8);
    }

    #[test]
    fn test_braces_inside_strings_do_not_end_the_body() {
        let source = "render() {\n  echo \"}\"\n  echo '}'\n  printf '%s' \"${1:-}\"\n}\n";
        let records = extract(source);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].size, 5);
    }

    #[test]
    fn test_span_round_trip() {
        let source = "# setup\nsetup_env() {\n  export PATH=/opt/bin:$PATH\n  if true; then\n    echo ok\n  fi\n}\necho done\n";
        let script = ScriptFile::new(
            PathBuf::from("/tmp/test.sh"),
            "test.sh".to_string(),
            source.to_string(),
        );
        let tree = parse_source("test.sh", source).unwrap();
        let records = extract_functions(&script, &tree);
        assert_eq!(records.len(), 1);

        let rec = &records[0];
        let sliced = script.slice_lines(rec.start, rec.end_line());
        assert!(sliced.starts_with("setup_env() {"));
        assert!(sliced.ends_with('}'));

        // Byte-exact match against the tree node's own span
        let root = tree.root_node();
        let def = root
            .named_child(1)
            .expect("function_definition after the comment");
        assert_eq!(def.kind(), "function_definition");
        assert_eq!(sliced, node_text(&def, source));
    }

    #[test]
    fn test_nested_function_is_also_reported() {
        let source = "outer() {\n  inner() {\n    true\n  }\n  inner\n}\n";
        let records = extract(source);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["outer", "inner"]);
        assert_eq!(records[1].start, 2);
        assert_eq!(records[1].size, 3);
    }

    #[test]
    fn test_category_comes_from_name() {
        let source = "get_status() {\n  true\n}\nshow_menu() {\n  true\n}\n";
        let records = extract(source);
        assert_eq!(records[0].category, crate::category::Category::Core);
        assert_eq!(records[1].category, crate::category::Category::Display);
    }
}
