//! Shell parsing via tree-sitter
//!
//! Parsing is pure: one input string, one concrete syntax tree, no side
//! effects. A tree whose root contains ERROR nodes is rejected so that the
//! extractor only ever walks well-formed syntax. Callers treat the failure
//! as per-file and non-fatal.

use tree_sitter::{Parser, Tree};

use crate::error::{IndexError, Result};

/// Parse shell source into a concrete syntax tree.
///
/// `path` is used only for error context. Returns `IndexError::Parse` if
/// the grammar cannot be loaded, the parser yields no tree, or the tree
/// contains syntax errors.
pub fn parse_source(path: &str, source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_bash::LANGUAGE.into())
        .map_err(|e| IndexError::Parse {
            path: path.to_string(),
            message: format!("failed to load shell grammar: {e}"),
        })?;

    let tree = parser.parse(source, None).ok_or_else(|| IndexError::Parse {
        path: path.to_string(),
        message: "parser produced no tree".to_string(),
    })?;

    if tree.root_node().has_error() {
        return Err(IndexError::Parse {
            path: path.to_string(),
            message: "syntax error".to_string(),
        });
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_simple_function() {
        let tree = parse_source("t.sh", "greet() {\n  echo hi\n}\n").unwrap();
        assert_eq!(tree.root_node().kind(), "program");
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn test_parses_heredoc_and_strings() {
        let source = "cat <<EOF\nnot_a_func() { echo hi; }\nEOF\necho 'literal() { }'\n";
        let tree = parse_source("t.sh", source).unwrap();
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn test_rejects_malformed_source() {
        // Unterminated brace group
        let err = parse_source("bad.sh", "broken() {\n  echo hi\n").unwrap_err();
        match err {
            IndexError::Parse { path, .. } => assert_eq!(path, "bad.sh"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_source_is_valid() {
        assert!(parse_source("empty.sh", "").is_ok());
    }
}
