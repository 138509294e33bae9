//! Index data model
//!
//! The serialized shapes here are the output contract: `ExtractIndex` is
//! exactly the JSON document written to disk, with lexicographic key order
//! on every map (via `BTreeMap`) and insertion order on every sequence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One extracted function definition.
///
/// The map key in `ExtractIndex::index` carries the name, so `name` itself
/// is not serialized. Records are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    #[serde(skip)]
    pub name: String,
    /// Path relative to the scanned root where possible
    pub file: String,
    /// 1-based line of the function name token
    pub start: usize,
    /// Line count from signature through matching closing brace, inclusive
    pub size: usize,
    /// Inferred parameter names, first-use order, possibly empty
    pub params: Vec<String>,
    /// Single descriptive comment line, if one qualified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    pub category: Category,
}

impl FunctionRecord {
    /// 1-based line of the matching closing brace
    pub fn end_line(&self) -> usize {
        self.start + self.size - 1
    }

    /// Compact `file:start-end` locator string
    pub fn location(&self) -> String {
        format!("{}:{}-{}", self.file, self.start, self.end_line())
    }
}

/// The root index artifact: three views over the same record set.
///
/// Invariant: every name present in `categories` or `quick_ref` is also a
/// key of `index`, and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractIndex {
    /// name -> record, duplicate names resolved to the first-discovered record
    pub index: BTreeMap<String, FunctionRecord>,
    /// category -> function names in first-discovery order
    pub categories: BTreeMap<String, Vec<String>>,
    /// name -> `file:start-end`
    pub quick_ref: BTreeMap<String, String>,
}

impl ExtractIndex {
    /// Look up a function record by name
    pub fn get(&self, name: &str) -> Option<&FunctionRecord> {
        self.index.get(name)
    }

    /// Number of indexed functions
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Non-fatal issues collected during a run and returned alongside the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A candidate file could not be read; it was skipped
    UnreadableFile { path: String, reason: String },
    /// A file could not be parsed as shell; it was skipped
    ParseFailure { path: String, reason: String },
    /// Two definitions share a name; `kept` won the `index` entry
    DuplicateName {
        name: String,
        kept: String,
        shadowed: String,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnreadableFile { path, reason } => {
                write!(f, "skipped unreadable file {path}: {reason}")
            }
            Self::ParseFailure { path, reason } => {
                write!(f, "skipped unparseable file {path}: {reason}")
            }
            Self::DuplicateName {
                name,
                kept,
                shadowed,
            } => {
                write!(
                    f,
                    "duplicate function name {name}: kept {kept}, shadowed {shadowed}"
                )
            }
        }
    }
}

/// Result of a full indexing run: the index plus everything non-fatal
/// that happened while building it.
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub index: ExtractIndex,
    pub warnings: Vec<Warning>,
}
