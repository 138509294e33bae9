//! Purpose comment resolution
//!
//! Finds the single descriptive comment line for a function: scan upward
//! from the definition over blank and comment lines, then pick the first
//! line of that comment block that survives the disqualifier list. Banner
//! separators (and section titles sandwiched between them), bare
//! TODO/FIXME tags, and `Author:`-style metadata never qualify. The
//! disqualifiers are an ordered list of named predicates so each rule can
//! be tested on its own.

use crate::script::ScriptFile;

/// Whole-line tags that are metadata, not descriptions
const METADATA_TAGS: &[&str] = &["TODO", "FIXME", "XXX", "NOTE", "HACK"];

/// Prefixes that mark a comment as file metadata
const METADATA_PREFIXES: &[&str] = &[
    "author:",
    "license:",
    "copyright",
    "version:",
    "date:",
    "maintainer:",
    "shellcheck",
];

/// Ordered disqualifier rules applied to the stripped comment body
const DISQUALIFIERS: &[(&str, fn(&str) -> bool)] = &[
    ("empty", is_empty_after_marker),
    ("banner", is_banner_line),
    ("metadata", is_metadata_tag),
];

/// Resolve the purpose line for a function whose definition starts at
/// `def_line` (1-based). Returns `None` when no comment line qualifies.
pub fn resolve_purpose(script: &ScriptFile, def_line: usize) -> Option<String> {
    // Walk upward while lines are blank or comments; the first other line
    // terminates the block.
    let mut numbers = Vec::new();
    let mut line_no = def_line;
    while line_no > 1 {
        line_no -= 1;
        let trimmed = script.line(line_no)?.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('#') {
            numbers.push(line_no);
            continue;
        }
        break;
    }
    numbers.reverse();

    let block: Vec<&str> = numbers
        .iter()
        .map(|&n| script.line(n).unwrap_or("").trim())
        .collect();

    // First qualifying line in file order wins; blocks are never joined.
    for (i, line) in block.iter().enumerate() {
        if is_sandwiched_title(&block, i) {
            continue;
        }
        if let Some(body) = qualify(line) {
            return Some(body);
        }
    }
    None
}

/// A section title enclosed between two banner lines belongs to the
/// banner, not to the function below it:
///
/// ```text
/// # ===========
/// # Backup Section
/// # ===========
/// ```
fn is_sandwiched_title(block: &[&str], i: usize) -> bool {
    if i == 0 || i + 1 >= block.len() {
        return false;
    }
    is_banner_line(strip_marker(block[i - 1])) && is_banner_line(strip_marker(block[i + 1]))
}

/// Apply the disqualifier list to one raw comment line. Returns the
/// stripped body when the line qualifies as a purpose.
fn qualify(raw_line: &str) -> Option<String> {
    let trimmed = raw_line.trim();
    if trimmed.starts_with("#!") {
        return None;
    }
    let body = strip_marker(trimmed);
    for (_name, disqualifies) in DISQUALIFIERS {
        if disqualifies(body) {
            return None;
        }
    }
    Some(body.to_string())
}

/// Remove leading `#` markers and surrounding whitespace
fn strip_marker(line: &str) -> &str {
    line.trim_start_matches('#').trim()
}

fn is_empty_after_marker(body: &str) -> bool {
    body.is_empty()
}

/// Separator lines like `==========` or `----` contain no alphanumerics
fn is_banner_line(body: &str) -> bool {
    !body.is_empty() && body.chars().all(|c| !c.is_alphanumeric())
}

fn is_metadata_tag(body: &str) -> bool {
    let lower = body.to_lowercase();
    if METADATA_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
    {
        return true;
    }
    // A bare tag disqualifies only when the line is nothing but the tag
    let word = body.trim_end_matches(':');
    METADATA_TAGS
        .iter()
        .any(|tag| word.eq_ignore_ascii_case(tag))
}
