//! shindex: shell-script function indexer
//!
//! Scans a directory tree of shell scripts, parses each file into a
//! concrete syntax tree with tree-sitter, and builds a single
//! deterministic JSON index of every function definition: its exact
//! source span, leading purpose comment, inferred parameters, and a
//! naming-convention category. The index lets a downstream tool extract
//! any named function's source text without re-scanning files.
//!
//! Because extraction walks a real syntax tree, look-alike text inside
//! heredocs, quoted strings, or comments is never mistaken for a function
//! definition.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use shindex::{build_index, write_index};
//!
//! # fn main() -> shindex::Result<()> {
//! let result = build_index(Path::new("scripts/"))?;
//! for warning in &result.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! if let Some(record) = result.index.get("backup_directory") {
//!     println!("{} spans lines {}-{}", record.file, record.start, record.end_line());
//! }
//! write_index(&result.index, Path::new("function_index.json"))?;
//! # Ok(())
//! # }
//! ```

pub mod category;
pub mod cli;
pub mod discover;
pub mod error;
pub mod extract;
pub mod index;
pub mod params;
pub mod parse;
pub mod purpose;
pub mod schema;
pub mod script;
pub mod write;

// Re-export commonly used types
pub use category::{categorize, Category};
pub use cli::Cli;
pub use discover::discover;
pub use error::{IndexError, Result};
pub use extract::extract_functions;
pub use index::build_index;
pub use params::infer_params;
pub use parse::parse_source;
pub use purpose::resolve_purpose;
pub use schema::{ExtractIndex, FunctionRecord, RunResult, Warning};
pub use script::ScriptFile;
pub use write::write_index;
