//! Index construction
//!
//! `build_index` is the core entry point: discover scripts, parse and
//! extract each one (in parallel, per file), then merge the per-file record
//! lists into one `ExtractIndex`. The merge is deterministic: files are
//! processed in lexicographic path order and records in line order, so two
//! runs over unchanged input produce the same index.
//!
//! Per-file parse failures never abort a run; they are collected as
//! warnings and the file is excluded.

use std::collections::btree_map::Entry;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::discover::discover;
use crate::error::Result;
use crate::extract::extract_functions;
use crate::parse::parse_source;
use crate::schema::{ExtractIndex, FunctionRecord, RunResult, Warning};
use crate::script::ScriptFile;

/// Build the function index for every shell script under `root`.
///
/// Fatal only when the root itself is unusable. Everything else that goes
/// wrong is reported through `RunResult::warnings` next to a complete
/// index of the files that did work.
pub fn build_index(root: &Path) -> Result<RunResult> {
    let (scripts, mut warnings) = discover(root)?;
    debug!(count = scripts.len(), "discovered scripts");

    // Fan out per file; each parse-and-extract pipeline is independent.
    let per_file: Vec<std::result::Result<Vec<FunctionRecord>, Warning>> = scripts
        .par_iter()
        .map(extract_one)
        .collect();

    // Single aggregation step; `scripts` is already path-sorted and
    // `collect` preserves that order.
    let mut records = Vec::new();
    for outcome in per_file {
        match outcome {
            Ok(file_records) => records.extend(file_records),
            Err(warning) => warnings.push(warning),
        }
    }
    records.sort_by(|a, b| a.file.cmp(&b.file).then(a.start.cmp(&b.start)));

    let index = aggregate(records, &mut warnings);
    for warning in &warnings {
        warn!("{warning}");
    }

    Ok(RunResult { index, warnings })
}

fn extract_one(script: &ScriptFile) -> std::result::Result<Vec<FunctionRecord>, Warning> {
    match parse_source(&script.display_path, script.content()) {
        Ok(tree) => {
            let records = extract_functions(script, &tree);
            debug!(
                path = %script.display_path,
                functions = records.len(),
                "extracted"
            );
            Ok(records)
        }
        Err(e) => Err(Warning::ParseFailure {
            path: script.display_path.clone(),
            reason: e.to_string(),
        }),
    }
}

/// Fold the ordered record list into the three index views.
///
/// Duplicate names resolve to the first-discovered record; every shadowed
/// definition is surfaced as a `DuplicateName` warning carrying both
/// locations, so callers can still reach the other definition.
fn aggregate(records: Vec<FunctionRecord>, warnings: &mut Vec<Warning>) -> ExtractIndex {
    let mut index = ExtractIndex::default();

    for record in records {
        match index.index.entry(record.name.clone()) {
            Entry::Occupied(existing) => {
                warnings.push(Warning::DuplicateName {
                    name: record.name.clone(),
                    kept: existing.get().location(),
                    shadowed: record.location(),
                });
            }
            Entry::Vacant(slot) => {
                index
                    .categories
                    .entry(record.category.name().to_string())
                    .or_default()
                    .push(record.name.clone());
                index.quick_ref.insert(record.name.clone(), record.location());
                slot.insert(record);
            }
        }
    }

    index
}
