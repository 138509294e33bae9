//! Index serialization
//!
//! Writes the index as pretty-printed JSON with stable ordering: map keys
//! are lexicographic (the model uses `BTreeMap`) and sequences keep their
//! insertion order, so unchanged input always serializes to identical
//! bytes. The write is atomic: content goes to a sibling temp file which
//! is then renamed over the destination, so an interrupted run never
//! leaves a partial index behind.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{IndexError, Result};
use crate::schema::ExtractIndex;

/// Serialize `index` to `dest` atomically
pub fn write_index(index: &ExtractIndex, dest: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(index).map_err(|e| IndexError::Write {
        path: dest.display().to_string(),
        message: format!("serialization failed: {e}"),
    })?;

    // Atomic write: temp file in the destination directory, then rename
    let temp_path = dest.with_extension("json.tmp");
    fs::write(&temp_path, format!("{json}\n")).map_err(|e| IndexError::Write {
        path: dest.display().to_string(),
        message: e.to_string(),
    })?;
    fs::rename(&temp_path, dest).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        IndexError::Write {
            path: dest.display().to_string(),
            message: e.to_string(),
        }
    })?;

    debug!(path = %dest.display(), "index written");
    Ok(())
}
