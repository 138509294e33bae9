//! Script discovery
//!
//! Walks a root directory and collects every file that is either named with
//! a shell extension or starts with a shell shebang. Output order is stable:
//! candidates are sorted lexicographically by path before being returned,
//! so every downstream stage sees the same sequence on every run.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IndexError, Result};
use crate::schema::Warning;
use crate::script::ScriptFile;

/// Recognized shell script extensions
pub const SHELL_EXTENSIONS: &[&str] = &["sh", "bash", "ksh", "dash", "zsh"];

/// Interpreter names accepted in a shebang line
const SHEBANG_SHELLS: &[&str] = &["sh", "bash", "ksh", "mksh", "dash", "ash", "zsh"];

/// Discover all shell scripts under `root`.
///
/// Fails only if the root itself does not exist or cannot be enumerated.
/// Individual unreadable files are skipped and recorded as warnings;
/// binary files and symlinked directories are skipped silently.
pub fn discover(root: &Path) -> Result<(Vec<ScriptFile>, Vec<Warning>)> {
    if !root.is_dir() {
        return Err(IndexError::Discovery {
            path: root.display().to_string(),
            message: "not a directory".to_string(),
        });
    }

    let mut scripts = Vec::new();
    let mut warnings = Vec::new();
    walk(root, root, true, &mut scripts, &mut warnings)?;

    scripts.sort_by(|a, b| a.display_path.cmp(&b.display_path));
    Ok((scripts, warnings))
}

fn walk(
    root: &Path,
    dir: &Path,
    is_root: bool,
    scripts: &mut Vec<ScriptFile>,
    warnings: &mut Vec<Warning>,
) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if is_root => {
            return Err(IndexError::Discovery {
                path: dir.display().to_string(),
                message: e.to_string(),
            });
        }
        Err(e) => {
            warnings.push(Warning::UnreadableFile {
                path: display_path(root, dir),
                reason: e.to_string(),
            });
            return Ok(());
        }
    };

    let mut paths: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
    paths.sort();

    for path in paths {
        if should_skip_path(&path) {
            continue;
        }

        if path.is_dir() {
            // Not following directory symlinks keeps the walk cycle-free
            if is_symlink(&path) {
                debug!(path = %path.display(), "skipping symlinked directory");
                continue;
            }
            walk(root, &path, false, scripts, warnings)?;
        } else if path.is_file() {
            collect_candidate(root, &path, scripts, warnings);
        }
    }

    Ok(())
}

fn collect_candidate(
    root: &Path,
    path: &Path,
    scripts: &mut Vec<ScriptFile>,
    warnings: &mut Vec<Warning>,
) {
    let by_extension = has_shell_extension(path);

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            if by_extension {
                warnings.push(Warning::UnreadableFile {
                    path: display_path(root, path),
                    reason: e.to_string(),
                });
            }
            return;
        }
    };

    // NUL byte means binary content, regardless of extension
    if bytes.contains(&0) {
        debug!(path = %path.display(), "skipping binary file");
        return;
    }

    if !by_extension && !has_shell_shebang(&bytes) {
        return;
    }

    match String::from_utf8(bytes) {
        Ok(content) => {
            let rel_path = display_path(root, path);
            debug!(path = %rel_path, "discovered script");
            scripts.push(ScriptFile::new(path.to_path_buf(), rel_path, content));
        }
        Err(e) => {
            warnings.push(Warning::UnreadableFile {
                path: display_path(root, path),
                reason: e.to_string(),
            });
        }
    }
}

/// Record paths relative to the scanned root so the index is stable
/// across checkouts; fall back to the full path if stripping fails.
fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn is_symlink(path: &Path) -> bool {
    path.symlink_metadata()
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}

/// Check if a path should be skipped during discovery.
///
/// Skips hidden files/directories and common dependency trees.
pub fn should_skip_path(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        name.starts_with('.') || name == "node_modules" || name == "vendor" || name == "target"
    } else {
        false
    }
}

/// Check if the path carries a recognized shell extension
pub fn has_shell_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SHELL_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Check if file content starts with a shell shebang line
pub fn has_shell_shebang(bytes: &[u8]) -> bool {
    let Some(rest) = bytes.strip_prefix(b"#!") else {
        return false;
    };
    let first_line = rest.split(|&b| b == b'\n').next().unwrap_or(&[]);
    let Ok(line) = std::str::from_utf8(first_line) else {
        return false;
    };

    // `#!/bin/sh`, `#!/usr/bin/env bash`, `#!/bin/bash -eu`
    let mut words = line.split_whitespace();
    let Some(interpreter) = words.next() else {
        return false;
    };
    let program = interpreter.rsplit('/').next().unwrap_or(interpreter);
    if program == "env" {
        words
            .next()
            .map(|arg| SHEBANG_SHELLS.contains(&arg))
            .unwrap_or(false)
    } else {
        SHEBANG_SHELLS.contains(&program)
    }
}
