//! Error types for the indexer
//!
//! Only two failure modes are fatal: the root directory being unusable and
//! the final index write failing. Per-file parse problems are surfaced as
//! warnings by the index builder, never as errors from `build_index`.

use std::process::ExitCode;

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors produced while building or writing an index
#[derive(Debug, Error)]
pub enum IndexError {
    /// The root path does not exist or cannot be enumerated
    #[error("cannot index {path}: {message}")]
    Discovery { path: String, message: String },

    /// A single file could not be parsed as shell
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// The index file could not be committed to its destination
    #[error("failed to write index to {path}: {message}")]
    Write { path: String, message: String },
}

impl IndexError {
    /// Map the error to a process exit code for the CLI
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Discovery { .. } => ExitCode::from(2),
            Self::Parse { .. } => ExitCode::from(3),
            Self::Write { .. } => ExitCode::from(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IndexError::Discovery {
            path: "/no/such/dir".to_string(),
            message: "not a directory".to_string(),
        };
        assert_eq!(err.to_string(), "cannot index /no/such/dir: not a directory");
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let discovery = IndexError::Discovery {
            path: String::new(),
            message: String::new(),
        };
        let write = IndexError::Write {
            path: String::new(),
            message: String::new(),
        };
        assert_ne!(
            format!("{:?}", discovery.exit_code()),
            format!("{:?}", write.exit_code())
        );
    }
}
