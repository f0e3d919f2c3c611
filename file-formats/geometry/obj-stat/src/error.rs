//! Error handling for OBJ statistics scans

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning an OBJ file
#[derive(Debug, Error)]
pub enum ObjError {
    /// The input file does not exist
    #[error("Input file not found: {}", path.display())]
    InputNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// A vertex record could not be parsed
    #[error("Parse error on line {line}: {reason} ('{content}')")]
    Parse {
        /// 1-based line number of the offending record
        line: usize,
        /// Raw content of the offending line
        content: String,
        /// What was wrong with the record
        reason: String,
    },

    /// An I/O error occurred while reading the input
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ObjError {
    /// Creates a parse error for the given line
    pub(crate) fn parse(line: usize, content: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}

/// Type alias for Results from OBJ statistics operations
pub type Result<T> = std::result::Result<T, ObjError>;
