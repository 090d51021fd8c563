//! Error types for txtplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for txtplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while loading or plotting a file.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Failed to open or read a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A field could not be parsed as a number.
    #[error("{path}:{line}: could not convert '{token}' to a number")]
    Parse {
        /// Source file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Offending field.
        token: String,
    },

    /// A line has the wrong number of fields.
    #[error("{path}:{line}: expected {expected} columns, found {found}")]
    ColumnMismatch {
        /// Source file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Column count established by the first data line.
        expected: usize,
        /// Column count on this line.
        found: usize,
    },

    /// The file holds no data lines.
    #[error("No numeric data in {path}")]
    Empty {
        /// Source file.
        path: PathBuf,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Parse error.
    pub fn parse(path: impl Into<PathBuf>, line: usize, token: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            token: token.into(),
        }
    }

    /// Create a ColumnMismatch error.
    pub fn column_mismatch(
        path: impl Into<PathBuf>,
        line: usize,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::ColumnMismatch {
            path: path.into(),
            line,
            expected,
            found,
        }
    }

    /// Create an Empty error.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::Empty { path: path.into() }
    }
}
