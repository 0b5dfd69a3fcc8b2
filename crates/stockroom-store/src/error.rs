//! # Store Error Types
//!
//! Error types for inventory file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / csv::Error                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in app) ← Reported, the session keeps running               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A single bad line is NOT an error: it becomes a [`SkipReason`] in the
//! load report and loading continues.

use std::io;
use std::path::{Path, PathBuf};

use stockroom_core::{CoreError, ValidationError};
use thiserror::Error;

/// Inventory file errors.
///
/// Either one means the whole load or save step failed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Opening, reading, writing or renaming the file failed.
    ///
    /// ## When This Occurs
    /// - File permissions issue
    /// - Disk full
    /// - Parent directory missing and cannot be created
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The record writer failed.
    #[error("Failed to write inventory record: {0}")]
    Csv(#[from] csv::Error),
}

impl StoreError {
    /// Creates an Io error carrying the file it happened on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Why a line of the inventory file was not loaded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipReason {
    /// Fewer than four fields on the line.
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),

    /// A field failed validation or parsing.
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    /// The inventory refused the product (its name was already loaded).
    #[error("{0}")]
    Rejected(#[from] CoreError),

    /// The line is not valid UTF-8.
    #[error("line is not valid UTF-8")]
    Encoding,
}
