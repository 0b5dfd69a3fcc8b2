//! # CLI Error Type
//!
//! Unified error type for menu actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Menu action (add, remove, ...)                                        │
//! │  CliResult<()>                                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CoreError? ──── duplicate / not found / invalid ──► print, continue   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  StoreError? ─── file unreadable / unwritable ─────► print, continue   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  InputClosed? ── stdin reached EOF ────────────────► save, exit        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Terminal? ───── stdout/stdin broken ──────────────► exit non-zero     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use stockroom_core::{CoreError, ValidationError};
use stockroom_store::StoreError;
use thiserror::Error;

use crate::state::ConfigError;

/// Errors surfaced by the console application.
#[derive(Debug, Error)]
pub enum CliError {
    /// Inventory rule violation.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Inventory file failure.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Config file could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading or writing the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    /// Standard input was closed while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,
}

impl CliError {
    /// True for errors that must end the session.
    ///
    /// Everything else is reported and the menu continues.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CliError::Terminal(_) | CliError::Config(_))
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Core(CoreError::Validation(err))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_are_not_fatal() {
        let err: CliError = CoreError::ProductNotFound("Ink".into()).into();
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "Product 'Ink' does not exist in the inventory");

        let err: CliError = ValidationError::Required {
            field: "name".into(),
        }
        .into();
        assert!(matches!(err, CliError::Core(CoreError::Validation(_))));
    }

    #[test]
    fn test_terminal_errors_are_fatal() {
        let err: CliError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(err.is_fatal());
        assert!(!CliError::InputClosed.is_fatal());
    }
}
