//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Inventory rule violations (lookup, duplicates) │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stockroom-store errors (separate crate)                               │
//! │  └── StoreError       - Inventory file failures                        │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the console driver reports                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → Console                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, field)
//! 3. Errors are enum variants, never String
//! 4. Nothing here is fatal: every variant maps to a reported no-op

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Inventory rule errors.
///
/// These errors represent lookups that found nothing or mutations that would
/// break the unique-name invariant. The inventory is left untouched whenever
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// No product matches the given name (case-insensitive).
    ///
    /// ## When This Occurs
    /// - `remove_by_name` with an unknown name
    /// - `update` with an unknown name
    #[error("Product '{0}' does not exist in the inventory")]
    ProductNotFound(String),

    /// A product with the same name (case-insensitive) already exists.
    ///
    /// ## User Workflow
    /// ```text
    /// Inventory: ["ink", "Paper"]
    ///      │
    ///      ▼
    /// add("Ink", ...)
    ///      │
    ///      ▼
    /// DuplicateProduct("Ink")  → inventory size unchanged
    /// ```
    #[error("Product '{0}' already exists in the inventory")]
    DuplicateProduct(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Returned by `Product::new` and the product setters. A setter that returns
/// one of these has left its field unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Text could not be parsed into the expected type.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::DuplicateProduct("Ink".to_string());
        assert_eq!(
            err.to_string(),
            "Product 'Ink' already exists in the inventory"
        );

        let err = CoreError::ProductNotFound("Stapler".to_string());
        assert_eq!(
            err.to_string(),
            "Product 'Stapler' does not exist in the inventory"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be greater than zero");

        let err = ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity cannot be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
