//! # Validation Module
//!
//! Input validation utilities for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt (apps/cli)                                    │
//! │  ├── Re-prompts on empty or unparsable input                           │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Text parsing (THIS MODULE)                                   │
//! │  ├── parse_price / parse_quantity                                      │
//! │  └── Shared by the prompts and the inventory file loader               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Product invariants (THIS MODULE)                             │
//! │  ├── price > 0, finite                                                 │
//! │  ├── quantity >= 0                                                     │
//! │  └── name not blank                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_price, validate_quantity};
//!
//! let price = parse_price("10.50").unwrap();
//! assert_eq!(price, 10.5);
//!
//! assert!(validate_quantity(-1).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Blue Ink").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be strictly positive (> 0)
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_price;
///
/// assert!(validate_price(10.5).is_ok());
/// assert!(validate_price(0.0).is_err());
/// assert!(validate_price(-5.0).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (out of stock)
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Text Parsers
// =============================================================================

/// Parses and validates a price typed by a user or read from a file.
///
/// Surrounding whitespace is ignored.
pub fn parse_price(text: &str) -> ValidationResult<f64> {
    let price: f64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("'{}' is not a number", text.trim()),
        })?;

    validate_price(price)?;
    Ok(price)
}

/// Parses and validates a quantity typed by a user or read from a file.
///
/// Only whole numbers are accepted; `"2.5"` is a format error.
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    let quantity: i64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: format!("'{}' is not a whole number", text.trim()),
        })?;

    validate_quantity(quantity)?;
    Ok(quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================
