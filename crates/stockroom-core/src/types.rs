//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐            ┌─────────────────┐                     │
//! │  │    Product      │            │  ProductUpdate  │                     │
//! │  │  ─────────────  │            │  ─────────────  │                     │
//! │  │  name           │◄── apply ──│  name?          │                     │
//! │  │  category       │            │  category?      │                     │
//! │  │  price    (> 0) │            │  price?         │                     │
//! │  │  quantity (>= 0)│            │  quantity?      │                     │
//! │  └─────────────────┘            └─────────────────┘                     │
//! │                                                                         │
//! │  `None` in a ProductUpdate field means "keep the current value".       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A product is identified by its name, compared case-insensitively.
//! There is no separate ID: the inventory file has no column for one.

use std::fmt;

use serde::Serialize;

use crate::validation::{
    validate_price, validate_product_name, validate_quantity, ValidationResult,
};

/// Column widths used by the tabular display.
pub const NAME_WIDTH: usize = 30;
pub const CATEGORY_WIDTH: usize = 20;
pub const PRICE_WIDTH: usize = 10;
pub const QUANTITY_WIDTH: usize = 10;

// =============================================================================
// Product
// =============================================================================

/// A product held in the inventory.
///
/// ## Invariants
/// - `name` is never blank
/// - `price > 0` and finite
/// - `quantity >= 0`
///
/// Fields are private; construction and every setter run the same
/// validators.
///
/// Serializes as a flat `name, category, price, quantity` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    category: String,
    price: f64,
    quantity: i64,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::Product;
    ///
    /// let ink = Product::new("Blue Ink", "Printers", 10.5, 50).unwrap();
    /// assert_eq!(ink.quantity(), 50);
    ///
    /// assert!(Product::new("Blue Ink", "Printers", 0.0, 50).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> ValidationResult<Self> {
        let name = name.into();

        validate_product_name(&name)?;
        validate_price(price)?;
        validate_quantity(quantity)?;

        Ok(Product {
            name,
            category: category.into(),
            price,
            quantity,
        })
    }

    /// Returns the product name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category.
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the unit price.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the quantity in stock.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Replaces the name. A blank name is rejected.
    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        validate_product_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the category.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Replaces the price if it is greater than zero.
    ///
    /// On error the previous price is kept.
    pub fn set_price(&mut self, price: f64) -> ValidationResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    /// Replaces the quantity if it is not negative.
    ///
    /// On error the previous quantity is kept.
    pub fn set_quantity(&mut self, quantity: i64) -> ValidationResult<()> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Case-insensitive name comparison used for every lookup.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Returns a copy with the update applied, leaving `self` untouched.
    ///
    /// All four fields are validated before anything is returned, so a
    /// rejected update never produces a half-applied product.
    pub fn with_update(&self, update: &ProductUpdate) -> ValidationResult<Product> {
        let mut next = self.clone();

        if let Some(name) = &update.name {
            next.set_name(name.clone())?;
        }
        if let Some(category) = &update.category {
            next.set_category(category.clone());
        }
        if let Some(price) = update.price {
            next.set_price(price)?;
        }
        if let Some(quantity) = update.quantity {
            next.set_quantity(quantity)?;
        }

        Ok(next)
    }

    /// Header row matching the `Display` layout.
    pub fn table_header() -> String {
        format!(
            "{:<nw$} | {:<cw$} | {:<pw$} | {:<qw$}",
            "Name",
            "Category",
            "Price",
            "Quantity",
            nw = NAME_WIDTH,
            cw = CATEGORY_WIDTH,
            pw = PRICE_WIDTH,
            qw = QUANTITY_WIDTH,
        )
    }
}

/// Fixed-width table row: name (30), category (20), price (10, 2 decimals),
/// quantity (10). Long text is truncated.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<nw$.nw$} | {:<cw$.cw$} | {:<pw$.2} | {:<qw$}",
            self.name,
            self.category,
            self.price,
            self.quantity,
            nw = NAME_WIDTH,
            cw = CATEGORY_WIDTH,
            pw = PRICE_WIDTH,
            qw = QUANTITY_WIDTH,
        )
    }
}

// =============================================================================
// Product Update
// =============================================================================

/// A partial change to a product.
///
/// ## Usage
/// ```rust
/// use stockroom_core::ProductUpdate;
///
/// // Only change the price; everything else is kept
/// let update = ProductUpdate::new().price(12.0);
/// assert!(update.name.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl ProductUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// True when every field is `None`.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn ink() -> Product {
        Product::new("Tinta", "Impresoras", 10.5, 50).unwrap()
    }

    #[test]
    fn test_product_accessors() {
        let p = ink();
        assert_eq!(p.name(), "Tinta");
        assert_eq!(p.category(), "Impresoras");
        assert_eq!(p.price(), 10.5);
        assert_eq!(p.quantity(), 50);
    }

    #[test]
    fn test_constructor_validates() {
        assert!(matches!(
            Product::new("", "Office", 1.0, 1),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            Product::new("Ink", "Office", -2.0, 1),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            Product::new("Ink", "Office", 1.0, -1),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
    }

    #[test]
    fn test_setters_accept_valid_values() {
        let mut p = ink();
        p.set_price(12.0).unwrap();
        p.set_quantity(40).unwrap();
        assert_eq!(p.price(), 12.0);
        assert_eq!(p.quantity(), 40);

        p.set_quantity(0).unwrap();
        assert_eq!(p.quantity(), 0);
    }

    #[test]
    fn test_setters_keep_value_on_rejection() {
        let mut p = ink();

        for bad in [0.0, -5.0, -0.001, f64::NAN] {
            assert!(p.set_price(bad).is_err());
            assert_eq!(p.price(), 10.5);
        }

        for bad in [-1, -100, i64::MIN] {
            assert!(p.set_quantity(bad).is_err());
            assert_eq!(p.quantity(), 50);
        }

        assert!(p.set_name("  ").is_err());
        assert_eq!(p.name(), "Tinta");
    }

    #[test]
    fn test_has_name_ignores_case() {
        let p = Product::new("Blue Ink", "Office", 2.0, 1).unwrap();
        assert!(p.has_name("blue ink"));
        assert!(p.has_name("BLUE INK"));
        assert!(!p.has_name("blue"));
    }

    #[test]
    fn test_with_update_is_all_or_nothing() {
        let p = ink();

        let update = ProductUpdate::new().name("Tinta Negra").price(-1.0);
        assert!(p.with_update(&update).is_err());
        assert_eq!(p, ink());

        let update = ProductUpdate::new().category("Oficina").quantity(7);
        let next = p.with_update(&update).unwrap();
        assert_eq!(next.name(), "Tinta");
        assert_eq!(next.category(), "Oficina");
        assert_eq!(next.price(), 10.5);
        assert_eq!(next.quantity(), 7);
    }

    #[test]
    fn test_display_layout() {
        let p = Product::new("A".repeat(40), "Office", 3.456, 7).unwrap();
        let row = p.to_string();
        let columns: Vec<&str> = row.split(" | ").collect();

        assert_eq!(columns.len(), 4);
        assert_eq!(columns[0], "A".repeat(NAME_WIDTH));
        assert_eq!(columns[1].trim_end(), "Office");
        assert_eq!(columns[1].len(), CATEGORY_WIDTH);
        assert_eq!(columns[2].trim_end(), "3.46");
        assert_eq!(columns[3].trim_end(), "7");
    }

    #[test]
    fn test_empty_update() {
        assert!(ProductUpdate::new().is_empty());
        assert!(!ProductUpdate::new().quantity(1).is_empty());
    }
}
