//! # Inventory
//!
//! The in-memory product collection and its operations.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  Menu Choice            Operation                 Collection Change     │
//! │  ───────────            ─────────                 ─────────────────     │
//! │                                                                         │
//! │  1 Add ────────────────► add(product) ──────────► products.push(p)     │
//! │                                                                         │
//! │  2 Remove ─────────────► remove_by_name(name) ──► products.remove(i)   │
//! │                                                                         │
//! │  3 Search ─────────────► search(query) ─────────► (read only)          │
//! │                                                                         │
//! │  4 Update ─────────────► update(name, ..) ──────► products[i] = next   │
//! │                                                                         │
//! │  5 List ───────────────► list_all() ────────────► (read only)          │
//! │                                                                         │
//! │  NOTE: Every name lookup is case-insensitive and exact.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No two products share a name (case-insensitive)
//! - Insertion order is display order

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{Product, ProductUpdate};

/// Result of an update request.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The caller confirmed; holds the product as stored after the update.
    Applied(Product),
    /// The caller declined; the product was left unmodified.
    Cancelled,
}

/// Ordered collection of products with unique names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory {
            products: Vec::new(),
        }
    }

    /// Adds a product at the end of the list.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(CoreError::DuplicateProduct)` if the name is taken (any case);
    ///   the inventory is unchanged
    pub fn add(&mut self, product: Product) -> CoreResult<()> {
        if self.position(product.name()).is_some() {
            return Err(CoreError::DuplicateProduct(product.name().to_string()));
        }

        debug!(name = %product.name(), "Adding product");
        self.products.push(product);
        Ok(())
    }

    /// Removes the product with the given name (case-insensitive).
    ///
    /// Returns the removed product.
    pub fn remove_by_name(&mut self, name: &str) -> CoreResult<Product> {
        let index = self
            .position(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))?;

        debug!(name = %name, "Removing product");
        Ok(self.products.remove(index))
    }

    /// Finds products whose name contains every word of the query.
    ///
    /// ## Matching Rules
    /// ```text
    /// query "ink blue" → tokens ["ink", "blue"]
    ///
    /// "Blue Ink"   → "blue ink" contains "ink" AND "blue"  ✅
    /// "Ink Pad"    → "ink pad" missing "blue"               ❌
    /// "Paper"      → missing both                           ❌
    /// ```
    /// - Tokens are whitespace separated and lower-cased
    /// - Order of tokens does not matter
    /// - An empty query matches every product
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();

        let found: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| {
                let name = p.name().to_lowercase();
                tokens.iter().all(|t| name.contains(t.as_str()))
            })
            .collect();

        debug!(query = %query, count = found.len(), "Search returned products");
        found
    }

    /// Updates the product with the given name after the caller confirms.
    ///
    /// ## Flow
    /// ```text
    /// locate(name) ──► not found → Err(ProductNotFound)
    ///      │
    ///      ▼
    /// current.with_update(update) ──► invalid → Err(Validation)
    ///      │
    ///      ▼
    /// renamed onto another product? → Err(DuplicateProduct)
    ///      │
    ///      ▼
    /// confirm(&current, &preview) ──► false → Ok(Cancelled)
    ///      │
    ///      ▼
    /// store preview → Ok(Applied)
    /// ```
    ///
    /// `confirm` is only called once the preview is known to be valid.
    pub fn update<F>(
        &mut self,
        name: &str,
        update: &ProductUpdate,
        confirm: F,
    ) -> CoreResult<UpdateOutcome>
    where
        F: FnOnce(&Product, &Product) -> bool,
    {
        let index = self
            .position(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))?;

        let preview = self.products[index].with_update(update)?;

        let clash = self
            .products
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && p.has_name(preview.name()));
        if clash {
            return Err(CoreError::DuplicateProduct(preview.name().to_string()));
        }

        if !confirm(&self.products[index], &preview) {
            debug!(name = %name, "Update cancelled");
            return Ok(UpdateOutcome::Cancelled);
        }

        debug!(name = %name, new_name = %preview.name(), "Updating product");
        self.products[index] = preview.clone();
        Ok(UpdateOutcome::Applied(preview))
    }

    /// All products in insertion order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.position(name).map(|i| &self.products[i])
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the inventory holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.has_name(name))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn product(name: &str) -> Product {
        Product::new(name, "Office", 2.5, 10).unwrap()
    }

    fn sample() -> Inventory {
        let mut inv = Inventory::new();
        inv.add(product("Blue Ink")).unwrap();
        inv.add(product("Paper")).unwrap();
        inv.add(product("Ink Pad")).unwrap();
        inv
    }

    fn names(found: &[&Product]) -> Vec<String> {
        found.iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn test_add_preserves_order() {
        let inv = sample();
        let order: Vec<&str> = inv.list_all().iter().map(|p| p.name()).collect();
        assert_eq!(order, vec!["Blue Ink", "Paper", "Ink Pad"]);
    }

    #[test]
    fn test_add_rejects_duplicate_any_case() {
        let mut inv = Inventory::new();
        inv.add(product("ink")).unwrap();

        let err = inv.add(product("Ink")).unwrap_err();
        assert_eq!(err, CoreError::DuplicateProduct("Ink".to_string()));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_add_then_remove_restores_state() {
        let mut inv = sample();
        let before = inv.clone();

        inv.add(product("Stapler")).unwrap();
        let removed = inv.remove_by_name("sTaPlEr").unwrap();

        assert_eq!(removed.name(), "Stapler");
        assert_eq!(inv, before);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut inv = sample();
        let err = inv.remove_by_name("Stapler").unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));
        assert_eq!(inv.len(), 3);
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        let inv = sample();
        assert_eq!(inv.search("").len(), 3);
        assert_eq!(inv.search("   ").len(), 3);
    }

    #[test]
    fn test_search_substring() {
        let mut inv = Inventory::new();
        inv.add(product("Blue Ink")).unwrap();
        inv.add(product("Paper")).unwrap();

        assert_eq!(names(&inv.search("ink")), vec!["Blue Ink"]);
    }

    #[test]
    fn test_search_tokens_are_and_and_unordered() {
        let inv = sample();

        assert_eq!(names(&inv.search("blue ink")), vec!["Blue Ink"]);
        assert_eq!(names(&inv.search("ink blue")), vec!["Blue Ink"]);
        assert_eq!(names(&inv.search("INK")), vec!["Blue Ink", "Ink Pad"]);
        assert!(inv.search("ink paper").is_empty());
    }

    #[test]
    fn test_update_applies_on_confirm() {
        let mut inv = sample();
        let update = ProductUpdate::new().price(3.75).quantity(0);

        let outcome = inv.update("paper", &update, |_, _| true).unwrap();

        let stored = inv.get("Paper").unwrap();
        assert_eq!(stored.price(), 3.75);
        assert_eq!(stored.quantity(), 0);
        assert_eq!(stored.category(), "Office");
        assert_eq!(outcome, UpdateOutcome::Applied(stored.clone()));
    }

    #[test]
    fn test_update_cancelled_leaves_product() {
        let mut inv = sample();
        let before = inv.clone();
        let update = ProductUpdate::new().name("Cardstock").price(9.0);

        let outcome = inv
            .update("Paper", &update, |current, preview| {
                assert_eq!(current.name(), "Paper");
                assert_eq!(preview.name(), "Cardstock");
                false
            })
            .unwrap();

        assert_eq!(outcome, UpdateOutcome::Cancelled);
        assert_eq!(inv, before);
    }

    #[test]
    fn test_update_invalid_values_never_confirm() {
        let mut inv = sample();
        let update = ProductUpdate::new().quantity(-4);

        let err = inv
            .update("Paper", &update, |_, _| panic!("must not ask"))
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::Validation(ValidationError::MustBeNonNegative {
                field: "quantity".to_string()
            })
        );
        assert_eq!(inv.get("Paper").unwrap().quantity(), 10);
    }

    #[test]
    fn test_update_rename_clash_rejected() {
        let mut inv = sample();
        let update = ProductUpdate::new().name("blue ink");

        let err = inv.update("Paper", &update, |_, _| true).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateProduct(_)));

        // Renaming a product to a different casing of its own name is fine
        let update = ProductUpdate::new().name("PAPER");
        inv.update("Paper", &update, |_, _| true).unwrap();
        assert_eq!(inv.list_all()[1].name(), "PAPER");
    }

    #[test]
    fn test_update_unknown_product() {
        let mut inv = sample();
        let err = inv
            .update("Stapler", &ProductUpdate::new(), |_, _| true)
            .unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));
    }
}
