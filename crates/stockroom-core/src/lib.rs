//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It holds the product model and
//! the inventory rules as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console Menu (apps/cli)                      │   │
//! │  │    Add ──► Remove ──► Search ──► Update ──► List ──► Exit      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌─────────────┐  ┌────────────┐               │   │
//! │  │   │   types   │  │  inventory  │  │ validation │               │   │
//! │  │   │  Product  │  │  Inventory  │  │   rules    │               │   │
//! │  │   │  Update   │  │  search     │  │   parsing  │               │   │
//! │  │   └───────────┘  └─────────────┘  └────────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CONSOLE • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                stockroom-store (File Layer)                     │   │
//! │  │              inventory.txt load / atomic save                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and ProductUpdate
//! - [`inventory`] - The ordered, name-unique product collection
//! - [`error`] - Domain error types
//! - [`validation`] - Field rules and text parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Inventory, Product};
//!
//! let mut inventory = Inventory::new();
//! inventory.add(Product::new("Blue Ink", "Printers", 10.5, 50).unwrap()).unwrap();
//! inventory.add(Product::new("Paper", "Office", 5.0, 100).unwrap()).unwrap();
//!
//! // Duplicate names are rejected regardless of case
//! assert!(inventory.add(Product::new("paper", "Office", 1.0, 1).unwrap()).is_err());
//!
//! // Every search word must appear in the name
//! assert_eq!(inventory.search("ink blue").len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::{Inventory, UpdateOutcome};
pub use types::{Product, ProductUpdate};
