//! # stockroom-store: Inventory File Layer for Stockroom
//!
//! This crate reads and writes the inventory file. It owns every byte that
//! touches the disk; the product rules stay in `stockroom-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Console session start / exit                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ InventoryStore│    │    record     │    │    error     │  │   │
//! │  │   │  (store.rs)   │    │  (record.rs)  │    │  (error.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ load / save   │───►│ line ↔ Product│    │ StoreError   │  │   │
//! │  │   │ atomic rename │    │ legacy lines  │    │ SkipReason   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     inventory.txt                               │   │
//! │  │   name,category,price,quantity  (one product per line)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stockroom_store::{InventoryStore, StoreConfig};
//!
//! let store = InventoryStore::new(StoreConfig::new("inventory.txt"));
//! let report = store.load()?;
//! for skipped in &report.skipped {
//!     eprintln!("line {}: {}", skipped.line, skipped.reason);
//! }
//! store.save(&report.inventory)?;
//! # Ok::<(), stockroom_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod record;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{SkipReason, StoreError, StoreResult};
pub use store::{InventoryStore, LoadReport, SkippedLine, StoreConfig};
