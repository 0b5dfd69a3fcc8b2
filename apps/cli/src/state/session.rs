//! # Session State
//!
//! One running inventory session: the products in memory, the file they
//! came from, and whether the menu loop should keep going.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  Session::open(store) ──► store.load() ──► inventory in memory         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  menu actions ──────────► inventory_mut() ──► add / remove / update    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  request_exit() ────────► is_running() == false                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  save() ────────────────► store.save(&inventory)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is written to disk between load and exit. A session whose file
//! could not be read at all is never saved, so the unread file is not
//! overwritten with an empty inventory.

use stockroom_core::Inventory;
use stockroom_store::{InventoryStore, SkippedLine, StoreResult};
use tracing::info;

/// In-memory state owned by the menu driver.
#[derive(Debug)]
pub struct Session {
    inventory: Inventory,
    store: InventoryStore,
    running: bool,
    writable: bool,
}

impl Session {
    /// Loads the store's file and starts a running session.
    ///
    /// ## Returns
    /// The session plus every line that could not be loaded.
    pub fn open(store: InventoryStore) -> StoreResult<(Self, Vec<SkippedLine>)> {
        let report = store.load()?;
        info!(
            path = ?store.path(),
            products = report.inventory.len(),
            created = report.created,
            "Session opened"
        );

        let session = Session {
            inventory: report.inventory,
            store,
            running: true,
            writable: true,
        };
        Ok((session, report.skipped))
    }

    /// Starts a session over an already-built inventory.
    #[cfg(test)]
    pub(crate) fn with_inventory(store: InventoryStore, inventory: Inventory) -> Self {
        Session {
            inventory,
            store,
            running: true,
            writable: true,
        }
    }

    /// Starts an empty session over a file that failed to load.
    ///
    /// The menu works as usual but [`is_writable`](Self::is_writable) is
    /// false, so the file is left untouched on exit.
    pub fn unreadable(store: InventoryStore) -> Self {
        Session {
            inventory: Inventory::new(),
            store,
            running: true,
            writable: false,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// False once exit has been requested.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// False when the file could not be read at startup.
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// Ends the menu loop after the current action.
    pub fn request_exit(&mut self) {
        self.running = false;
    }

    /// Writes the inventory back to the store's file.
    pub fn save(&self) -> StoreResult<usize> {
        self.store.save(&self.inventory)
    }
}
