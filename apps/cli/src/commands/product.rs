//! # Product Commands
//!
//! One function per menu action. Each prompts through the [`Console`],
//! calls into the session's [`Inventory`](stockroom_core::Inventory), and
//! prints the outcome.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Update Product Flow                                  │
//! │                                                                         │
//! │  "Name of the product to update" ──► not found? ──► ProductNotFound    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  New name / category / price / quantity (blank keeps current)          │
//! │       │   all blank ──────────────────────────────► "no changes"        │
//! │       ▼                                                                 │
//! │  inventory.update(name, update, confirm)                               │
//! │       │   invalid or name clash ──────────────────► error, no change    │
//! │       ▼                                                                 │
//! │  confirm: print preview, ask (y/n)                                     │
//! │       │   n ──────────────────────────────────────► "cancelled"         │
//! │       ▼                                                                 │
//! │  y ──► product replaced ──────────────────────────► "updated"           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors are returned to the menu loop, which prints them and carries on.

use std::io::{BufRead, Write};

use stockroom_core::{CoreError, Product, ProductUpdate, UpdateOutcome};
use tracing::info;

use crate::console::Console;
use crate::error::{CliError, CliResult};
use crate::state::Session;

/// Prompts for a new product and adds it.
///
/// The name is checked for duplicates before the remaining fields are
/// asked for, so a clash is reported straight away.
pub fn add_product<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    console.banner("Add Product")?;

    let name = console.prompt_non_empty("Name (may include spaces): ")?;
    if session.inventory().get(&name).is_some() {
        return Err(CoreError::DuplicateProduct(name).into());
    }

    let category = console.prompt_non_empty("Category (may include spaces): ")?;
    let price = console.prompt_price("Price: ")?;
    let quantity = console.prompt_quantity("Quantity: ")?;

    let product = Product::new(name, category, price, quantity)?;
    let added = product.name().to_string();
    session.inventory_mut().add(product)?;

    info!(name = %added, "Product added");
    console.report(format_args!(
        "Product '{}' was added to the inventory.",
        added
    ))
}

/// Shows the inventory, then removes the product named by the user.
pub fn remove_product<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    list_products(session, console)?;
    console.banner("Remove Product")?;

    let name = console.prompt("Name of the product to remove: ")?;
    let removed = session.inventory_mut().remove_by_name(&name)?;

    info!(name = %removed.name(), "Product removed");
    console.report(format_args!("Product '{}' was removed.", removed.name()))
}

/// Lists every product whose name contains all the words typed.
pub fn search_products<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    let query = console.prompt("Search product: ")?;
    let found = session.inventory().search(&query);

    if found.is_empty() {
        return console.report(format_args!(
            "No product matching '{}' exists in the inventory.",
            query
        ));
    }

    console.say("")?;
    console.report("Products found:")?;
    console.rule()?;
    console.say(Product::table_header())?;
    console.thin_rule()?;
    for product in found {
        console.say(product)?;
    }
    console.rule()
}

/// Edits an existing product after showing a preview.
pub fn update_product<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    console.banner("Update Product")?;
    console.say("Leave a field blank and press Enter to keep its current value.")?;

    let name = console.prompt_non_empty("Name of the product to update: ")?;
    let current = session
        .inventory()
        .get(&name)
        .cloned()
        .ok_or_else(|| CoreError::ProductNotFound(name.clone()))?;

    let update = ProductUpdate {
        name: console.prompt_replacement("New name", current.name())?,
        category: console.prompt_replacement("New category", current.category())?,
        price: console
            .prompt_optional_price(&format!("New price (current: {}): ", current.price()))?,
        quantity: console.prompt_optional_quantity(&format!(
            "New quantity (current: {}): ",
            current.quantity()
        ))?,
    };

    if update.is_empty() {
        return console.warn(format_args!("No changes entered for '{}'.", current.name()));
    }

    // Console failures inside the callback are carried out through here
    let mut prompt_error: Option<CliError> = None;
    let outcome = session
        .inventory_mut()
        .update(&name, &update, |_, preview| {
            match confirm_preview(console, preview) {
                Ok(confirmed) => confirmed,
                Err(e) => {
                    prompt_error = Some(e);
                    false
                }
            }
        })?;

    if let Some(e) = prompt_error {
        return Err(e);
    }

    match outcome {
        UpdateOutcome::Applied(product) => {
            info!(from = %name, to = %product.name(), "Product updated");
            console.report(format_args!("Product '{}' was updated.", product.name()))
        }
        UpdateOutcome::Cancelled => console.warn("The update was cancelled."),
    }
}

/// Prints the full inventory table.
pub fn list_products<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    console.banner("Product Inventory")?;
    console.say(Product::table_header())?;
    console.thin_rule()?;
    for product in session.inventory().list_all() {
        console.say(product)?;
    }
    console.rule()
}

fn confirm_preview<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    preview: &Product,
) -> CliResult<bool> {
    console.rule()?;
    console.say("| Updated product details:")?;
    console.say(format_args!("Name: {}", preview.name()))?;
    console.say(format_args!("Category: {}", preview.category()))?;
    console.say(format_args!("Price: {}", preview.price()))?;
    console.say(format_args!("Quantity: {}", preview.quantity()))?;
    console.rule()?;
    console.confirm("Do you want to update this product?")
}
