//! # Commands Module
//!
//! The actions behind each menu entry.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── product.rs  ◄─── Add, remove, search, update, list
//! ```
//!
//! Every command has the same shape:
//!
//! ```text
//! fn command<R: BufRead, W: Write>(
//!     session: &mut Session,        ◄── inventory + file handle
//!     console: &mut Console<R, W>,  ◄── prompts and output
//! ) -> CliResult<()>                ◄── errors go back to the menu loop
//! ```

mod product;

pub use product::{add_product, list_products, remove_product, search_products, update_product};
