//! # grocyfy-core: Pure Shopping-List Logic for Grocyfy
//!
//! This crate holds the shopping-list state model as plain values and
//! transition methods, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Grocyfy Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (web view)                          │   │
//! │  │     Landing ──► List ──► Add / Edit / Quantity / Budget         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON commands                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    grocyfy-shell                                │   │
//! │  │    add_item, change_quantity, save_edit, set_budget, ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ grocyfy-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   store   │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │ ListStore │  │   rules   │  │   │
//! │  │   │StagedEdit │  │  Amount   │  │ edit slot │  │  budget   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • DETERMINISTIC TOTALS   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, ItemId, StagedEdit, BudgetStatus)
//! - [`money`] - `Money` in cents, `Amount` for entered prices and budgets
//! - [`store`] - The `ListStore` and its operations
//! - [`error`] - Domain error types
//! - [`validation`] - Name, price, quantity and budget rules
//!
//! ## Example Usage
//!
//! ```rust
//! use grocyfy_core::ListStore;
//!
//! let mut list = ListStore::new();
//! let milk = list.add_item_with_quantity("Milk", "2.50", 2).unwrap();
//! list.add_item("Bread", "3.00").unwrap();
//! assert_eq!(list.total().to_string(), "$8.00");
//!
//! list.set_budget("5");
//! assert!(list.is_over_budget());
//!
//! list.change_quantity(milk, -5);
//! assert_eq!(list.total().to_string(), "$5.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::{Amount, Money};
pub use store::ListStore;
pub use types::*;
