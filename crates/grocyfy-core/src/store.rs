//! # List Store
//!
//! The authoritative shopping-list state and the only legal ways to change it.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ListStore Operations                                 │
//! │                                                                         │
//! │  User Action             Method                 State Change            │
//! │  ───────────             ──────                 ────────────            │
//! │  Click "Add Item" ─────► add_item() ──────────► items.push(item)       │
//! │  Click +/- ────────────► change_quantity() ───► qty = max(1, qty+d)    │
//! │  Click trash ──────────► remove_item() ───────► items.retain(..)       │
//! │  Click pencil ─────────► begin_edit() ────────► editing = Some(copy)   │
//! │  Type in edit row ─────► update_edit() ───────► editing.apply(patch)   │
//! │  Click check ──────────► commit_edit() ───────► item.name/price = ..   │
//! │  Click X ──────────────► cancel_edit() ───────► editing = None         │
//! │  Type budget ──────────► set_budget() ────────► budget = parse(..)     │
//! │                                                                         │
//! │  Every change to `items` recomputes `total` before returning.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Edit Slot
//! At most one item is in edit mode. Calling [`ListStore::begin_edit`] for a
//! different item while an edit is pending discards the pending edit.

use serde::Serialize;
use tracing::debug;

use crate::money::{Amount, Money};
use crate::types::{BudgetStatus, ItemId, ItemPatch, LineItem, StagedEdit};
use crate::validation::{
    parse_budget, validate_item_name, validate_price, validate_quantity, ValidationResult,
};

/// The shopping list: items, budget and running total.
///
/// ## Invariants
/// - Item ids are unique
/// - Every quantity is at least 1 and every price is non-negative
/// - `total` always equals the sum of `price × quantity` over `items`,
///   rounded to cents once
/// - Items keep insertion order; only removal changes it
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStore {
    items: Vec<LineItem>,
    budget: Option<Amount>,
    total: Money,
    editing: Option<StagedEdit>,
}

impl ListStore {
    /// Creates an empty list with no budget.
    pub fn new() -> Self {
        ListStore::default()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn budget(&self) -> Option<Amount> {
        self.budget
    }

    /// Sum of `price × quantity` over all items, rounded to cents.
    pub fn total(&self) -> Money {
        self.total
    }

    /// The pending edit, if any.
    pub fn editing(&self) -> Option<&StagedEdit> {
        self.editing.as_ref()
    }

    /// Whether `id` is the item currently in edit mode.
    pub fn is_editing(&self, id: ItemId) -> bool {
        self.editing.as_ref().is_some_and(|e| e.item_id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.quantity))
    }

    /// True exactly when a budget is set and the total is strictly above it.
    pub fn is_over_budget(&self) -> bool {
        let total = Amount::from(self.total);
        self.budget.is_some_and(|budget| total > budget)
    }

    pub fn budget_status(&self) -> BudgetStatus {
        BudgetStatus::evaluate(self.total, self.budget)
    }

    // =========================================================================
    // Item Commands
    // =========================================================================

    /// Adds an item with quantity 1.
    ///
    /// ```rust
    /// use grocyfy_core::ListStore;
    ///
    /// let mut list = ListStore::new();
    /// list.add_item("Bread", "3.00").unwrap();
    /// assert_eq!(list.total().to_string(), "$3.00");
    ///
    /// assert!(list.add_item("", "1.00").is_err());
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn add_item(&mut self, name: &str, price: &str) -> ValidationResult<ItemId> {
        self.add_item_with_quantity(name, price, 1)
    }

    /// Adds an item with an explicit quantity.
    ///
    /// ## Errors
    /// Rejects a blank name, a price that is not a non-negative number, or
    /// a quantity below 1. The list is unchanged on error.
    pub fn add_item_with_quantity(
        &mut self,
        name: &str,
        price: &str,
        quantity: i64,
    ) -> ValidationResult<ItemId> {
        let name = validate_item_name(name)?;
        let price = validate_price(price)?;
        validate_quantity(quantity)?;

        let item = LineItem::new(name, price, quantity);
        let id = item.id;
        debug!(item_id = %id, name = %item.name, price = %price, quantity, "item added");

        self.items.push(item);
        self.recompute_total();
        Ok(id)
    }

    /// Removes an item, returning it.
    ///
    /// Unknown ids are a no-op, so calling this twice is the same as calling
    /// it once. A pending edit of the removed item is discarded.
    pub fn remove_item(&mut self, id: ItemId) -> Option<LineItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);

        if self.is_editing(id) {
            debug!(item_id = %id, "pending edit discarded with its item");
            self.editing = None;
        }

        debug!(item_id = %id, "item removed");
        self.recompute_total();
        Some(removed)
    }

    /// Adjusts an item's quantity by `delta`, never going below 1.
    ///
    /// Returns the new quantity, or `None` for an unknown id.
    ///
    /// ```rust
    /// use grocyfy_core::ListStore;
    ///
    /// let mut list = ListStore::new();
    /// let id = list.add_item_with_quantity("Eggs", "4.00", 2).unwrap();
    /// assert_eq!(list.change_quantity(id, -100), Some(1));
    /// assert_eq!(list.change_quantity(id, 2), Some(3));
    /// ```
    pub fn change_quantity(&mut self, id: ItemId, delta: i64) -> Option<i64> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.quantity = item.quantity.saturating_add(delta).max(1);
        let quantity = item.quantity;

        debug!(item_id = %id, delta, quantity, "quantity changed");
        self.recompute_total();
        Some(quantity)
    }

    // =========================================================================
    // Edit Slot
    // =========================================================================

    /// Puts an item into edit mode, staging a copy of its name and price.
    ///
    /// Any other pending edit is discarded. Returns `false` for an unknown
    /// id, leaving the edit slot as it was.
    pub fn begin_edit(&mut self, id: ItemId) -> bool {
        let Some(item) = self.get(id) else {
            return false;
        };
        let staged = StagedEdit::from_item(item);

        if let Some(previous) = self.editing.replace(staged) {
            if previous.item_id != id {
                debug!(
                    discarded = %previous.item_id,
                    item_id = %id,
                    "pending edit replaced"
                );
            }
        }
        true
    }

    /// Updates the staged fields. Does not touch `items` or `total`.
    ///
    /// Returns `false` when no edit is pending.
    pub fn update_edit(&mut self, patch: ItemPatch) -> bool {
        match self.editing.as_mut() {
            Some(staged) => {
                staged.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Applies the staged edit to its item.
    ///
    /// Returns the edited item's id, or `Ok(None)` if nothing was pending.
    ///
    /// ## Errors
    /// A blank staged name or invalid staged price rejects the commit. The
    /// edit stays pending so it can be corrected or cancelled.
    pub fn commit_edit(&mut self) -> ValidationResult<Option<ItemId>> {
        let Some(staged) = self.editing.as_ref() else {
            return Ok(None);
        };
        let (name, price) = staged.validate()?;
        let id = staged.item_id;

        // The slot is cleared whenever its item is removed, so the target exists.
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.name = name;
            item.price = price;
        }
        self.editing = None;

        debug!(item_id = %id, "edit committed");
        self.recompute_total();
        Ok(Some(id))
    }

    /// Discards the staged edit. Returns `false` when nothing was pending.
    pub fn cancel_edit(&mut self) -> bool {
        match self.editing.take() {
            Some(staged) => {
                debug!(item_id = %staged.item_id, "edit cancelled");
                true
            }
            None => false,
        }
    }

    /// Begins, stages and commits an edit in one step.
    ///
    /// Returns `Ok(false)` for an unknown id. On a validation error the edit
    /// is left pending, exactly as with [`ListStore::commit_edit`].
    pub fn edit_item(&mut self, id: ItemId, patch: ItemPatch) -> ValidationResult<bool> {
        if !self.begin_edit(id) {
            return Ok(false);
        }
        self.update_edit(patch);
        Ok(self.commit_edit()?.is_some())
    }

    // =========================================================================
    // Budget
    // =========================================================================

    /// Sets the budget from user input.
    ///
    /// Blank, unparseable or negative input clears the budget. Never fails.
    ///
    /// ```rust
    /// use grocyfy_core::ListStore;
    ///
    /// let mut list = ListStore::new();
    /// list.set_budget("20");
    /// assert_eq!(list.budget().map(|b| b.to_string()), Some("20.00".to_string()));
    ///
    /// list.set_budget("twenty");
    /// assert_eq!(list.budget(), None);
    /// ```
    pub fn set_budget(&mut self, input: &str) -> Option<Amount> {
        self.set_budget_amount(parse_budget(input))
    }

    /// Sets the budget from a typed amount. A negative amount clears it.
    pub fn set_budget_amount(&mut self, budget: Option<Amount>) -> Option<Amount> {
        self.budget = budget.filter(|b| !b.is_negative());
        debug!(budget = ?self.budget.map(|b| b.to_string()), "budget set");
        self.budget
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn recompute_total(&mut self) {
        let lines = self.items.iter().map(|item| (item.price, item.quantity));
        self.total = Money::round_total(lines);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
