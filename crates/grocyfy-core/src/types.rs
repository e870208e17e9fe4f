//! # Domain Types
//!
//! Types shared by the store and whatever renders it.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │   StagedEdit    │   │  BudgetStatus   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ItemId)    │   │  item_id        │   │  Unset          │       │
//! │  │  name           │   │  name (text)    │   │  Within         │       │
//! │  │  price (Amount) │   │  price (text)   │   │  Over           │       │
//! │  │  quantity ≥ 1   │   └─────────────────┘   └─────────────────┘       │
//! │  │  added_at       │                                                    │
//! │  └─────────────────┘   ┌─────────────────┐                              │
//! │                        │   ItemPatch     │                              │
//! │                        │  name? price?   │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::money::{Amount, Money};
use crate::validation::{validate_item_name, validate_price, ValidationResult};

// =============================================================================
// Item Id
// =============================================================================

/// Identifier of a line item.
///
/// Random (UUID v4) so that two items added in the same millisecond can
/// never collide. Never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generates a fresh id.
    pub fn new() -> Self {
        ItemId(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        ItemId::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(ItemId)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A named, priced, quantified entry in the shopping list.
///
/// Only `ListStore` creates and mutates these; consumers get `&LineItem`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    pub id: ItemId,

    /// Display name, trimmed, never empty.
    pub name: String,

    /// Unit price as entered, never negative.
    pub price: Amount,

    /// Never less than 1.
    pub quantity: i64,

    /// When the item was added to the list.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    pub(crate) fn new(name: String, price: Amount, quantity: i64) -> Self {
        LineItem {
            id: ItemId::new(),
            name,
            price,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Price × quantity, rounded to cents.
    pub fn line_total(&self) -> Money {
        Money::round_total([(self.price, self.quantity)])
    }
}

// =============================================================================
// Edits
// =============================================================================

/// A partial update to an item's name and/or price.
///
/// Values are raw input text; nothing is validated until the edit is
/// committed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl ItemPatch {
    /// Patch that only changes the name.
    pub fn name(name: impl Into<String>) -> Self {
        ItemPatch {
            name: Some(name.into()),
            price: None,
        }
    }

    /// Patch that only changes the price.
    pub fn price(price: impl Into<String>) -> Self {
        ItemPatch {
            name: None,
            price: Some(price.into()),
        }
    }

    /// Adds a name change to this patch.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a price change to this patch.
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

/// The contents of the single edit slot.
///
/// Holds its own copy of the editable fields. The item in the list is not
/// touched until the edit is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StagedEdit {
    pub item_id: ItemId,
    pub name: String,
    pub price: String,
}

impl StagedEdit {
    /// Seeds the staged fields from the item's current values.
    pub fn from_item(item: &LineItem) -> Self {
        StagedEdit {
            item_id: item.id,
            name: item.name.clone(),
            price: item.price.to_string(),
        }
    }

    /// Overwrites the staged fields present in `patch`.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }

    /// Validates the staged fields, returning the trimmed name and price.
    pub fn validate(&self) -> ValidationResult<(String, Amount)> {
        let name = validate_item_name(&self.name)?;
        let price = validate_price(&self.price)?;
        Ok((name, price))
    }
}

// =============================================================================
// Budget Status
// =============================================================================

/// Where the total stands relative to the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum BudgetStatus {
    /// No budget set.
    Unset,
    /// Total is at or below the budget.
    Within { remaining: Amount },
    /// Total is strictly above the budget.
    Over { excess: Amount },
}

impl BudgetStatus {
    /// Compares a total against an optional budget.
    pub fn evaluate(total: Money, budget: Option<Amount>) -> Self {
        let total = Amount::from(total);
        match budget {
            None => BudgetStatus::Unset,
            Some(budget) if total > budget => BudgetStatus::Over {
                excess: total - budget,
            },
            Some(budget) => BudgetStatus::Within {
                remaining: budget - total,
            },
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, BudgetStatus::Over { .. })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
