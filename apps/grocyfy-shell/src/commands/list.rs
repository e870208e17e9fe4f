//! # List Commands
//!
//! Commands that read or change the shopping list.
//!
//! ## Edit Row Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐  begin_edit   ┌──────────┐  save_edit (valid)  ┌───────┐ │
//! │  │ Display  │──────────────►│ Editing  │────────────────────►│Display│ │
//! │  │   row    │               │   row    │                     │  row  │ │
//! │  └──────────┘               └──────────┘                     └───────┘ │
//! │                              │   ▲   │                                  │
//! │                  update_edit │   │   │ cancel_edit / begin_edit(other)  │
//! │                              └───┘   ▼                                  │
//! │                                  (discarded)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command answers with the full [`ListResponse`], so the frontend
//! re-renders from a single source of truth.

use grocyfy_core::validation::validate_item_id;
use grocyfy_core::{
    Amount, BudgetStatus, ItemId, ItemPatch, LineItem, ListStore, Money, StagedEdit,
};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, Session};

/// Shown instead of the item list when it is empty.
pub const EMPTY_LIST_MESSAGE: &str = "Your shopping list is empty. Start adding items!";

/// One row of the list, with display strings precomputed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    /// Price as entered; the display string is rounded to cents
    pub price: Amount,
    pub price_display: String,
    pub line_total: Money,
    pub line_total_display: String,
    /// Whether this row is the one in edit mode
    pub editing: bool,
}

impl ItemView {
    fn new(item: &LineItem, list: &ListStore, config: &ConfigState) -> Self {
        let line_total = item.line_total();
        ItemView {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity,
            price: item.price,
            price_display: config.format_currency(item.price.to_money()),
            line_total,
            line_total_display: config.format_currency(line_total),
            editing: list.is_editing(item.id),
        }
    }
}

/// Full list state as the frontend renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub items: Vec<ItemView>,
    pub total: Money,
    pub total_display: String,
    pub budget: Option<Amount>,
    pub budget_display: Option<String>,
    pub budget_status: BudgetStatus,
    pub over_budget: bool,
    /// Banner text, present only when over budget
    pub budget_warning: Option<String>,
    /// Placeholder text, present only when the list is empty
    pub empty_message: Option<String>,
    /// Staged values of the row in edit mode
    pub editing: Option<StagedEdit>,
}

impl ListResponse {
    pub fn new(list: &ListStore, config: &ConfigState) -> Self {
        let total_display = config.format_currency(list.total());
        let budget_display = list
            .budget()
            .map(|b| config.format_currency(b.to_money()));
        let over_budget = list.is_over_budget();

        let budget_warning = match (&budget_display, over_budget) {
            (Some(budget), true) => Some(format!(
                "Your total ({}) is over the set budget of ({})",
                total_display, budget
            )),
            _ => None,
        };

        ListResponse {
            items: list
                .items()
                .iter()
                .map(|item| ItemView::new(item, list, config))
                .collect(),
            total: list.total(),
            total_display,
            budget: list.budget(),
            budget_display,
            budget_status: list.budget_status(),
            over_budget,
            budget_warning,
            empty_message: list.is_empty().then(|| EMPTY_LIST_MESSAGE.to_string()),
            editing: list.editing().cloned(),
        }
    }
}

impl From<&Session> for ListResponse {
    fn from(session: &Session) -> Self {
        ListResponse::new(session.list(), session.config())
    }
}

/// Gets the current list.
pub fn get_list(session: &Session) -> ListResponse {
    debug!("get_list command");
    ListResponse::from(session)
}

/// Adds an item; quantity defaults to 1.
pub fn add_item(
    session: &mut Session,
    name: &str,
    price: &str,
    quantity: Option<i64>,
) -> Result<ListResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(name = %name, price = %price, quantity, "add_item command");

    session
        .list_mut()
        .add_item_with_quantity(name, price, quantity)?;
    Ok(ListResponse::from(&*session))
}

/// Removes an item. Unknown ids leave the list as it is.
pub fn remove_item(session: &mut Session, id: &str) -> Result<ListResponse, ApiError> {
    debug!(id = %id, "remove_item command");

    let id = validate_item_id(id)?;
    if session.list_mut().remove_item(id).is_none() {
        debug!(item_id = %id, "remove_item: no such item");
    }
    Ok(ListResponse::from(&*session))
}

/// Adds `delta` to an item's quantity, stopping at 1.
pub fn change_quantity(
    session: &mut Session,
    id: &str,
    delta: i64,
) -> Result<ListResponse, ApiError> {
    debug!(id = %id, delta, "change_quantity command");

    let id = validate_item_id(id)?;
    if session.list_mut().change_quantity(id, delta).is_none() {
        debug!(item_id = %id, "change_quantity: no such item");
    }
    Ok(ListResponse::from(&*session))
}

/// Puts an item's row into edit mode, discarding any other pending edit.
pub fn begin_edit(session: &mut Session, id: &str) -> Result<ListResponse, ApiError> {
    debug!(id = %id, "begin_edit command");

    let id = validate_item_id(id)?;
    if !session.list_mut().begin_edit(id) {
        debug!(item_id = %id, "begin_edit: no such item");
    }
    Ok(ListResponse::from(&*session))
}

/// Updates the staged fields of the row in edit mode.
pub fn update_edit(session: &mut Session, patch: ItemPatch) -> ListResponse {
    debug!(?patch, "update_edit command");

    if !session.list_mut().update_edit(patch) {
        debug!("update_edit: nothing staged");
    }
    ListResponse::from(&*session)
}

/// Commits the staged edit.
///
/// A rejected commit leaves the row in edit mode with the staged values.
pub fn save_edit(session: &mut Session) -> Result<ListResponse, ApiError> {
    debug!("save_edit command");

    session.list_mut().commit_edit()?;
    Ok(ListResponse::from(&*session))
}

/// Discards the staged edit.
pub fn cancel_edit(session: &mut Session) -> ListResponse {
    debug!("cancel_edit command");

    session.list_mut().cancel_edit();
    ListResponse::from(&*session)
}

/// Sets or clears the budget. Never fails; bad input clears it.
pub fn set_budget(session: &mut Session, budget: Option<&str>) -> ListResponse {
    debug!(budget = ?budget, "set_budget command");

    session.list_mut().set_budget(budget.unwrap_or(""));
    ListResponse::from(&*session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn session_with_groceries() -> (Session, String) {
        let mut session = Session::default();
        let response = add_item(&mut session, "Milk", "2.50", Some(2)).unwrap();
        let milk = response.items[0].id.to_string();
        add_item(&mut session, "Bread", "3.00", None).unwrap();
        (session, milk)
    }

    #[test]
    fn test_empty_list_response() {
        let response = get_list(&Session::default());
        assert!(response.items.is_empty());
        assert_eq!(response.total_display, "$0.00");
        assert_eq!(response.empty_message.as_deref(), Some(EMPTY_LIST_MESSAGE));
        assert!(!response.over_budget);
        assert!(response.budget_warning.is_none());
    }

    #[test]
    fn test_add_item_response() {
        let (session, _) = session_with_groceries();
        let response = get_list(&session);

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.total_display, "$8.00");
        assert_eq!(response.items[0].price_display, "$2.50");
        assert_eq!(response.items[0].line_total_display, "$5.00");
        assert_eq!(response.items[1].quantity, 1);
        assert!(response.empty_message.is_none());
    }

    #[test]
    fn test_add_item_validation_error() {
        let (mut session, _) = session_with_groceries();
        let err = add_item(&mut session, "", "1.00", None).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.field.as_deref(), Some("name"));
        assert_eq!(session.list().len(), 2);
    }

    #[test]
    fn test_budget_warning_message() {
        let (mut session, _) = session_with_groceries();
        let response = set_budget(&mut session, Some("5"));

        assert!(response.over_budget);
        assert_eq!(response.budget_display.as_deref(), Some("$5.00"));
        assert_eq!(
            response.budget_warning.as_deref(),
            Some("Your total ($8.00) is over the set budget of ($5.00)")
        );

        let response = set_budget(&mut session, None);
        assert!(response.budget.is_none());
        assert!(response.budget_warning.is_none());
    }

    #[test]
    fn test_change_quantity_clamps() {
        let (mut session, milk) = session_with_groceries();
        let response = change_quantity(&mut session, &milk, -5).unwrap();

        assert_eq!(response.items[0].quantity, 1);
        assert_eq!(response.total_display, "$5.50");
    }

    #[test]
    fn test_unknown_and_malformed_ids() {
        let (mut session, _) = session_with_groceries();

        let unknown = ItemId::new().to_string();
        let response = remove_item(&mut session, &unknown).unwrap();
        assert_eq!(response.items.len(), 2);

        let err = remove_item(&mut session, "1700000000000").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.field.as_deref(), Some("id"));
    }

    #[test]
    fn test_remove_item_twice() {
        let (mut session, milk) = session_with_groceries();
        remove_item(&mut session, &milk).unwrap();
        let response = remove_item(&mut session, &milk).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.total_display, "$3.00");
    }

    #[test]
    fn test_edit_flow() {
        let (mut session, milk) = session_with_groceries();

        let response = begin_edit(&mut session, &milk).unwrap();
        assert!(response.items[0].editing);
        assert_eq!(response.editing.as_ref().unwrap().price, "2.50");

        let response = update_edit(&mut session, ItemPatch::price("abc"));
        assert_eq!(response.total_display, "$8.00");

        let err = save_edit(&mut session).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("price"));
        assert!(session.list().editing().is_some());

        update_edit(&mut session, ItemPatch::price("3.50"));
        let response = save_edit(&mut session).unwrap();
        assert!(response.editing.is_none());
        assert!(!response.items[0].editing);
        assert_eq!(response.items[0].price_display, "$3.50");
        assert_eq!(response.total_display, "$10.00");
    }

    #[test]
    fn test_sub_cent_price_response() {
        let mut session = Session::default();
        let response = add_item(&mut session, "Gum", "0.333", Some(3)).unwrap();

        assert_eq!(response.items[0].price_display, "$0.33");
        assert_eq!(response.items[0].line_total_display, "$1.00");
        assert_eq!(response.total_display, "$1.00");

        let id = response.items[0].id.to_string();
        let response = begin_edit(&mut session, &id).unwrap();
        assert_eq!(response.editing.as_ref().unwrap().price, "0.333");
    }

    #[test]
    fn test_cancel_edit_keeps_item() {
        let (mut session, milk) = session_with_groceries();

        begin_edit(&mut session, &milk).unwrap();
        update_edit(&mut session, ItemPatch::name("Cream"));
        let response = cancel_edit(&mut session);

        assert_eq!(response.items[0].name, "Milk");
        assert!(response.editing.is_none());
    }
}
