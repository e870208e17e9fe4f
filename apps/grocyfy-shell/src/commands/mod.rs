//! # Commands Module
//!
//! All commands exposed to the frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (Command enum, dispatch)
//! ├── list.rs     ◄─── Items, edit row, budget
//! ├── session.rs  ◄─── View and theme
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend sends one JSON object per event:                              │
//! │                                                                         │
//! │    {"command":"change_quantity","id":"5b0e…","delta":-1}                │
//! │         │                                                               │
//! │         ▼  serde (tag = "command")                                      │
//! │    Command::ChangeQuantity { id, delta }                                │
//! │         │                                                               │
//! │         ▼  dispatch()                                                   │
//! │    list::change_quantity(&mut session, &id, delta)                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │    Reply::List(ListResponse) ──► JSON back to the frontend              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod list;
pub mod session;

use grocyfy_core::ItemPatch;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::{ConfigState, Session};
use list::ListResponse;
use session::SessionResponse;

/// Amount typed into a field, sent either as text or as a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Text(String),
    Number(serde_json::Number),
}

impl AmountInput {
    /// The amount as text, ready for `Amount::parse`.
    ///
    /// Fractional numbers are written out without an exponent, so `0.00001`
    /// becomes `"0.00001"` rather than `"1e-5"`.
    pub fn into_text(self) -> String {
        match self {
            AmountInput::Text(text) => text,
            AmountInput::Number(number) => match number.as_f64() {
                Some(value) if number.is_f64() => value.to_string(),
                _ => number.to_string(),
            },
        }
    }
}

/// A frontend event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    GetList,
    AddItem {
        name: String,
        price: AmountInput,
        #[serde(default)]
        quantity: Option<i64>,
    },
    RemoveItem {
        id: String,
    },
    ChangeQuantity {
        id: String,
        delta: i64,
    },
    BeginEdit {
        id: String,
    },
    UpdateEdit {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        price: Option<AmountInput>,
    },
    SaveEdit,
    CancelEdit,
    SetBudget {
        #[serde(default)]
        budget: Option<AmountInput>,
    },
    OpenList,
    ToggleTheme,
    GetSession,
    GetConfig,
}

/// Successful command result.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Reply {
    List(ListResponse),
    Session(SessionResponse),
    Config(ConfigState),
}

/// Runs one command against the session.
pub fn dispatch(session: &mut Session, command: Command) -> Result<Reply, ApiError> {
    let reply = match command {
        Command::GetList => Reply::List(list::get_list(session)),
        Command::AddItem {
            name,
            price,
            quantity,
        } => Reply::List(list::add_item(session, &name, &price.into_text(), quantity)?),
        Command::RemoveItem { id } => Reply::List(list::remove_item(session, &id)?),
        Command::ChangeQuantity { id, delta } => {
            Reply::List(list::change_quantity(session, &id, delta)?)
        }
        Command::BeginEdit { id } => Reply::List(list::begin_edit(session, &id)?),
        Command::UpdateEdit { name, price } => {
            let patch = ItemPatch {
                name,
                price: price.map(AmountInput::into_text),
            };
            Reply::List(list::update_edit(session, patch))
        }
        Command::SaveEdit => Reply::List(list::save_edit(session)?),
        Command::CancelEdit => Reply::List(list::cancel_edit(session)),
        Command::SetBudget { budget } => {
            let budget = budget.map(AmountInput::into_text);
            Reply::List(list::set_budget(session, budget.as_deref()))
        }
        Command::OpenList => Reply::Session(session::open_list(session)),
        Command::ToggleTheme => Reply::Session(session::toggle_theme(session)),
        Command::GetSession => Reply::Session(session::get_session(session)),
        Command::GetConfig => Reply::Config(config::get_config(session)),
    };
    Ok(reply)
}
