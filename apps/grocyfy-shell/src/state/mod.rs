//! # State Module
//!
//! Application state for the shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                          Session                                 │  │
//! │  │                                                                  │  │
//! │  │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────┐   │  │
//! │  │  │ ConfigState  │  │ View / Theme │  │      ListStore       │   │  │
//! │  │  │ (read-only)  │  │ (UI toggles) │  │ (grocyfy-core model) │   │  │
//! │  │  └──────────────┘  └──────────────┘  └──────────────────────┘   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::ConfigState;
pub use session::{Session, Theme, View};
