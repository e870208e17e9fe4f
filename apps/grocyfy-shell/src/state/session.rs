//! # Session State
//!
//! Everything one browser-style session holds: which view is showing, the
//! theme, the configuration and the shopping list itself.
//!
//! ## View Flow
//! ```text
//! ┌──────────────┐   open_list   ┌──────────────────┐
//! │   Landing    │──────────────►│   ShoppingList   │
//! │ "Start       │               │  budget, total,  │
//! │  Listing"    │               │  items, edit row │
//! └──────────────┘               └──────────────────┘
//!
//!        toggle_theme works in both views: Dark ⇄ Light
//! ```
//!
//! The session is owned by the bridge loop and mutated through `&mut`;
//! there is exactly one event handler, so no locking.

use grocyfy_core::ListStore;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::config::ConfigState;

/// Which page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Landing,
    ShoppingList,
}

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// One user session.
#[derive(Debug, Clone)]
pub struct Session {
    config: ConfigState,
    view: View,
    theme: Theme,
    list: ListStore,
}

impl Session {
    /// Starts a session with an empty list, in the configured view and theme.
    pub fn new(config: ConfigState) -> Self {
        Session {
            view: config.start_view,
            theme: config.default_theme,
            config,
            list: ListStore::new(),
        }
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn list(&self) -> &ListStore {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListStore {
        &mut self.list
    }

    /// Leaves the landing page for the list view.
    pub fn open_list(&mut self) {
        if self.view != View::ShoppingList {
            info!("opening shopping list");
            self.view = View::ShoppingList;
        }
    }

    /// Flips between dark and light, returning the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(ConfigState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_uses_config() {
        let session = Session::default();
        assert_eq!(session.view(), View::Landing);
        assert_eq!(session.theme(), Theme::Dark);
        assert!(session.list().is_empty());

        let config = ConfigState {
            start_view: View::ShoppingList,
            default_theme: Theme::Light,
            ..ConfigState::default()
        };
        let session = Session::new(config);
        assert_eq!(session.view(), View::ShoppingList);
        assert_eq!(session.theme(), Theme::Light);
    }

    #[test]
    fn test_open_list_is_one_way() {
        let mut session = Session::default();
        session.open_list();
        session.open_list();
        assert_eq!(session.view(), View::ShoppingList);
    }

    #[test]
    fn test_toggle_theme() {
        let mut session = Session::default();
        assert_eq!(session.toggle_theme(), Theme::Light);
        assert_eq!(session.toggle_theme(), Theme::Dark);
    }

    #[test]
    fn test_list_survives_view_changes() {
        let mut session = Session::default();
        session.list_mut().add_item("Milk", "2.50").unwrap();
        session.open_list();
        session.toggle_theme();
        assert_eq!(session.list().len(), 1);
    }
}
