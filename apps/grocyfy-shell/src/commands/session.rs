//! # Session Commands
//!
//! Navigation and theme.

use serde::Serialize;
use tracing::debug;

use crate::state::{Session, Theme, View};

/// What the header and page frame need to render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub app_name: String,
    pub view: View,
    pub theme: Theme,
    pub item_count: usize,
    pub total_display: String,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        SessionResponse {
            app_name: session.config().app_name.clone(),
            view: session.view(),
            theme: session.theme(),
            item_count: session.list().len(),
            total_display: session.config().format_currency(session.list().total()),
        }
    }
}

/// Gets the current view and theme.
pub fn get_session(session: &Session) -> SessionResponse {
    debug!("get_session command");
    SessionResponse::from(session)
}

/// "Start Listing": switches from the landing page to the list.
pub fn open_list(session: &mut Session) -> SessionResponse {
    debug!("open_list command");
    session.open_list();
    SessionResponse::from(&*session)
}

/// Switches between dark and light.
pub fn toggle_theme(session: &mut Session) -> SessionResponse {
    let theme = session.toggle_theme();
    debug!(?theme, "toggle_theme command");
    SessionResponse::from(&*session)
}
