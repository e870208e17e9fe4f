//! # Config Commands
//!
//! Commands for retrieving application configuration.

use tracing::debug;

use crate::state::{ConfigState, Session};

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (to configure UI)
/// - Currency formatting on the frontend side
pub fn get_config(session: &Session) -> ConfigState {
    debug!("get_config command");
    session.config().clone()
}
