//! # Grocyfy Shell Library
//!
//! Hosts one Grocyfy session: configuration, view and theme toggles, and
//! the shopping list, driven by JSON commands from the frontend.
//!
//! ## Module Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lib.rs       ◄─── run(): logging, config, session, bridge             │
//! │  bridge.rs    ◄─── JSON lines in, JSON lines out                       │
//! │  commands/    ◄─── one function per frontend event                     │
//! │  state/       ◄─── Session, ConfigState, View, Theme                   │
//! │  error.rs     ◄─── ApiError (what the frontend sees on failure)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod bridge;
pub mod commands;
pub mod error;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, Session};

/// Runs a session over stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info, grocyfy crates at debug; RUST_LOG overrides        │
/// │                                                                         │
/// │  2. Load Configuration (GROCYFY_* environment variables)                │
/// │                                                                         │
/// │  3. Create Session (empty list, no budget)                              │
/// │                                                                         │
/// │  4. Serve commands until stdin closes                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> io::Result<()> {
    init_tracing();

    info!("Starting Grocyfy shell");

    let config = ConfigState::from_env();
    info!(
        currency_symbol = %config.currency_symbol,
        theme = ?config.default_theme,
        view = ?config.start_view,
        "configuration loaded"
    );

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    bridge::serve(&mut session, stdin.lock(), stdout.lock())?;

    info!(items = session.list().len(), "input closed, session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=grocyfy_core=trace` - Trace the store only
/// - Default: `info,grocyfy_core=debug,grocyfy_shell=debug`
///
/// Logs go to stderr; stdout carries replies.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,grocyfy_core=debug,grocyfy_shell=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
