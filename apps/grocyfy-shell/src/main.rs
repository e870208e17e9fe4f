//! # Grocyfy Shell Entry Point
//!
//! Reads one JSON command per line from stdin and answers on stdout.
//!
//! ```text
//! $ echo '{"command":"add_item","name":"Milk","price":"2.50"}' | grocyfy-shell
//! {"ok":true,"data":{"items":[...],"totalDisplay":"$2.50",...}}
//! ```
//!
//! The actual setup is in lib.rs for better testability.

fn main() -> std::io::Result<()> {
    grocyfy_shell::run()
}
