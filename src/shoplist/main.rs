//! # Shoplist CLI
//!
//! The binary is intentionally thin: the client lives in `cli/`, and this
//! file only invokes `cli::run()` and handles process termination.
//!
//! Everything the client touches goes through `shoplist::api::ListStateStore`.
//! The CLI owns all user-facing concerns: argument and intent parsing, logging
//! setup, rendering and exit codes.
//!
//! ## Testing Approach
//!
//! - **Commands layer (`commands/`)**: unit tests of every mutation rule.
//! - **API layer (`api.rs`)**: dispatch and subscriber notification.
//! - **CLI layer (`cli/`)**: intent parsing and row formatting unit tests,
//!   plus end-to-end tests in `tests/` that drive the binary through stdin
//!   and script files.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
