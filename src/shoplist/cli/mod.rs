//! # Terminal Session
//!
//! A line-oriented client for the shopping list. Each input line is one user
//! intent, split with shell quoting rules so names can contain spaces:
//!
//! ```text
//! > add "Oat milk" 2
//! > edit 1
//! > save 1 "Oat milk" 3
//! > delete 1
//! ```
//!
//! Running `shoplist` with no subcommand starts a session on stdin. When stdin
//! is not a terminal the prompt is suppressed, so a session can be piped or
//! driven from `shoplist run <file>`.
//!
//! For the overall architecture, see the crate-level documentation of the
//! `shoplist` library.

mod commands;
mod print;
mod setup;
mod tracing_setup;

pub use commands::run;
