//! # Shoplist Architecture
//!
//! Shoplist is a **UI-agnostic shopping list library**. The terminal client
//! that ships with it is one presentation layer among many possible ones; a
//! mobile view, a web page or a TUI would sit on the same core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses intents, prints the list and notices              │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - ListStateStore: one method per user intent               │
//! │  - Notifies subscribers (events.rs) after each operation    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure mutation logic: add, edit, delete, list             │
//! │  - Validation and the one-editor-at-a-time invariant        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ItemStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! Every operation leaves the list in a state where:
//! - item ids are unique and never reused, even after deletions
//! - at most one item is in editing mode
//! - every quantity is at least 1
//!
//! ## Key Principle: No I/O in the Core
//!
//! From `api.rs` inward, code takes Rust values and returns
//! `Result<CmdResult>`. It never prints, never exits, and only logs through
//! `tracing`. Configuration is read from disk by [`init`], outside the list.
//!
//! ## Module Overview
//!
//! - [`api`]: `ListStateStore`, the entry point for all list operations
//! - [`commands`]: Business logic for each operation
//! - [`events`]: Subscriber registry and `ListEvent`
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: `Item`, `ItemId`, quantity parsing and validation
//! - [`config`]: Settings stored as `config.json`
//! - [`init`]: Config directory resolution and context bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod init;
pub mod model;
pub mod store;
