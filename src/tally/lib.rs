//! # Tally Architecture
//!
//! Tally is a **UI-agnostic inventory ledger library**: users own items, and
//! item quantities change only through validated add/remove transactions.
//! The CLI binary is just one client of the library.
//!
//! ## The layers
//!
//! ```text
//! CLI (args.rs + main.rs)      parsing, prompts, colored output, exit codes
//!   │
//! API facade (api.rs)          LedgerApi<S: RecordStore>, one method per op,
//!   │                          normalizes optional args into typed requests
//! Commands (commands/*.rs)     pure business logic, structured CmdResult,
//!   │                          one commit-or-rollback boundary per operation
//! Storage (store/)             RecordStore trait; FileStore (production),
//!                              InMemoryStore (tests)
//! ```
//!
//! ## Key principle: no I/O assumptions in core
//!
//! From `api.rs` inward, code takes typed arguments, returns
//! `Result<CmdResult>`, and never writes to stdout/stderr or loops on
//! malformed input — retry-until-valid prompting lives in the CLI only.
//!
//! ## The transaction discipline
//!
//! Every mutating operation stages its changes on the store and ends in
//! exactly one `commit` (success) or `rollback` (failure). A rejected or
//! failed mutation leaves the stored ledger byte-for-byte unchanged, and an
//! item's quantity can never go negative.
//!
//! ## Module overview
//!
//! - [`api`]: the API facade, entry point for all operations
//! - [`commands`]: business logic for each operation
//! - [`store`]: storage abstraction and backends
//! - [`model`]: core data types (`User`, `Item`)
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
