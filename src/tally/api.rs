//! # API Facade
//!
//! The API layer is a thin facade over the command layer: the single entry
//! point for every ledger operation, regardless of the UI driving it.
//!
//! It dispatches to the command functions, normalizes optional argument
//! triples into validated request values, and returns structured
//! `Result<CmdResult>` values. Business logic lives in `commands/*.rs`;
//! I/O lives in the CLI. Nothing here touches stdout or the terminal.
//!
//! `LedgerApi<S: RecordStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests. The store is
//! constructed by the caller and passed in; the facade never reaches for a
//! process-wide handle.

use crate::commands::{self, TxnRequest, UpdateRequest};
use crate::error::Result;
use crate::model::User;
use crate::store::RecordStore;
use std::path::PathBuf;
use uuid::Uuid;

pub struct LedgerApi<S: RecordStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: RecordStore> LedgerApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    /// Resolve a username, creating the user on first login.
    pub fn login(&mut self, username: &str) -> Result<CmdResult> {
        commands::login::run(&mut self.store, username)
    }

    /// Log an add/remove transaction. The attribute triple is all-or-nothing:
    /// a partially supplied set comes back as an error result.
    pub fn log_transaction(
        &mut self,
        user: &User,
        item_id: Option<Uuid>,
        action: Option<String>,
        amount: Option<i64>,
    ) -> Result<CmdResult> {
        let request = match TxnRequest::from_parts(item_id, action, amount) {
            Ok(request) => request,
            Err(err) => return Ok(CmdResult::error(err.to_string())),
        };
        commands::transact::run(&mut self.store, user, &request)
    }

    pub fn create_item(
        &mut self,
        user: &User,
        name: &str,
        quantity: i64,
        price: f64,
    ) -> Result<CmdResult> {
        commands::create::run(&mut self.store, user, name, quantity, price)
    }

    /// Update an owned item. The item id is mandatory whenever any new
    /// attribute is given, and all three fields must be resolved to concrete
    /// values before this call; interactive sourcing belongs to the CLI.
    pub fn update_item(
        &mut self,
        user: &User,
        item_id: Option<Uuid>,
        name: Option<String>,
        quantity: Option<i64>,
        price: Option<f64>,
    ) -> Result<CmdResult> {
        let request = match UpdateRequest::from_parts(item_id, name, quantity, price) {
            Ok(request) => request,
            Err(err) => return Ok(CmdResult::error(err.to_string())),
        };
        commands::update::run(&mut self.store, user, &request)
    }

    pub fn delete_item(&mut self, user: &User, item_id: Uuid) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, user, item_id)
    }

    pub fn list_items(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, CmdStatus, MessageLevel};
