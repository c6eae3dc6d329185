//! # Storage Layer
//!
//! This module defines the storage abstraction for tally. The [`RecordStore`]
//! trait allows the core to work with different storage backends.
//!
//! ## Transaction discipline
//!
//! Every write lands in a *staged* working state first. Staged changes are
//! visible to subsequent reads on the same store (read-your-writes) but do
//! not survive a reopen until [`RecordStore::commit`] is called;
//! [`RecordStore::rollback`] discards them. The command layer wraps each
//! logical operation in exactly one commit-or-rollback boundary, so a failed
//! mutation never leaves the stored ledger changed.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, committed state persisted as
//!   `ledger.json` in the data directory
//! - [`memory::InMemoryStore`]: in-memory storage for testing, no persistence

use crate::error::Result;
use crate::model::{Item, User};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// The full ledger: users keyed by username, items keyed by id.
///
/// This is the persisted schema shared by every backend; the JSON rendering
/// of this struct is what `FileStore` writes to disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerState {
    pub users: HashMap<String, User>,
    pub items: HashMap<Uuid, Item>,
}

impl LedgerState {
    pub fn find_item_for_owner(&self, id: Uuid, owner: &str) -> Option<&Item> {
        self.items.get(&id).filter(|item| item.owner == owner)
    }
}

/// Abstract interface to the record store.
///
/// Implementations must provide lookup, insert, delete, and an atomic
/// commit/rollback boundary around a batch of staged changes.
pub trait RecordStore {
    /// Look up a user by username
    fn find_user(&self, username: &str) -> Result<Option<User>>;

    /// Stage a new user
    fn insert_user(&mut self, user: &User) -> Result<()>;

    /// Look up an item by id, only if owned by `owner`.
    /// A foreign item and a missing item both come back as `None`.
    fn find_item_for_owner(&self, id: Uuid, owner: &str) -> Result<Option<Item>>;

    /// Stage an item (create or update)
    fn save_item(&mut self, item: &Item) -> Result<()>;

    /// Stage an item removal
    fn delete_item(&mut self, id: Uuid) -> Result<()>;

    /// List every item in the ledger, all owners included (read-only,
    /// used by the display layer)
    fn list_items(&self) -> Result<Vec<Item>>;

    /// Durably apply all staged changes
    fn commit(&mut self) -> Result<()>;

    /// Discard all staged changes since the last commit
    fn rollback(&mut self) -> Result<()>;
}
