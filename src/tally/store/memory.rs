use super::{LedgerState, RecordStore};
use crate::error::Result;
use crate::model::{Item, User};
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data; "committed" state lives for the store's lifetime.
#[derive(Default)]
pub struct InMemoryStore {
    committed: LedgerState,
    staged: LedgerState,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed view, bypassing the staged overlay. Lets tests assert that
    /// an error path really left the durable state untouched.
    pub fn committed(&self) -> &LedgerState {
        &self.committed
    }
}

impl RecordStore for InMemoryStore {
    fn find_user(&self, username: &str) -> Result<Option<User>> {
        Ok(self.staged.users.get(username).cloned())
    }

    fn insert_user(&mut self, user: &User) -> Result<()> {
        self.staged.users.insert(user.username.clone(), user.clone());
        Ok(())
    }

    fn find_item_for_owner(&self, id: Uuid, owner: &str) -> Result<Option<Item>> {
        Ok(self.staged.find_item_for_owner(id, owner).cloned())
    }

    fn save_item(&mut self, item: &Item) -> Result<()> {
        self.staged.items.insert(item.id, item.clone());
        Ok(())
    }

    fn delete_item(&mut self, id: Uuid) -> Result<()> {
        self.staged.items.remove(&id);
        Ok(())
    }

    fn list_items(&self) -> Result<Vec<Item>> {
        Ok(self.staged.items.values().cloned().collect())
    }

    fn commit(&mut self) -> Result<()> {
        self.committed = self.staged.clone();
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        self.staged = self.committed.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::TallyError;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_user(mut self, username: &str) -> Self {
            self.store.insert_user(&User::new(username)).unwrap();
            self.store.commit().unwrap();
            self
        }

        /// Seed a committed item and hand back its id.
        pub fn add_item(&mut self, name: &str, quantity: i64, price: f64, owner: &str) -> Uuid {
            let item = Item::new(name, quantity, price, owner);
            let id = item.id;
            self.store.save_item(&item).unwrap();
            self.store.commit().unwrap();
            id
        }
    }

    /// Store wrapper that fails every `save_item` once armed. Used to drive
    /// the rollback path of the command layer.
    pub struct FailingStore {
        inner: InMemoryStore,
        pub fail_saves: bool,
    }

    impl FailingStore {
        pub fn new(inner: InMemoryStore) -> Self {
            Self {
                inner,
                fail_saves: false,
            }
        }

        pub fn committed(&self) -> &LedgerState {
            self.inner.committed()
        }
    }

    impl RecordStore for FailingStore {
        fn find_user(&self, username: &str) -> Result<Option<User>> {
            self.inner.find_user(username)
        }

        fn insert_user(&mut self, user: &User) -> Result<()> {
            self.inner.insert_user(user)
        }

        fn find_item_for_owner(&self, id: Uuid, owner: &str) -> Result<Option<Item>> {
            self.inner.find_item_for_owner(id, owner)
        }

        fn save_item(&mut self, item: &Item) -> Result<()> {
            if self.fail_saves {
                return Err(TallyError::Store("simulated write failure".to_string()));
            }
            self.inner.save_item(item)
        }

        fn delete_item(&mut self, id: Uuid) -> Result<()> {
            self.inner.delete_item(id)
        }

        fn list_items(&self) -> Result<Vec<Item>> {
            self.inner.list_items()
        }

        fn commit(&mut self) -> Result<()> {
            self.inner.commit()
        }

        fn rollback(&mut self) -> Result<()> {
            self.inner.rollback()
        }
    }
}
