use super::{LedgerState, RecordStore};
use crate::error::{Result, TallyError};
use crate::model::{Item, User};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const LEDGER_FILENAME: &str = "ledger.json";

/// File-backed record store. The committed ledger lives in `ledger.json`
/// under the data directory; staged changes live in memory until `commit`
/// rewrites the file, and `rollback` reloads it.
pub struct FileStore {
    root: PathBuf,
    staged: LedgerState,
}

impl FileStore {
    /// Open the store at `root`, loading the committed state. A missing
    /// ledger file is an empty ledger, not an error.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let staged = Self::load(&root)?;
        Ok(Self { root, staged })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ledger_path(root: &Path) -> PathBuf {
        root.join(LEDGER_FILENAME)
    }

    fn load(root: &Path) -> Result<LedgerState> {
        let path = Self::ledger_path(root);
        if !path.exists() {
            return Ok(LedgerState::default());
        }
        let content = fs::read_to_string(path).map_err(TallyError::Io)?;
        let state: LedgerState =
            serde_json::from_str(&content).map_err(TallyError::Serialization)?;
        Ok(state)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TallyError::Io)?;
        }
        Ok(())
    }
}

impl RecordStore for FileStore {
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
        self.ensure_dir()?;
        let content =
            serde_json::to_string_pretty(&self.staged).map_err(TallyError::Serialization)?;
        fs::write(Self::ledger_path(&self.root), content).map_err(TallyError::Io)?;
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        self.staged = Self::load(&self.root)?;
        Ok(())
    }
}
