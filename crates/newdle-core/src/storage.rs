//! Local key-value storage for client preferences.
//!
//! [`LocalStorage`] persists string pairs in a redb database under the data
//! directory. [`MemoryStore`] keeps them in memory and is used when no
//! database could be opened, and in tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::NewdleResult;

/// Key holding the user's grid view preference (`"true"` / `"false"`)
pub const PREFERS_GRID_VIEW_KEY: &str = "prefersGridView";

const LOCAL_STORAGE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("local_storage");

/// String key-value store
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> NewdleResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> NewdleResult<()>;
}

/// Read the grid view preference; anything but `"true"` means off
pub fn load_grid_view_preference(store: &dyn KeyValueStore) -> bool {
    match store.get_item(PREFERS_GRID_VIEW_KEY) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read grid view preference");
            false
        }
    }
}

/// Persist the grid view preference as a boolean string
pub fn save_grid_view_preference(store: &dyn KeyValueStore, prefers_grid_view: bool) {
    let value = if prefers_grid_view { "true" } else { "false" };
    if let Err(e) = store.set_item(PREFERS_GRID_VIEW_KEY, value) {
        tracing::warn!(error = %e, "Failed to store grid view preference");
    }
}

/// redb-backed local storage
#[derive(Clone)]
pub struct LocalStorage {
    db: Arc<RwLock<Database>>,
}

impl LocalStorage {
    /// Open (or create) the database at `path`, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> NewdleResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        // Create the table up front so reads never see it missing
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "Opened local storage");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> NewdleResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;
        Ok(table.get(key)?.map(|value| value.value().to_string()))
    }

    fn set_item(&self, key: &str, value: &str) -> NewdleResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory store
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> NewdleResult<Option<String>> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> NewdleResult<()> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
