use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::entry::{ConfigEntry, EntryData, EntryId};
use crate::error::{FlowError, FlowResult};
use crate::store::base::EntryStore;

#[derive(Debug)]
struct Inner {
    entries: HashMap<EntryId, ConfigEntry>,
}

/// In-memory [`EntryStore`] implementation.
///
/// Entries live for the lifetime of the process. Cloning the store is cheap
/// and all clones share the same state.
#[derive(Debug, Clone)]
pub struct MemoryEntryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        let inner = Inner {
            entries: HashMap::new(),
        };

        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }
}

impl Default for MemoryEntryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore for MemoryEntryStore {
    async fn insert_entry(&self, entry: ConfigEntry) -> FlowResult<EntryId> {
        let mut inner = self.inner.lock().await;

        let id = entry.id;
        inner.entries.insert(id, entry);

        Ok(id)
    }

    async fn get_entry(&self, id: &EntryId) -> FlowResult<Option<ConfigEntry>> {
        let inner = self.inner.lock().await;

        Ok(inner.entries.get(id).cloned())
    }

    async fn entries_for_domain(&self, domain: &str) -> FlowResult<Vec<ConfigEntry>> {
        let inner = self.inner.lock().await;

        Ok(inner
            .entries
            .values()
            .filter(|entry| entry.domain == domain)
            .cloned()
            .collect())
    }

    async fn update_entry_options(&self, id: &EntryId, options: EntryData) -> FlowResult<()> {
        let mut inner = self.inner.lock().await;

        let entry = inner
            .entries
            .get_mut(id)
            .ok_or(FlowError::EntryNotFound(*id))?;
        entry.options = options;

        Ok(())
    }
}
