use std::future::Future;

use crate::entry::{ConfigEntry, EntryData, EntryId};
use crate::error::FlowResult;

/// Trait for storing and retrieving config entries.
///
/// [`EntryStore`] implementations define how entries created by config flows
/// are persisted and queried. Entries are looked up either by id or by the
/// domain of the integration that owns them.
///
/// Implementations should ensure thread-safety and handle concurrent access
/// to the data.
pub trait EntryStore {
    /// Persists a new entry and returns its id.
    fn insert_entry(&self, entry: ConfigEntry) -> impl Future<Output = FlowResult<EntryId>> + Send;

    /// Returns the entry with the given id, if it exists.
    fn get_entry(
        &self,
        id: &EntryId,
    ) -> impl Future<Output = FlowResult<Option<ConfigEntry>>> + Send;

    /// Returns all entries owned by the given integration domain.
    fn entries_for_domain(
        &self,
        domain: &str,
    ) -> impl Future<Output = FlowResult<Vec<ConfigEntry>>> + Send;

    /// Replaces the options of an existing entry in place.
    ///
    /// Never creates an entry; updating an unknown id is an error.
    fn update_entry_options(
        &self,
        id: &EntryId,
        options: EntryData,
    ) -> impl Future<Output = FlowResult<()>> + Send;
}
