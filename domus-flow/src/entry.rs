use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a persisted config entry.
pub type EntryId = Uuid;

/// Key-value payload of a config entry or a raw form submission.
///
/// Both sides of a flow share this shape: the form submission arrives as a
/// map of field name to value, and the validated submission is persisted
/// verbatim as the entry data.
pub type EntryData = BTreeMap<String, String>;

/// Persisted configuration record for one configured integration instance.
///
/// Entries are owned by the platform and identified by their integration
/// `domain`. The `data` map holds the validated setup input and never changes
/// after creation; the `options` map holds values editable through the
/// integration's options flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Unique identifier of this entry.
    pub id: EntryId,
    /// Domain of the integration this entry configures.
    pub domain: String,
    /// Human-readable title shown for this entry.
    pub title: String,
    /// Validated setup data, immutable after creation.
    pub data: EntryData,
    /// Options editable after setup.
    pub options: EntryData,
}

impl ConfigEntry {
    /// Creates a new entry with a fresh id and empty options.
    pub fn new(domain: impl Into<String>, title: impl Into<String>, data: EntryData) -> Self {
        Self {
            id: Uuid::new_v4(),
            domain: domain.into(),
            title: title.into(),
            data,
            options: EntryData::new(),
        }
    }
}
