use thiserror::Error;

use crate::entry::EntryId;

/// Convenient result type for flow operations using [`FlowError`] as the error type.
pub type FlowResult<T> = Result<T, FlowError>;

/// Errors that can occur while driving a config flow or accessing the entry store.
///
/// Validation failures are not errors: they are reported to the user as a
/// redisplayed form and never surface through this type.
#[derive(Debug, Error)]
pub enum FlowError {
    /// No entry with the given id exists in the store.
    #[error("the config entry with id {0} was not found")]
    EntryNotFound(EntryId),
}
