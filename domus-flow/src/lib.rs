//! Config-flow primitives for the Domus platform.
//!
//! Integrations are configured interactively through flows: a flow renders a
//! form, validates the submission, and either persists a [`ConfigEntry`] or
//! redisplays the form with field-level error codes. This crate provides the
//! pieces a flow is built from:
//! - [`entry`] - persisted config entries and their identifiers
//! - [`flow`] - form schemas, field errors, and typed step outcomes
//! - [`store`] - the entry store trait and the in-memory implementation

pub mod entry;
pub mod error;
pub mod flow;
pub mod store;
