//! Store abstractions for persisted config entries.
//!
//! Flows never own entries directly: they create and update them through an
//! [`base::EntryStore`], which the platform backs with its persistence layer.
//! The [`memory`] module provides the in-process implementation used as the
//! default store and as the test double.

pub mod base;
pub mod memory;
