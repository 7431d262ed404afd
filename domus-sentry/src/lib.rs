//! Sentry error-reporting integration for the Domus platform.
//!
//! The integration is configured through two flows built on
//! [`domus_flow`]: a setup flow that collects and validates a DSN before
//! persisting a [`domus_flow::entry::ConfigEntry`], and an options flow that
//! edits the DSN and the optional environment label of an existing entry.
//! [`init_reporting`] then builds the Sentry client from the persisted entry.

mod client;
mod config_flow;
mod validate;

pub use client::{SetupError, init_reporting};
pub use config_flow::{SentryConfigFlow, SentryOptionsFlow};

/// Integration domain owning the config entries created by the flows.
pub const DOMAIN: &str = "sentry";

/// Form and entry-data key of the DSN.
pub const CONF_DSN: &str = "dsn";

/// Form and entry-data key of the optional environment label.
pub const CONF_ENVIRONMENT: &str = "environment";
