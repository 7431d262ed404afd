use std::sync::Arc;

use domus_flow::entry::ConfigEntry;
use sentry::ClientInitGuard;
use sentry::types::{Dsn, ParseDsnError};
use thiserror::Error;
use tracing::info;

use crate::{CONF_DSN, CONF_ENVIRONMENT, DOMAIN};

/// Errors that can occur when initializing error reporting from a config entry.
///
/// Entries created through the config flow always carry a parseable DSN, so
/// these only surface for entries tampered with outside the flow.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The entry data has no value under the `dsn` key.
    #[error("the config entry has no dsn stored in its data")]
    MissingDsn,

    /// The stored DSN was rejected by the Sentry SDK's parser.
    #[error("the stored dsn failed to parse: {0}")]
    InvalidDsn(#[from] ParseDsnError),
}

/// Initializes the Sentry client from a persisted config entry.
///
/// The environment label is taken from the entry options, falling back to the
/// entry data for entries imported from static configuration. The returned
/// guard must be kept alive for as long as the integration is set up.
pub fn init_reporting(entry: &ConfigEntry) -> Result<ClientInitGuard, SetupError> {
    let dsn: Dsn = entry
        .data
        .get(CONF_DSN)
        .ok_or(SetupError::MissingDsn)?
        .parse()?;

    let environment = entry
        .options
        .get(CONF_ENVIRONMENT)
        .or_else(|| entry.data.get(CONF_ENVIRONMENT))
        .cloned();

    info!("initializing sentry with the stored dsn");

    let guard = sentry::init(sentry::ClientOptions {
        dsn: Some(dsn),
        environment: environment.map(Into::into),
        integrations: vec![Arc::new(
            sentry::integrations::panic::PanicIntegration::new(),
        )],
        ..Default::default()
    });

    // Tag events so they can be told apart from other integrations.
    sentry::configure_scope(|scope| {
        scope.set_tag("integration", DOMAIN);
    });

    Ok(guard)
}
