use serde::{Deserialize, Serialize};

/// Sentry error tracking configuration.
///
/// This is the static-configuration block for the Sentry integration. When
/// present, it is forwarded into the integration's import step, which
/// validates it exactly like an interactive submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentryConfig {
    /// Sentry DSN (Data Source Name) for error reporting.
    pub dsn: String,
    /// Optional free-form environment label attached to reported events.
    pub environment: Option<String>,
}
