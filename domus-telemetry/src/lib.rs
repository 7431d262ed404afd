//! Telemetry initialisation for Domus services.

mod tracing;

pub use tracing::*;
