mod sentry;

pub use sentry::*;
