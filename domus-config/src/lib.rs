//! Configuration management for the Domus platform.
//!
//! Provides environment detection, configuration loading from YAML files with
//! environment-variable overrides, and the shared configuration types that
//! feed integrations set up from static configuration.

mod environment;
mod load;
pub mod shared;

pub use environment::*;
pub use load::*;
