//! Form schemas and typed step outcomes for config flows.

mod form;
mod outcome;

pub use form::*;
pub use outcome::*;
