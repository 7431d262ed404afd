use crate::entry::EntryData;
use crate::flow::{FormErrors, FormSchema};

/// Typed result of a single flow step.
///
/// Every step of a config or options flow resolves to one of these kinds,
/// which the platform's frontend turns into the next screen shown to the
/// user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Render (or re-render) a form for the given step.
    Form {
        /// Identifier of the step the form belongs to.
        step_id: &'static str,
        /// Schema of the form to render.
        schema: FormSchema,
        /// Error codes to display, empty on first render.
        errors: FormErrors,
    },
    /// The flow finished with validated data.
    CreateEntry {
        /// Title of the entry that was created or updated.
        title: String,
        /// The validated submission the flow finished with.
        data: EntryData,
    },
    /// The flow terminated without error state.
    Abort {
        /// Machine-readable reason, e.g. `already_configured`.
        reason: &'static str,
    },
}

impl FlowOutcome {
    /// Builds a [`FlowOutcome::Form`] without errors, for a step's first render.
    pub fn form(step_id: &'static str, schema: FormSchema) -> Self {
        Self::Form {
            step_id,
            schema,
            errors: FormErrors::new(),
        }
    }

    /// Builds a [`FlowOutcome::Form`] carrying the given error codes.
    pub fn form_with_errors(step_id: &'static str, schema: FormSchema, errors: FormErrors) -> Self {
        Self::Form {
            step_id,
            schema,
            errors,
        }
    }

    /// Builds a [`FlowOutcome::CreateEntry`].
    pub fn create_entry(title: impl Into<String>, data: EntryData) -> Self {
        Self::CreateEntry {
            title: title.into(),
            data,
        }
    }

    /// Builds a [`FlowOutcome::Abort`] with the given reason.
    pub fn abort(reason: &'static str) -> Self {
        Self::Abort { reason }
    }
}
