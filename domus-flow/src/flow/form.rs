use std::collections::BTreeMap;

/// Pseudo field name used to attach an error code to the form as a whole
/// rather than to a single field.
pub const BASE_FIELD: &str = "base";

/// Error codes accumulated during a step, keyed by field name.
///
/// Codes are short machine-readable identifiers (e.g. `bad_dsn`); rendering
/// them as user-facing text is the job of the platform's frontend.
pub type FormErrors = BTreeMap<String, String>;

/// A single field of a form schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Field name, also the key of the submitted value.
    pub name: String,
    /// Whether a submission without this field is rejected by the renderer.
    pub required: bool,
    /// Value the renderer pre-populates the field with.
    pub default: Option<String>,
}

impl FormField {
    /// Creates a required field.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            default: None,
        }
    }

    /// Creates an optional field.
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            default: None,
        }
    }

    /// Sets the default value the form is pre-populated with.
    pub fn with_default(mut self, default: Option<String>) -> Self {
        self.default = default;
        self
    }
}

/// Schema of the form a step renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    /// Fields in display order.
    pub fields: Vec<FormField>,
}

impl FormSchema {
    /// Creates a schema from the given fields.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    /// Returns the field with the given name, if present.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }
}
