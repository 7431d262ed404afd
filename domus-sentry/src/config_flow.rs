use std::future::Future;

use domus_config::shared::SentryConfig;
use domus_flow::entry::{ConfigEntry, EntryData};
use domus_flow::error::FlowResult;
use domus_flow::flow::{BASE_FIELD, FlowOutcome, FormErrors, FormField, FormSchema};
use domus_flow::store::base::EntryStore;
use tracing::error;

use crate::validate::{ValidateError, validate_input};
use crate::{CONF_DSN, CONF_ENVIRONMENT, DOMAIN};

/// Step id of the interactive setup step.
const STEP_USER: &str = "user";

/// Step id of the options step.
const STEP_INIT: &str = "init";

/// Error code attached to the `dsn` field when the parser rejects it.
const ERROR_BAD_DSN: &str = "bad_dsn";

/// Error code attached to the whole form on unexpected failures.
const ERROR_UNKNOWN: &str = "unknown";

/// Abort reason when an entry for this integration already exists.
const ABORT_ALREADY_CONFIGURED: &str = "already_configured";

/// Shared handling for the single-validated-field steps of both flows.
///
/// Without input the form is shown with no errors. With input, the submission
/// is validated and handed to `finalize`; validation and finalizer failures
/// redisplay the same form with the appropriate error code, so the user can
/// correct the submission without restarting the flow.
async fn validated_step<F, Fut>(
    step_id: &'static str,
    schema: FormSchema,
    user_input: Option<EntryData>,
    finalize: F,
) -> FlowResult<FlowOutcome>
where
    F: FnOnce(String, EntryData) -> Fut,
    Fut: Future<Output = FlowResult<FlowOutcome>>,
{
    let mut errors = FormErrors::new();

    if let Some(input) = user_input {
        match validate_input(&input) {
            Ok(title) => match finalize(title, input).await {
                Ok(outcome) => return Ok(outcome),
                Err(err) => {
                    error!("failed to finalize the {step_id} step: {err}");
                    errors.insert(BASE_FIELD.to_owned(), ERROR_UNKNOWN.to_owned());
                }
            },
            Err(ValidateError::BadDsn(_)) => {
                errors.insert(CONF_DSN.to_owned(), ERROR_BAD_DSN.to_owned());
            }
            Err(err) => {
                error!("unexpected error while validating the {step_id} step: {err}");
                errors.insert(BASE_FIELD.to_owned(), ERROR_UNKNOWN.to_owned());
            }
        }
    }

    Ok(FlowOutcome::form_with_errors(step_id, schema, errors))
}

/// Setup flow of the Sentry integration.
///
/// The flow is a singleton guard around a single validated form: at most one
/// entry for the [`DOMAIN`] may exist, and both the interactive and the
/// import path go through the same validation.
#[derive(Debug, Clone)]
pub struct SentryConfigFlow<S> {
    store: S,
}

impl<S> SentryConfigFlow<S>
where
    S: EntryStore + Send + Sync,
{
    /// Creates a setup flow backed by the given entry store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Handles the interactive setup step.
    ///
    /// Aborts with `already_configured` when an entry for this integration
    /// already exists, before any form is shown. Otherwise renders a form
    /// requiring only the DSN and, on a valid submission, persists the entry
    /// and finishes the flow.
    pub async fn step_user(&self, user_input: Option<EntryData>) -> FlowResult<FlowOutcome> {
        if !self.store.entries_for_domain(DOMAIN).await?.is_empty() {
            return Ok(FlowOutcome::abort(ABORT_ALREADY_CONFIGURED));
        }

        let store = &self.store;
        validated_step(
            STEP_USER,
            user_schema(),
            user_input,
            |title, data| async move {
                let entry = ConfigEntry::new(DOMAIN, title.clone(), data.clone());
                store.insert_entry(entry).await?;

                Ok(FlowOutcome::create_entry(title, data))
            },
        )
        .await
    }

    /// Imports an entry from static configuration.
    ///
    /// The typed configuration is converted into the same submission shape an
    /// interactive user produces and forwarded verbatim into
    /// [`SentryConfigFlow::step_user`], so it is validated identically and
    /// blocked by the same duplicate guard.
    pub async fn step_import(&self, config: SentryConfig) -> FlowResult<FlowOutcome> {
        self.step_user(Some(import_submission(config))).await
    }

    /// Returns the options flow bound to an existing entry.
    pub fn options_flow(store: S, entry: ConfigEntry) -> SentryOptionsFlow<S> {
        SentryOptionsFlow { store, entry }
    }
}

/// Options flow of the Sentry integration.
///
/// Edits the singleton entry in place: the form is pre-populated from the
/// stored DSN and the current environment option, and a valid submission
/// replaces the entry's options without creating a new entry.
#[derive(Debug, Clone)]
pub struct SentryOptionsFlow<S> {
    store: S,
    entry: ConfigEntry,
}

impl<S> SentryOptionsFlow<S>
where
    S: EntryStore + Send + Sync,
{
    /// Handles the options step.
    pub async fn step_init(&self, user_input: Option<EntryData>) -> FlowResult<FlowOutcome> {
        let store = &self.store;
        let entry = &self.entry;
        validated_step(
            STEP_INIT,
            self.init_schema(),
            user_input,
            |_title, data| async move {
                store.update_entry_options(&entry.id, data.clone()).await?;

                Ok(FlowOutcome::create_entry(entry.title.clone(), data))
            },
        )
        .await
    }

    /// The entry this options flow edits.
    pub fn entry(&self) -> &ConfigEntry {
        &self.entry
    }

    fn init_schema(&self) -> FormSchema {
        FormSchema::new(vec![
            FormField::required(CONF_DSN).with_default(self.entry.data.get(CONF_DSN).cloned()),
            FormField::optional(CONF_ENVIRONMENT)
                .with_default(self.entry.options.get(CONF_ENVIRONMENT).cloned()),
        ])
    }
}

fn user_schema() -> FormSchema {
    FormSchema::new(vec![FormField::required(CONF_DSN)])
}

fn import_submission(config: SentryConfig) -> EntryData {
    let mut data = EntryData::new();
    data.insert(CONF_DSN.to_owned(), config.dsn);
    if let Some(environment) = config.environment {
        data.insert(CONF_ENVIRONMENT.to_owned(), environment);
    }

    data
}
