use domus_flow::entry::EntryData;
use sentry::types::{Dsn, ParseDsnError};
use thiserror::Error;

use crate::CONF_DSN;

/// Display title of the entries created by this integration.
const ENTRY_TITLE: &str = "Sentry";

/// Failures of [`validate_input`].
///
/// Only [`ValidateError::BadDsn`] is reported to the user as a field error;
/// everything else is mapped to the generic `unknown` code by the step
/// handler.
#[derive(Debug, Error)]
pub(crate) enum ValidateError {
    /// The submission has no value under the `dsn` key.
    #[error("the submission is missing the dsn field")]
    MissingDsn,

    /// The submitted DSN was rejected by the Sentry SDK's parser.
    #[error("the submitted dsn failed to parse: {0}")]
    BadDsn(#[from] ParseDsnError),
}

/// Validates a raw form submission and returns the entry title to use.
///
/// The submitted DSN must satisfy the Sentry SDK's syntax rules (scheme,
/// public key, host, project id); the environment label is free-form and not
/// validated.
pub(crate) fn validate_input(input: &EntryData) -> Result<String, ValidateError> {
    let raw_dsn = input.get(CONF_DSN).ok_or(ValidateError::MissingDsn)?;
    raw_dsn.parse::<Dsn>()?;

    Ok(ENTRY_TITLE.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(dsn: &str) -> EntryData {
        let mut data = EntryData::new();
        data.insert(CONF_DSN.to_owned(), dsn.to_owned());
        data
    }

    #[test]
    fn a_well_formed_dsn_yields_the_entry_title() {
        let title = validate_input(&submission("http://public@sentry.local/1")).unwrap();

        assert_eq!(title, "Sentry");
    }

    #[test]
    fn a_malformed_dsn_is_rejected_by_the_parser() {
        let result = validate_input(&submission("foo"));

        assert!(matches!(result, Err(ValidateError::BadDsn(_))));
    }

    #[test]
    fn a_submission_without_dsn_is_not_a_parser_failure() {
        let result = validate_input(&EntryData::new());

        assert!(matches!(result, Err(ValidateError::MissingDsn)));
    }
}
