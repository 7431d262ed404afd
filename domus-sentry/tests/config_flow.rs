use domus_config::shared::SentryConfig;
use domus_flow::entry::{ConfigEntry, EntryData};
use domus_flow::flow::FlowOutcome;
use domus_flow::store::base::EntryStore;
use domus_flow::store::memory::MemoryEntryStore;
use domus_sentry::{CONF_DSN, CONF_ENVIRONMENT, DOMAIN, SentryConfigFlow, SentryOptionsFlow};
use domus_telemetry::init_test_tracing;

const EXAMPLE_VALID_DSN: &str = "http://public@sentry.local/1";
const EXAMPLE_VALID_DSN2: &str = "http://public@sentry.local/2";

fn dsn_submission(dsn: &str) -> EntryData {
    let mut data = EntryData::new();
    data.insert(CONF_DSN.to_owned(), dsn.to_owned());

    data
}

#[tokio::test]
async fn user_step_shows_the_form_first() {
    init_test_tracing();
    let flow = SentryConfigFlow::new(MemoryEntryStore::new());

    let outcome = flow.step_user(None).await.unwrap();

    match outcome {
        FlowOutcome::Form {
            step_id,
            schema,
            errors,
        } => {
            assert_eq!(step_id, "user");
            assert!(errors.is_empty());
            assert!(schema.field(CONF_DSN).is_some_and(|field| field.required));
        }
        other => panic!("expected a form, got {other:?}"),
    }
}

#[tokio::test]
async fn user_step_creates_an_entry_from_a_valid_dsn() {
    init_test_tracing();
    let store = MemoryEntryStore::new();
    let flow = SentryConfigFlow::new(store.clone());
    let submission = dsn_submission(EXAMPLE_VALID_DSN);

    let outcome = flow.step_user(Some(submission.clone())).await.unwrap();

    assert_eq!(
        outcome,
        FlowOutcome::create_entry("Sentry", submission.clone())
    );

    let entries = store.entries_for_domain(DOMAIN).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Sentry");
    assert_eq!(entries[0].data, submission);
    assert!(entries[0].options.is_empty());
}

#[tokio::test]
async fn user_step_redisplays_the_form_on_a_bad_dsn() {
    init_test_tracing();
    let store = MemoryEntryStore::new();
    let flow = SentryConfigFlow::new(store.clone());

    let outcome = flow.step_user(Some(dsn_submission("foo"))).await.unwrap();

    match outcome {
        FlowOutcome::Form {
            step_id, errors, ..
        } => {
            assert_eq!(step_id, "user");
            assert_eq!(errors.get(CONF_DSN).map(String::as_str), Some("bad_dsn"));
            assert_eq!(errors.len(), 1);
        }
        other => panic!("expected a form, got {other:?}"),
    }
    assert!(store.entries_for_domain(DOMAIN).await.unwrap().is_empty());
}

#[tokio::test]
async fn user_step_reports_unknown_on_a_submission_without_dsn() {
    init_test_tracing();
    let flow = SentryConfigFlow::new(MemoryEntryStore::new());

    let outcome = flow.step_user(Some(EntryData::new())).await.unwrap();

    match outcome {
        FlowOutcome::Form { errors, .. } => {
            assert_eq!(errors.get("base").map(String::as_str), Some("unknown"));
        }
        other => panic!("expected a form, got {other:?}"),
    }
}

#[tokio::test]
async fn a_second_setup_flow_aborts_when_already_configured() {
    init_test_tracing();
    let store = MemoryEntryStore::new();
    let flow1 = SentryConfigFlow::new(store.clone());
    let flow2 = SentryConfigFlow::new(store.clone());

    let outcome1 = flow1
        .step_user(Some(dsn_submission(EXAMPLE_VALID_DSN)))
        .await
        .unwrap();
    let outcome2 = flow2
        .step_user(Some(dsn_submission(EXAMPLE_VALID_DSN2)))
        .await
        .unwrap();

    assert!(matches!(outcome1, FlowOutcome::CreateEntry { .. }));
    assert_eq!(
        outcome2,
        FlowOutcome::abort("already_configured"),
        "the integration is a singleton"
    );
    assert_eq!(store.entries_for_domain(DOMAIN).await.unwrap().len(), 1);
}

#[tokio::test]
async fn already_configured_aborts_before_any_form_is_shown() {
    init_test_tracing();
    let store = MemoryEntryStore::new();
    let flow = SentryConfigFlow::new(store.clone());
    flow.step_user(Some(dsn_submission(EXAMPLE_VALID_DSN)))
        .await
        .unwrap();

    // Even the first render of a new flow aborts, no input required.
    let outcome = flow.step_user(None).await.unwrap();

    assert_eq!(outcome, FlowOutcome::abort("already_configured"));
}

#[tokio::test]
async fn import_step_creates_an_entry_with_environment() {
    init_test_tracing();
    let store = MemoryEntryStore::new();
    let flow = SentryConfigFlow::new(store.clone());
    let config = SentryConfig {
        dsn: EXAMPLE_VALID_DSN.to_owned(),
        environment: Some("development".to_owned()),
    };

    let outcome = flow.step_import(config).await.unwrap();

    let mut expected = dsn_submission(EXAMPLE_VALID_DSN);
    expected.insert(CONF_ENVIRONMENT.to_owned(), "development".to_owned());
    assert_eq!(outcome, FlowOutcome::create_entry("Sentry", expected.clone()));

    let entries = store.entries_for_domain(DOMAIN).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].data, expected);
}

#[tokio::test]
async fn import_step_is_validated_like_a_user_submission() {
    init_test_tracing();
    let store = MemoryEntryStore::new();
    let flow = SentryConfigFlow::new(store.clone());
    let config = SentryConfig {
        dsn: "foo".to_owned(),
        environment: None,
    };

    let outcome = flow.step_import(config).await.unwrap();

    match outcome {
        FlowOutcome::Form { errors, .. } => {
            assert_eq!(errors.get(CONF_DSN).map(String::as_str), Some("bad_dsn"));
        }
        other => panic!("expected a form, got {other:?}"),
    }
    assert!(store.entries_for_domain(DOMAIN).await.unwrap().is_empty());
}

#[tokio::test]
async fn import_step_is_blocked_by_the_duplicate_guard() {
    init_test_tracing();
    let store = MemoryEntryStore::new();
    let flow = SentryConfigFlow::new(store.clone());
    flow.step_user(Some(dsn_submission(EXAMPLE_VALID_DSN)))
        .await
        .unwrap();

    let outcome = flow
        .step_import(SentryConfig {
            dsn: EXAMPLE_VALID_DSN2.to_owned(),
            environment: None,
        })
        .await
        .unwrap();

    assert_eq!(outcome, FlowOutcome::abort("already_configured"));
}

#[tokio::test]
async fn options_flow_prefills_and_updates_the_entry() {
    init_test_tracing();
    let store = MemoryEntryStore::new();
    let entry = ConfigEntry::new(DOMAIN, "Sentry", dsn_submission(EXAMPLE_VALID_DSN));
    let entry_id = store.insert_entry(entry.clone()).await.unwrap();

    let options_flow: SentryOptionsFlow<_> =
        SentryConfigFlow::options_flow(store.clone(), entry);

    // First render pre-populates from the stored entry.
    let outcome = options_flow.step_init(None).await.unwrap();
    match outcome {
        FlowOutcome::Form {
            step_id,
            schema,
            errors,
        } => {
            assert_eq!(step_id, "init");
            assert!(errors.is_empty());
            let dsn_field = schema.field(CONF_DSN).unwrap();
            assert!(dsn_field.required);
            assert_eq!(dsn_field.default.as_deref(), Some(EXAMPLE_VALID_DSN));
            let environment_field = schema.field(CONF_ENVIRONMENT).unwrap();
            assert!(!environment_field.required);
            assert!(environment_field.default.is_none());
        }
        other => panic!("expected a form, got {other:?}"),
    }

    // Submitting a new dsn and environment updates the options in place.
    let mut submission = dsn_submission(EXAMPLE_VALID_DSN2);
    submission.insert(CONF_ENVIRONMENT.to_owned(), "development".to_owned());
    let outcome = options_flow
        .step_init(Some(submission.clone()))
        .await
        .unwrap();

    assert_eq!(outcome, FlowOutcome::create_entry("Sentry", submission.clone()));

    let updated = store.get_entry(&entry_id).await.unwrap().unwrap();
    assert_eq!(updated.options, submission);
    assert_eq!(
        updated.data.get(CONF_DSN).map(String::as_str),
        Some(EXAMPLE_VALID_DSN),
        "setup data stays untouched"
    );
    assert_eq!(store.entries_for_domain(DOMAIN).await.unwrap().len(), 1);
}

#[tokio::test]
async fn options_flow_rejects_a_bad_dsn_and_keeps_the_options() {
    init_test_tracing();
    let store = MemoryEntryStore::new();
    let entry = ConfigEntry::new(DOMAIN, "Sentry", dsn_submission(EXAMPLE_VALID_DSN));
    let entry_id = store.insert_entry(entry.clone()).await.unwrap();
    let options_flow = SentryConfigFlow::options_flow(store.clone(), entry);

    let outcome = options_flow
        .step_init(Some(dsn_submission("foo")))
        .await
        .unwrap();

    match outcome {
        FlowOutcome::Form { errors, .. } => {
            assert_eq!(errors.get(CONF_DSN).map(String::as_str), Some("bad_dsn"));
        }
        other => panic!("expected a form, got {other:?}"),
    }
    let unchanged = store.get_entry(&entry_id).await.unwrap().unwrap();
    assert!(unchanged.options.is_empty());
}

#[tokio::test]
async fn a_flow_that_errored_accepts_a_corrected_resubmission() {
    init_test_tracing();
    let store = MemoryEntryStore::new();
    let flow = SentryConfigFlow::new(store.clone());

    let first = flow.step_user(Some(dsn_submission("foo"))).await.unwrap();
    assert!(matches!(first, FlowOutcome::Form { .. }));

    // The same flow value stays usable; no restart is required.
    let second = flow
        .step_user(Some(dsn_submission(EXAMPLE_VALID_DSN)))
        .await
        .unwrap();

    assert!(matches!(second, FlowOutcome::CreateEntry { .. }));
    assert_eq!(store.entries_for_domain(DOMAIN).await.unwrap().len(), 1);
}
