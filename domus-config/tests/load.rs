use std::fs;

use domus_config::{Environment, load_config};
use domus_config::shared::SentryConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TestSettings {
    sentry: SentryConfig,
}

/// Exercises all three configuration layers: the base file, the
/// environment-specific file merged on top, and a `DOMUS_*` environment
/// variable override winning over both.
///
/// Kept as the single test of this binary because it changes the process
/// working directory and environment.
#[test]
fn config_layers_merge_in_order() {
    let base_dir = std::env::temp_dir().join(format!("domus-config-load-{}", std::process::id()));
    let configuration_dir = base_dir.join("configuration");
    fs::create_dir_all(&configuration_dir).unwrap();

    fs::write(
        configuration_dir.join("base.yaml"),
        "sentry:\n  dsn: http://public@sentry.local/1\n  environment: base\n",
    )
    .unwrap();
    // The dev layer overrides only the environment label.
    fs::write(
        configuration_dir.join("dev.yaml"),
        "sentry:\n  environment: development\n",
    )
    .unwrap();

    std::env::set_current_dir(&base_dir).unwrap();
    Environment::Dev.set();
    // Environment variables win over both files.
    unsafe { std::env::set_var("DOMUS_SENTRY__DSN", "http://public@sentry.local/2") };

    let settings = load_config::<TestSettings>().unwrap();

    assert_eq!(settings.sentry.dsn, "http://public@sentry.local/2");
    assert_eq!(
        settings.sentry.environment.as_deref(),
        Some("development"),
        "the dev layer overrides the base file"
    );

    unsafe { std::env::remove_var("DOMUS_SENTRY__DSN") };
    fs::remove_dir_all(&base_dir).unwrap();
}
