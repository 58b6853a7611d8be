//! Unit tests for the demo's request simulation.

use camino::Utf8PathBuf;
use localized_notifications::{ConfigError, NotificationError};
use rstest::{fixture, rstest};
use test_helpers::fs::{CatalogDir, catalog_dir};

use super::*;
use crate::error::DemoError;

const CONFIG: &str = "default_locale = \"pt-BR\"\nsupported_locales = [\"pt-BR\", \"en-US\"]\n";

#[fixture]
fn locales() -> CatalogDir {
    catalog_dir(&[
        ("notifications.toml", CONFIG),
        (
            "en-US/shared.ftl",
            "UserNotFound = User '{ $arg0 }' not found.\n\
             RetryIn = Retry in { $arg0 ->\n    [one] one second\n   *[other] { $arg0 } seconds\n}.",
        ),
        (
            "pt-BR/shared.ftl",
            "UserNotFound = Usuário '{ $arg0 }' não encontrado.",
        ),
    ])
    .expect("write fixture files")
}

fn args(dir: &CatalogDir, locale: Option<&str>, key: &str, values: &[&str]) -> Args {
    Args {
        config: Some(dir.root().join("notifications.toml")),
        locale: locale.map(str::to_owned),
        locales_dir: dir.root().to_owned(),
        domain: String::from("shared"),
        key: key.to_owned(),
        args: values.iter().map(|value| (*value).to_owned()).collect(),
    }
}

#[rstest]
#[case(Some("en-GB"), "en-US", "User 'john doe' not found.")]
#[case(None, "pt-BR", "Usuário 'john doe' não encontrado.")]
fn simulates_one_request(
    locales: CatalogDir,
    #[case] hint: Option<&str>,
    #[case] expected_locale: &str,
    #[case] expected_text: &str,
) {
    let cli = args(&locales, hint, "UserNotFound", &["john doe"]);
    let service = build_service(&cli).expect("service should build");
    let report = simulate_request(&service, &cli).expect("request should succeed");

    assert_eq!(report.locale, expected_locale);
    assert_eq!(
        report.notifications.first().map(|entry| entry.text()),
        Some(expected_text)
    );
}

#[rstest]
#[case("1", "Retry in one second.")]
#[case("30", "Retry in 30 seconds.")]
fn numeric_arguments_drive_plural_selection(
    locales: CatalogDir,
    #[case] value: &str,
    #[case] expected: &str,
) {
    let cli = args(&locales, Some("en-US"), "RetryIn", &[value]);
    let service = build_service(&cli).expect("service should build");
    let report = simulate_request(&service, &cli).expect("request should succeed");
    assert_eq!(
        report.notifications.first().map(|entry| entry.text()),
        Some(expected)
    );
}

#[rstest]
fn run_writes_json(locales: CatalogDir) {
    let cli = args(&locales, Some("en-US"), "DoesNotExist", &[]);
    let mut out = Vec::new();
    run(&cli, &mut out).expect("run should succeed");

    let json: serde_json::Value = serde_json::from_slice(&out).expect("output is JSON");
    assert_eq!(json.get("locale").and_then(serde_json::Value::as_str), Some("en-US"));
    let entry = json
        .get("notifications")
        .and_then(serde_json::Value::as_array)
        .and_then(|entries| entries.first())
        .expect("one notification");
    assert_eq!(entry.get("text").and_then(serde_json::Value::as_str), Some("DoesNotExist"));
    assert_eq!(
        entry.get("resource_not_found").and_then(serde_json::Value::as_bool),
        Some(true)
    );
}

#[rstest]
fn blank_keys_are_reported(locales: CatalogDir) {
    let cli = args(&locales, None, " ", &[]);
    let service = build_service(&cli).expect("service should build");
    let err = simulate_request(&service, &cli).expect_err("blank key should fail");
    assert!(matches!(
        err,
        DemoError::Notification(NotificationError::EmptyKey)
    ));
}

#[rstest]
fn missing_configuration_is_reported(locales: CatalogDir) {
    let mut cli = args(&locales, None, "UserNotFound", &[]);
    cli.config = Some(Utf8PathBuf::from("/nonexistent/notifications.toml"));
    let err = build_service(&cli).expect_err("missing file should fail");
    assert!(matches!(err, DemoError::Config(ConfigError::File { .. })));
}
