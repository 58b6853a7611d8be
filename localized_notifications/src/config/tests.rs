//! Tests for layered configuration loading and validation.

use anyhow::{Result, ensure};
use camino::Utf8Path;
use rstest::rstest;
use test_helpers::figment::{figment_error, with_jail};
use unic_langid::langid;

use super::*;

const FILE: &str = "notifications.toml";

fn options(default: Option<&str>, supported: &[&str]) -> NotificationOptions {
    NotificationOptions {
        default_locale: default.map(str::to_owned),
        supported_locales: supported.iter().map(|tag| (*tag).to_owned()).collect(),
    }
}

#[rstest]
fn reads_the_toml_file() -> Result<()> {
    let loaded = with_jail(|jail| {
        jail.create_file(
            FILE,
            "default_locale = \"pt-BR\"\nsupported_locales = [\"pt-BR\", \"en-US\"]\n",
        )?;
        NotificationOptions::load(Some(Utf8Path::new(FILE))).map_err(figment_error)
    })?;
    ensure!(
        loaded == options(Some("pt-BR"), &["pt-BR", "en-US"]),
        "unexpected options {loaded:?}"
    );
    Ok(())
}

#[rstest]
fn environment_overrides_the_file() -> Result<()> {
    let loaded = with_jail(|jail| {
        jail.create_file(
            FILE,
            "default_locale = \"pt-BR\"\nsupported_locales = [\"pt-BR\"]\n",
        )?;
        jail.set_env("NOTIFICATIONS_DEFAULT_LOCALE", "en-US");
        jail.set_env("NOTIFICATIONS_SUPPORTED_LOCALES", "pt-BR, en-US");
        NotificationOptions::load(Some(Utf8Path::new(FILE))).map_err(figment_error)
    })?;
    ensure!(
        loaded == options(Some("en-US"), &["pt-BR", "en-US"]),
        "unexpected options {loaded:?}"
    );
    Ok(())
}

#[rstest]
#[case("en-US", &["en-US"])]
#[case("pt-BR,en-US", &["pt-BR", "en-US"])]
#[case("pt-BR,,en-US,", &["pt-BR", "en-US"])]
#[case("[\"en-US\", \"pt-BR\"]", &["en-US", "pt-BR"])]
#[case("", &[])]
fn environment_lists_accept_commas_and_arrays(
    #[case] raw: &str,
    #[case] expected: &[&str],
) -> Result<()> {
    let loaded = with_jail(|jail| {
        jail.set_env("NOTIFICATIONS_SUPPORTED_LOCALES", raw);
        NotificationOptions::load(None).map_err(figment_error)
    })?;
    ensure!(
        loaded.supported_locales == expected,
        "expected {expected:?}, got {:?}",
        loaded.supported_locales
    );
    Ok(())
}

#[rstest]
fn scalar_values_stay_strings() -> Result<()> {
    let loaded = with_jail(|jail| {
        jail.set_env("NOTIFICATIONS_DEFAULT_LOCALE", " en ");
        NotificationOptions::load(None).map_err(figment_error)
    })?;
    ensure!(
        loaded.default_locale.as_deref() == Some("en"),
        "unexpected default {:?}",
        loaded.default_locale
    );
    Ok(())
}

#[rstest]
fn defaults_apply_without_any_source() -> Result<()> {
    let loaded = with_jail(|_jail| NotificationOptions::load(None).map_err(figment_error))?;
    ensure!(
        loaded == NotificationOptions::default(),
        "unexpected options {loaded:?}"
    );
    ensure!(
        matches!(loaded.validate(), Err(ConfigError::MissingDefaultLocale)),
        "empty configuration should be rejected"
    );
    Ok(())
}

#[rstest]
#[case::missing(None)]
#[case::malformed(Some("default_locale = "))]
fn unreadable_files_name_the_path(#[case] contents: Option<&str>) -> Result<()> {
    let outcome = with_jail(|jail| {
        if let Some(text) = contents {
            jail.create_file(FILE, text)?;
        }
        Ok(NotificationOptions::load(Some(Utf8Path::new(FILE))))
    })?;
    match outcome {
        Err(ConfigError::File { path, .. }) => {
            ensure!(path == FILE, "unexpected path {path}");
            Ok(())
        }
        other => Err(anyhow::anyhow!("expected ConfigError::File, got {other:?}")),
    }
}

#[rstest]
fn mistyped_values_fail_gathering() -> Result<()> {
    let outcome = with_jail(|jail| {
        jail.create_file(FILE, "supported_locales = 3\n")?;
        Ok(NotificationOptions::load(Some(Utf8Path::new(FILE))))
    })?;
    ensure!(
        matches!(outcome, Err(ConfigError::Gathering(_))),
        "expected ConfigError::Gathering, got {outcome:?}"
    );
    Ok(())
}

#[rstest]
fn validation_builds_a_negotiator() {
    let negotiator = options(Some(" pt-BR "), &["pt-BR", "en-US", "pt-BR"])
        .validate()
        .expect("options should validate");
    assert_eq!(negotiator.default_locale(), &langid!("pt-BR"));
    assert_eq!(
        negotiator.supported_locales(),
        &[langid!("pt-BR"), langid!("en-US")]
    );
}

#[rstest]
#[case::absent_default(options(None, &["en-US"]))]
#[case::blank_default(options(Some("  "), &["en-US"]))]
fn validation_requires_a_default(#[case] raw: NotificationOptions) {
    assert!(matches!(
        raw.validate(),
        Err(ConfigError::MissingDefaultLocale)
    ));
}

#[rstest]
fn validation_requires_supported_locales() {
    assert!(matches!(
        options(Some("en-US"), &[]).validate(),
        Err(ConfigError::EmptySupportedLocales)
    ));
}

#[rstest]
fn validation_requires_a_supported_default() {
    assert!(matches!(
        options(Some("fr-FR"), &["pt-BR", "en-US"]).validate(),
        Err(ConfigError::DefaultNotSupported { .. })
    ));
}

#[rstest]
#[case::bad_default(options(Some("not a locale"), &["en-US"]), "not a locale")]
#[case::bad_entry(options(Some("en-US"), &["en-US", "x_"]), "x_")]
fn validation_rejects_unparseable_tags(#[case] raw: NotificationOptions, #[case] bad: &str) {
    match raw.validate() {
        Err(ConfigError::InvalidLocale { value, .. }) => assert_eq!(value, bad),
        other => panic!("expected ConfigError::InvalidLocale, got {other:?}"),
    }
}
