//! Startup configuration: layered loading feeding service construction.

use anyhow::{Result, anyhow, ensure};
use camino::{Utf8Path, Utf8PathBuf};
use localized_notifications::{
    ConfigError, MessageDomain, NotificationOptions, NotificationService, notification_args,
};
use rstest::rstest;
use test_helpers::figment::{figment_error, with_jail};

struct SharedResource;

impl MessageDomain for SharedResource {
    const NAME: &'static str = "shared";
}

fn fixture(path: &str) -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(path)
}

#[rstest]
fn configured_service_localises_requests() -> Result<()> {
    let text = with_jail(|_jail| {
        let negotiator = NotificationOptions::load(Some(fixture("notifications.toml").as_path()))
            .and_then(|options| options.validate())
            .map_err(figment_error)?;
        let service =
            NotificationService::for_domain::<SharedResource>(negotiator, &fixture("locales"))
                .map_err(figment_error)?;

        let mut notifications = service.begin_request(None);
        notifications
            .add_notification("UserNotFound", &notification_args!["john doe"])
            .map_err(figment_error)?;
        Ok(notifications
            .snapshot()
            .first()
            .map(|entry| entry.text().to_owned()))
    })?;
    ensure!(
        text.as_deref() == Some("Usuário 'john doe' não encontrado."),
        "unexpected text {text:?}"
    );
    Ok(())
}

#[rstest]
fn environment_can_switch_the_default_locale() -> Result<()> {
    let negotiator = with_jail(|jail| {
        jail.set_env("NOTIFICATIONS_DEFAULT_LOCALE", "en-US");
        NotificationOptions::load(Some(fixture("notifications.toml").as_path()))
            .and_then(|options| options.validate())
            .map_err(figment_error)
    })?;
    ensure!(
        negotiator.default_locale().to_string() == "en-US",
        "unexpected default {}",
        negotiator.default_locale()
    );
    ensure!(
        negotiator.resolve_hint(None).to_string() == "en-US",
        "absent hints should use the new default"
    );
    Ok(())
}

#[rstest]
#[case::unsupported_default("fr-FR", "pt-BR,en-US")]
#[case::empty_list("pt-BR", "")]
#[case::bad_tag("pt-BR", "pt-BR,not a tag")]
fn invalid_environment_fails_fast(#[case] default: &str, #[case] supported: &str) -> Result<()> {
    let outcome = with_jail(|jail| {
        jail.set_env("NOTIFICATIONS_DEFAULT_LOCALE", default);
        jail.set_env("NOTIFICATIONS_SUPPORTED_LOCALES", supported);
        Ok(NotificationOptions::load(None).and_then(|options| options.validate()))
    })?;
    match outcome {
        Err(
            ConfigError::DefaultNotSupported { .. }
            | ConfigError::EmptySupportedLocales
            | ConfigError::InvalidLocale { .. },
        ) => Ok(()),
        other => Err(anyhow!("expected a validation error, got {other:?}")),
    }
}
