//! Unit tests for error rendering.

use rstest::rstest;
use unic_langid::langid;

use super::{CatalogError, ConfigError, NotificationError};

#[rstest]
#[case(ConfigError::MissingDefaultLocale, "a default locale must be configured")]
#[case(
    ConfigError::EmptySupportedLocales,
    "at least one supported locale must be configured"
)]
#[case(
    ConfigError::DefaultNotSupported {
        default: langid!("fr-FR"),
        supported: String::from("pt-BR, en-US"),
    },
    "default locale fr-FR is not one of the supported locales [pt-BR, en-US]"
)]
#[case(
    ConfigError::File {
        path: camino::Utf8PathBuf::from("notifications.toml"),
        source: "expected `=`".into(),
    },
    "failed to load configuration file notifications.toml: expected `=`"
)]
fn config_errors_render_actionable_messages(#[case] err: ConfigError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn missing_argument_names_the_placeholder() {
    let err = CatalogError::MissingArgument {
        key: String::from("UserNotFound"),
        index: 2,
        provided: 1,
    };
    assert_eq!(
        err.to_string(),
        "message 'UserNotFound' references argument {2} but only 1 were supplied"
    );
}

#[test]
fn unrenderable_argument_names_the_placeholder() {
    let err = CatalogError::UnrenderableArgument {
        key: String::from("UserNotFound"),
        index: 0,
    };
    assert_eq!(
        err.to_string(),
        "message 'UserNotFound' cannot render argument {0} as text"
    );
}

#[test]
fn notification_error_is_transparent_over_catalogue_errors() {
    let err = NotificationError::from(CatalogError::MalformedTemplate {
        key: String::from("Broken"),
        position: 4,
    });
    assert_eq!(
        err.to_string(),
        "message 'Broken' has a malformed placeholder at byte 4"
    );
    assert!(matches!(err, NotificationError::Catalog(_)));
}
