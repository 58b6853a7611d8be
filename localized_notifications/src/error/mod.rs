//! Error types produced while configuring and populating notification
//! collections.
//!
//! Errors fall into three families. [`ConfigError`] is fatal and surfaces
//! while the process is being set up. [`CatalogError`] covers catalogue
//! construction and template formatting failures. [`NotificationError`] is
//! what callers of
//! [`LocalizedNotificationCollection::add_notification`](crate::LocalizedNotificationCollection::add_notification)
//! observe. Unknown message keys and unparseable locale hints are not errors;
//! they degrade to the literal key and the default locale respectively.

use camino::Utf8PathBuf;
use fluent_bundle::FluentError;
use fluent_syntax::parser::ParserError;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Configuration problems detected before any request is served.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// No default locale was configured.
    #[error("a default locale must be configured")]
    MissingDefaultLocale,

    /// The supported locale list was empty.
    #[error("at least one supported locale must be configured")]
    EmptySupportedLocales,

    /// The default locale is absent from the supported locale list.
    #[error("default locale {default} is not one of the supported locales [{supported}]")]
    DefaultNotSupported {
        /// Configured default locale.
        default: LanguageIdentifier,
        /// Comma-separated rendering of the supported locales.
        supported: String,
    },

    /// A configured locale tag could not be parsed.
    #[error("failed to parse locale '{value}': {message}")]
    InvalidLocale {
        /// Raw configured value.
        value: String,
        /// Parser diagnostic.
        message: String,
    },

    /// A configuration file could not be read or parsed.
    #[error("failed to load configuration file {path}: {source}")]
    File {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying read or parse error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Gathering the configuration layers failed.
    #[error("failed to gather notification configuration: {0}")]
    Gathering(#[from] Box<figment::Error>),
}

/// Failures raised by message catalogues.
///
/// Construction failures (`Io`, `Parser`, `Registration`, `InvalidCatalogue`)
/// occur during setup. Formatting failures (`Format`, `MissingArgument`,
/// `UnrenderableArgument`, `MalformedTemplate`) occur when a notification is added and indicate a
/// mismatch between a template and the arguments supplied for it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// Reading a catalogue file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Fluent rejected the syntax of a resource.
    #[error("failed to parse Fluent resources for {locale}")]
    Parser {
        /// Locale the resource was registered under.
        locale: LanguageIdentifier,
        /// Parser errors reported by Fluent.
        errors: Vec<ParserError>,
    },

    /// Fluent refused to register a resource, typically over duplicate ids.
    #[error("failed to register Fluent resources for {locale}")]
    Registration {
        /// Locale the resource was registered under.
        locale: LanguageIdentifier,
        /// Registration errors reported by Fluent.
        errors: Vec<FluentError>,
    },

    /// A template catalogue document was structurally invalid.
    #[error("invalid template catalogue: {message}")]
    InvalidCatalogue {
        /// Explanation of the defect.
        message: String,
    },

    /// Fluent reported errors while formatting a message.
    #[error("failed to format message '{key}' for {locale}")]
    Format {
        /// Message key being formatted.
        key: String,
        /// Locale of the bundle that held the message.
        locale: LanguageIdentifier,
        /// Resolver errors reported by Fluent.
        errors: Vec<FluentError>,
    },

    /// A template referenced a positional argument that was not supplied.
    #[error("message '{key}' references argument {{{index}}} but only {provided} were supplied")]
    MissingArgument {
        /// Message key being formatted.
        key: String,
        /// Placeholder index found in the template.
        index: usize,
        /// Number of arguments supplied by the caller.
        provided: usize,
    },

    /// A positional argument has no plain-text rendering (a custom, absent or
    /// error Fluent value).
    #[error("message '{key}' cannot render argument {{{index}}} as text")]
    UnrenderableArgument {
        /// Message key being formatted.
        key: String,
        /// Placeholder index whose argument could not be rendered.
        index: usize,
    },

    /// A template contained an unterminated or non-numeric placeholder.
    #[error("message '{key}' has a malformed placeholder at byte {position}")]
    MalformedTemplate {
        /// Message key being formatted.
        key: String,
        /// Byte offset of the offending brace.
        position: usize,
    },
}

/// Errors surfaced when adding a notification.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NotificationError {
    /// Notification keys must contain visible characters.
    #[error("notification keys must not be empty")]
    EmptyKey,

    /// The catalogue failed to format the message.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests;
