//! Loading and validating the localisation configuration.
//!
//! [`NotificationOptions`] is the raw, deserialisable surface. It is gathered
//! with `figment` from built-in defaults, an optional TOML file and
//! `NOTIFICATIONS_`-prefixed environment variables (later layers win), then
//! validated into a [`CultureNegotiator`]:
//!
//! ```toml
//! default_locale = "pt-BR"
//! supported_locales = ["pt-BR", "en-US"]
//! ```
//!
//! ```text
//! NOTIFICATIONS_DEFAULT_LOCALE=en-US
//! NOTIFICATIONS_SUPPORTED_LOCALES=pt-BR,en-US
//! ```

use std::str::FromStr;

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::culture::CultureNegotiator;
use crate::error::ConfigError;

mod env;

pub use env::LocaleListEnv;

/// Prefix shared by every configuration environment variable.
pub const ENV_PREFIX: &str = "NOTIFICATIONS_";

/// Raw localisation options as written in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationOptions {
    /// Locale used when a request carries no usable hint.
    pub default_locale: Option<String>,
    /// Locales a request may select, in priority order.
    pub supported_locales: Vec<String>,
}

impl NotificationOptions {
    /// Builds the layered figment without extracting it.
    ///
    /// Useful for callers that want to merge further providers (command-line
    /// overrides, for example) before extraction.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::File`] when `path` cannot be read or is not
    /// valid TOML.
    pub fn figment(path: Option<&Utf8Path>) -> Result<Figment, ConfigError> {
        let defaults = Figment::from(Serialized::defaults(Self::default()));
        let layered = match path {
            Some(file) => defaults.merge(Toml::string(&read_toml(file)?)),
            None => defaults,
        };
        Ok(layered.merge(LocaleListEnv::prefixed(ENV_PREFIX).list_key("supported_locales")))
    }

    /// Loads options from defaults, the optional TOML file at `path` and the
    /// environment.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use camino::Utf8Path;
    /// use localized_notifications::NotificationOptions;
    ///
    /// let negotiator = NotificationOptions::load(Some(Utf8Path::new("notifications.toml")))
    ///     .and_then(|options| options.validate())
    ///     .expect("configuration should be valid");
    /// let _ = negotiator;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::File`] for unreadable or malformed files and
    /// [`ConfigError::Gathering`] when the merged layers do not deserialize.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        Self::figment(path)?
            .extract()
            .map_err(|err| ConfigError::Gathering(Box::new(err)))
    }

    /// Validates the options, producing the negotiator used per request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDefaultLocale`] when no default is set,
    /// [`ConfigError::InvalidLocale`] for tags that do not parse, and the
    /// errors of [`CultureNegotiator::new`] for an empty list or a default
    /// outside it.
    pub fn validate(&self) -> Result<CultureNegotiator, ConfigError> {
        let default_raw = self
            .default_locale
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or(ConfigError::MissingDefaultLocale)?;
        let default = parse_locale(default_raw)?;
        let supported = self
            .supported_locales
            .iter()
            .map(|raw| parse_locale(raw))
            .collect::<Result<Vec<_>, _>>()?;
        CultureNegotiator::new(default, supported)
    }
}

fn parse_locale(raw: &str) -> Result<LanguageIdentifier, ConfigError> {
    LanguageIdentifier::from_str(raw.trim()).map_err(|err| ConfigError::InvalidLocale {
        value: raw.to_owned(),
        message: err.to_string(),
    })
}

fn read_toml(path: &Utf8Path) -> Result<String, ConfigError> {
    let file_error = |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::File {
        path: path.to_owned(),
        source,
    };
    let data = std::fs::read_to_string(path).map_err(|err| file_error(err.into()))?;
    // Validate first so syntax errors carry the file path.
    toml::from_str::<toml::Table>(&data).map_err(|err| file_error(err.into()))?;
    Ok(data)
}

#[cfg(test)]
mod tests;
