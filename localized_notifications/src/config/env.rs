//! Environment provider that understands locale lists.
//!
//! Wraps `figment::providers::Env` so that list-valued keys such as
//! `NOTIFICATIONS_SUPPORTED_LOCALES=pt-BR,en-US` deserialize as `Vec<String>`.
//! Unlike a general CSV provider, a registered list key is always emitted as
//! an array, so a single locale (`en-US`) is a one-element list rather than a
//! scalar. Values starting with `[` are parsed as figment arrays instead.

use figment::providers::Env;
use figment::{
    Metadata, Profile, Provider,
    error::Error,
    util::nest,
    value::{Dict, Map, Value},
};
use uncased::UncasedStr;

/// Environment provider that splits registered list keys on commas.
#[derive(Clone)]
pub struct LocaleListEnv {
    inner: Env,
    list_keys: Vec<&'static str>,
}

impl LocaleListEnv {
    /// Creates a provider reading variables that start with `prefix`.
    ///
    /// The prefix is stripped and keys are lowercased, so
    /// `NOTIFICATIONS_DEFAULT_LOCALE` maps to `default_locale`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use localized_notifications::LocaleListEnv;
    ///
    /// let env = LocaleListEnv::prefixed("NOTIFICATIONS_").list_key("supported_locales");
    /// let _ = env;
    /// ```
    #[must_use]
    pub fn prefixed(prefix: &str) -> Self {
        Self {
            inner: Env::prefixed(prefix),
            list_keys: Vec::new(),
        }
    }

    /// Marks `key` (after prefix stripping) as list-valued.
    #[must_use]
    pub fn list_key(mut self, key: &'static str) -> Self {
        self.list_keys.push(key);
        self
    }

    fn is_list_key(&self, key: &UncasedStr) -> bool {
        self.list_keys
            .iter()
            .any(|list_key| key == UncasedStr::new(list_key))
    }

    fn parse_list(raw: &str) -> Value {
        let trimmed = raw.trim();
        if trimmed.starts_with('[')
            && let Ok(value) = trimmed.parse::<Value>()
        {
            return value;
        }
        trimmed
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| Value::from(item.to_owned()))
            .collect::<Vec<_>>()
            .into()
    }

    fn parse_scalar(raw: &str) -> Value {
        Value::from(raw.trim().to_owned())
    }
}

impl Provider for LocaleListEnv {
    fn metadata(&self) -> Metadata {
        self.inner.metadata()
    }

    fn profile(&self) -> Option<Profile> {
        Some(self.inner.profile.clone())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();
        for (key, raw) in self.inner.iter() {
            let value = if self.is_list_key(&key) {
                Self::parse_list(&raw)
            } else {
                Self::parse_scalar(&raw)
            };
            let Some(nested) = nest(key.as_str(), value).into_dict() else {
                return Err(Error::from(format!(
                    "environment key `{key}` produced a non-object value"
                )));
            };
            dict.extend(nested);
        }
        Ok(self.inner.profile.collect(dict))
    }
}
