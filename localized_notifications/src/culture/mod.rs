//! Request culture negotiation.
//!
//! Selecting the active locale for a request is a pure function of the
//! configured default, the ordered list of supported locales and an optional
//! hint extracted by the transport layer (a header, query parameter or
//! cookie). [`resolve_culture`] implements the policy; [`CultureNegotiator`]
//! packages a validated configuration so the per-request call cannot fail.
//!
//! The policy, in order:
//!
//! 1. A hint that names a supported locale exactly (case-insensitively) wins.
//! 2. Otherwise the first supported locale, in declaration order, that shares
//!    the hint's language subtag wins (`en-GB` selects `en-US`).
//! 3. Otherwise the configured default is used.
//!
//! Malformed hints never fail a request; they are treated as absent.

use std::str::FromStr;

use unic_langid::LanguageIdentifier;

use crate::error::ConfigError;

/// Selects the locale for a request.
///
/// `supported` is expected to contain `default`; [`CultureNegotiator::new`]
/// enforces that precondition for callers that want it checked.
///
/// # Examples
///
/// ```rust
/// use localized_notifications::{langid, resolve_culture};
///
/// let supported = [langid!("pt-BR"), langid!("en-US")];
/// let default = langid!("pt-BR");
///
/// let hint = langid!("en-GB");
/// assert_eq!(resolve_culture(&default, &supported, Some(&hint)), &langid!("en-US"));
///
/// let hint = langid!("fr-FR");
/// assert_eq!(resolve_culture(&default, &supported, Some(&hint)), &default);
/// ```
#[must_use]
pub fn resolve_culture<'a>(
    default: &'a LanguageIdentifier,
    supported: &'a [LanguageIdentifier],
    hint: Option<&LanguageIdentifier>,
) -> &'a LanguageIdentifier {
    let Some(requested) = hint else {
        return default;
    };

    if let Some(exact) = supported.iter().find(|candidate| *candidate == requested) {
        return exact;
    }

    supported
        .iter()
        .find(|candidate| candidate.language == requested.language)
        .unwrap_or(default)
}

/// Parses a raw locale hint, returning `None` when it is blank or malformed.
///
/// Surrounding whitespace is ignored and `_` is accepted as a subtag
/// separator, so `" pt_br "` parses as `pt-BR`. Casing is canonicalised by
/// `unic-langid`, which is what makes hint matching case-insensitive.
///
/// Extension and private-use sequences are dropped: everything from the
/// first single-character subtag on is ignored, so `en-US-u-ca-gregory`
/// parses as `en-US`.
#[must_use]
pub fn parse_locale_hint(raw: &str) -> Option<LanguageIdentifier> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let identifier = trimmed
        .split(['-', '_'])
        .take_while(|subtag| subtag.len() != 1)
        .collect::<Vec<_>>()
        .join("-");
    if identifier.is_empty() {
        tracing::debug!(hint = %trimmed, "ignoring locale hint without a language subtag");
        return None;
    }
    match LanguageIdentifier::from_str(&identifier) {
        Ok(locale) => Some(locale),
        Err(err) => {
            tracing::debug!(hint = %trimmed, error = %err, "ignoring malformed locale hint");
            None
        }
    }
}

/// Validated negotiation settings: a default locale and the ordered set of
/// supported locales that contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CultureNegotiator {
    default: LanguageIdentifier,
    supported: Vec<LanguageIdentifier>,
}

impl CultureNegotiator {
    /// Validates the configuration and builds a negotiator.
    ///
    /// Duplicate supported locales are collapsed, keeping the first
    /// declaration so that primary-language tie-breaks follow configuration
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySupportedLocales`] when `supported` yields
    /// nothing and [`ConfigError::DefaultNotSupported`] when `default` is not
    /// among the supported locales.
    pub fn new(
        default: LanguageIdentifier,
        supported: impl IntoIterator<Item = LanguageIdentifier>,
    ) -> Result<Self, ConfigError> {
        let mut ordered: Vec<LanguageIdentifier> = Vec::new();
        for locale in supported {
            if !ordered.contains(&locale) {
                ordered.push(locale);
            }
        }

        if ordered.is_empty() {
            return Err(ConfigError::EmptySupportedLocales);
        }
        if !ordered.contains(&default) {
            return Err(ConfigError::DefaultNotSupported {
                default,
                supported: render_locales(&ordered),
            });
        }

        Ok(Self {
            default,
            supported: ordered,
        })
    }

    /// Returns the configured default locale.
    #[must_use]
    pub const fn default_locale(&self) -> &LanguageIdentifier {
        &self.default
    }

    /// Returns the supported locales in declaration order.
    #[must_use]
    pub fn supported_locales(&self) -> &[LanguageIdentifier] {
        &self.supported
    }

    /// Resolves the locale for an already-parsed hint.
    #[must_use]
    pub fn resolve(&self, hint: Option<&LanguageIdentifier>) -> &LanguageIdentifier {
        resolve_culture(&self.default, &self.supported, hint)
    }

    /// Resolves the locale for a raw hint string as extracted from a request.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use localized_notifications::{CultureNegotiator, langid};
    ///
    /// let negotiator = CultureNegotiator::new(
    ///     langid!("pt-BR"),
    ///     [langid!("pt-BR"), langid!("en-US")],
    /// )
    /// .expect("default is supported");
    ///
    /// assert_eq!(negotiator.resolve_hint(Some("EN-us")), &langid!("en-US"));
    /// assert_eq!(negotiator.resolve_hint(Some("not a locale")), &langid!("pt-BR"));
    /// assert_eq!(negotiator.resolve_hint(None), &langid!("pt-BR"));
    /// ```
    #[must_use]
    pub fn resolve_hint(&self, raw: Option<&str>) -> &LanguageIdentifier {
        let parsed = raw.and_then(parse_locale_hint);
        self.resolve(parsed.as_ref())
    }
}

fn render_locales(locales: &[LanguageIdentifier]) -> String {
    locales
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
