//! Message catalogues: the key-to-localised-template lookup used when a
//! notification is added.
//!
//! The notification core depends only on the [`MessageCatalog`] trait, so
//! applications can plug in any translation backend. Two implementations ship
//! with the crate: [`FluentCatalog`], backed by Project Fluent resources, and
//! [`TemplateCatalog`], which understands `{0}`-style positional templates.
//!
//! Catalogues walk a short locale chain before giving up on a key: the
//! requested locale, its language-only parent (`en-GB` to `en`) and finally an
//! optional catalogue-wide fallback locale.

use fluent_bundle::FluentValue;
use unic_langid::LanguageIdentifier;

use crate::error::CatalogError;

mod fluent;
mod template;

pub use fluent::{FluentCatalog, FluentCatalogBuilder, FormattingIssue, FormattingIssueReporter};
pub use template::{TemplateCatalog, TemplateCatalogBuilder};

/// Names a grouping of messages, such as all resources shared by an API.
///
/// Catalogues loaded with [`FluentCatalog::load_domain`] read one file per
/// locale named after [`MessageDomain::NAME`].
///
/// ```rust
/// use localized_notifications::MessageDomain;
///
/// struct SharedResource;
///
/// impl MessageDomain for SharedResource {
///     const NAME: &'static str = "shared";
/// }
/// ```
pub trait MessageDomain {
    /// File stem used for this domain's resources.
    const NAME: &'static str;
}

/// Result of localising a key: the text plus whether the catalogue knew it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    value: String,
    resource_not_found: bool,
}

impl LocalizedText {
    /// Wraps text produced by a catalogue.
    #[must_use]
    pub const fn found(value: String) -> Self {
        Self {
            value,
            resource_not_found: false,
        }
    }

    /// Builds the literal-key fallback used when no translation exists.
    #[must_use]
    pub fn not_found(key: &str) -> Self {
        Self {
            value: key.to_owned(),
            resource_not_found: true,
        }
    }

    /// Returns the resolved text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the wrapper, returning the text.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }

    /// Reports whether the text is the literal-key fallback.
    #[must_use]
    pub const fn resource_not_found(&self) -> bool {
        self.resource_not_found
    }
}

/// Formats localised messages for a locale, key and positional arguments.
///
/// Implementations must be cheap to call and free of blocking I/O: lookups
/// happen on the request path. The trait is object-safe so services can hold
/// catalogues behind `Arc<dyn MessageCatalog>`.
pub trait MessageCatalog: Send + Sync {
    /// Formats `key` for `locale` using positional `args`.
    ///
    /// Returns `Ok(None)` when the key is unknown in every candidate locale.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the template exists but cannot be
    /// formatted with the supplied arguments.
    fn format(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: &[FluentValue<'_>],
    ) -> Result<Option<String>, CatalogError>;

    /// Formats `key`, falling back to the key itself when it is unknown.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use localized_notifications::{MessageCatalog, NoOpCatalog, langid};
    ///
    /// let localized = NoOpCatalog::new()
    ///     .localize(&langid!("en-US"), "DoesNotExist", &[])
    ///     .expect("the no-op catalogue never fails");
    /// assert_eq!(localized.value(), "DoesNotExist");
    /// assert!(localized.resource_not_found());
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates formatting failures from [`MessageCatalog::format`].
    fn localize(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: &[FluentValue<'_>],
    ) -> Result<LocalizedText, CatalogError> {
        Ok(self
            .format(locale, key, args)?
            .map_or_else(|| LocalizedText::not_found(key), LocalizedText::found))
    }
}

/// Catalogue that knows no messages; every key falls back to itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpCatalog;

impl NoOpCatalog {
    /// Creates a new instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MessageCatalog for NoOpCatalog {
    fn format(
        &self,
        _locale: &LanguageIdentifier,
        _key: &str,
        _args: &[FluentValue<'_>],
    ) -> Result<Option<String>, CatalogError> {
        Ok(None)
    }
}

/// Builds a positional argument list for
/// [`LocalizedNotificationCollection::add_notification`](crate::LocalizedNotificationCollection::add_notification).
///
/// Each value is converted with `FluentValue::from`, so strings, string
/// slices and numbers can be mixed freely.
///
/// ```rust
/// use localized_notifications::{FluentValue, notification_args};
///
/// let args = notification_args!["john doe", 3];
/// assert_eq!(args.len(), 2);
/// assert_eq!(args.first(), Some(&FluentValue::from("john doe")));
///
/// let none = notification_args![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! notification_args {
    () => {
        ::std::vec::Vec::<$crate::FluentValue<'static>>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::FluentValue::from($value)),+]
    };
}

/// Locales to consult, most specific first, when looking up a message.
pub(crate) fn candidate_locales(
    locale: &LanguageIdentifier,
    fallback: Option<&LanguageIdentifier>,
) -> Vec<LanguageIdentifier> {
    let mut chain = vec![locale.clone()];
    let parent = LanguageIdentifier::from_parts(locale.language, None, None, &[]);
    if !chain.contains(&parent) {
        chain.push(parent);
    }
    if let Some(fallback_locale) = fallback
        && !chain.contains(fallback_locale)
    {
        chain.push(fallback_locale.clone());
    }
    chain
}

#[cfg(test)]
mod tests;
