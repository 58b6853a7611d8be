//! The per-request entry point used by business logic.

use std::fmt;
use std::sync::Arc;

use fluent_bundle::FluentValue;
use unic_langid::LanguageIdentifier;

use crate::catalog::MessageCatalog;
use crate::error::NotificationError;
use crate::notification::{Notification, NotificationCollection, NotificationSnapshot};

/// Notification collection bound to one request's negotiated locale.
///
/// Each call to [`add_notification`](Self::add_notification) formats the key
/// through the catalogue in the bound locale and appends the result. Keys the
/// catalogue does not know are recorded with the key itself as text, so a
/// missing translation never loses a notification.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use localized_notifications::{
///     LocalizedNotificationCollection, TemplateCatalog, langid, notification_args,
/// };
///
/// let catalog = TemplateCatalog::builder()
///     .with_message(langid!("pt-BR"), "UserNotFound", "Usuário '{0}' não encontrado.")
///     .build();
/// let mut notifications = LocalizedNotificationCollection::new(langid!("pt-BR"), Arc::new(catalog));
///
/// notifications
///     .add_notification("UserNotFound", &notification_args!["john doe"])
///     .expect("template takes one argument");
///
/// let snapshot = notifications.snapshot();
/// assert_eq!(
///     snapshot.first().map(|n| n.text()),
///     Some("Usuário 'john doe' não encontrado.")
/// );
/// ```
pub struct LocalizedNotificationCollection {
    locale: LanguageIdentifier,
    catalog: Arc<dyn MessageCatalog>,
    notifications: NotificationCollection,
}

impl LocalizedNotificationCollection {
    /// Creates an empty collection bound to `locale`.
    #[must_use]
    pub const fn new(locale: LanguageIdentifier, catalog: Arc<dyn MessageCatalog>) -> Self {
        Self {
            locale,
            catalog,
            notifications: NotificationCollection::new(),
        }
    }

    /// Returns the locale every notification is formatted in.
    #[must_use]
    pub const fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Formats `key` with positional `args` and appends the notification.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::EmptyKey`] for blank keys and
    /// [`NotificationError::Catalog`] when the template cannot be formatted
    /// with `args`. The collection is unchanged on error.
    pub fn add_notification(
        &mut self,
        key: &str,
        args: &[FluentValue<'_>],
    ) -> Result<(), NotificationError> {
        if key.trim().is_empty() {
            return Err(NotificationError::EmptyKey);
        }

        let localized = self.catalog.localize(&self.locale, key, args)?;
        if localized.resource_not_found() {
            tracing::warn!(
                key,
                locale = %self.locale,
                "no localized message found; using the key as notification text"
            );
        }
        self.notifications
            .add(Notification::from_localized(key, localized));
        Ok(())
    }

    /// Appends an already-built notification without consulting the
    /// catalogue.
    pub fn add(&mut self, notification: Notification) {
        self.notifications.add(notification);
    }

    /// Reports whether at least one notification has been added.
    #[must_use]
    pub const fn has_any(&self) -> bool {
        self.notifications.has_any()
    }

    /// Returns the number of notifications added so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Reports whether the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Copies the current entries into an immutable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> NotificationSnapshot {
        self.notifications.snapshot()
    }

    /// Ends the unit of work, returning everything that was added.
    #[must_use]
    pub fn into_snapshot(self) -> NotificationSnapshot {
        self.notifications.into_snapshot()
    }
}

impl fmt::Debug for LocalizedNotificationCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizedNotificationCollection")
            .field("locale", &format_args!("{}", self.locale))
            .field("notifications", &self.notifications)
            .finish_non_exhaustive()
    }
}
