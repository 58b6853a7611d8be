//! Notification values and the request-scoped collection that accumulates
//! them.
//!
//! A [`Notification`] is immutable once built. Its identity is a freshly
//! generated [`NotificationId`], never the key or text, so two notifications
//! with the same content remain distinct entries.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::LocalizedText;

mod clock;
mod collection;

pub use collection::{NotificationCollection, NotificationSnapshot};

/// Unique, creation-ordered notification identifier.
///
/// Backed by a UUIDv7, whose generator is monotonic within a process, so
/// comparing identifiers orders notifications by creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single, already-localised message produced during a unit of work.
///
/// Equality and hashing consider only [`Notification::id`].
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    id: NotificationId,
    key: String,
    text: String,
    created_at: DateTime<Utc>,
    resource_not_found: bool,
}

impl Notification {
    /// Builds a notification from a key and its final text.
    ///
    /// A new identifier and creation timestamp are assigned on every call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use localized_notifications::Notification;
    ///
    /// let first = Notification::new("Saved", "Changes saved.");
    /// let second = Notification::new("Saved", "Changes saved.");
    /// assert_ne!(first, second);
    /// assert!(first.id() < second.id());
    /// ```
    #[must_use]
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self::build(key.into(), text.into(), false)
    }

    pub(crate) fn from_localized(key: &str, localized: LocalizedText) -> Self {
        let resource_not_found = localized.resource_not_found();
        Self::build(key.to_owned(), localized.into_value(), resource_not_found)
    }

    fn build(key: String, text: String, resource_not_found: bool) -> Self {
        Self {
            id: NotificationId::generate(),
            key,
            text,
            created_at: clock::monotonic_now(),
            resource_not_found,
        }
    }

    /// Returns the unique identifier.
    #[must_use]
    pub const fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the message template key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the formatted, locale-specific text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reports whether [`Notification::text`] is the literal key because the
    /// catalogue had no entry for it.
    #[must_use]
    pub const fn resource_not_found(&self) -> bool {
        self.resource_not_found
    }
}

impl PartialEq for Notification {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Notification {}

impl Hash for Notification {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
