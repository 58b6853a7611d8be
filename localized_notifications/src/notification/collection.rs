//! Append-only notification log and its immutable snapshots.

use std::slice;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use super::Notification;

/// Request-scoped accumulator of notifications.
///
/// Entries are kept in insertion order and never deduplicated, even when a
/// later entry repeats the key and text of an earlier one. There is no
/// removal operation. The collection is owned by a single unit of work and is
/// deliberately not `Clone`; hand out [`NotificationSnapshot`]s instead.
#[derive(Debug, Default)]
pub struct NotificationCollection {
    entries: Vec<Notification>,
}

impl NotificationCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a notification.
    pub fn add(&mut self, notification: Notification) {
        self.entries.push(notification);
    }

    /// Reports whether at least one notification has been added.
    #[must_use]
    pub const fn has_any(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Returns the number of notifications added so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copies the current entries into an immutable snapshot.
    ///
    /// Notifications added afterwards are not visible through the returned
    /// value.
    #[must_use]
    pub fn snapshot(&self) -> NotificationSnapshot {
        NotificationSnapshot {
            entries: Arc::from(self.entries.as_slice()),
        }
    }

    /// Consumes the collection, moving its entries into a snapshot.
    #[must_use]
    pub fn into_snapshot(self) -> NotificationSnapshot {
        NotificationSnapshot {
            entries: Arc::from(self.entries),
        }
    }
}

/// Point-in-time, insertion-ordered view of a [`NotificationCollection`].
///
/// Cloning shares the underlying entries.
#[derive(Debug, Clone, Default)]
pub struct NotificationSnapshot {
    entries: Arc<[Notification]>,
}

impl NotificationSnapshot {
    /// Returns the number of notifications captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the notifications in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Notification> {
        self.entries.iter()
    }

    /// Returns the notification at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Notification> {
        self.entries.get(index)
    }

    /// Returns the earliest notification, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Notification> {
        self.entries.first()
    }

    /// Iterates over the notifications created for `key`.
    pub fn by_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Notification> + 'a {
        self.entries.iter().filter(move |entry| entry.key() == key)
    }

    /// Returns the captured notifications as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Notification] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a NotificationSnapshot {
    type Item = &'a Notification;
    type IntoIter = slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for NotificationSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}
