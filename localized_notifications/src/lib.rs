//! Request-scoped, localised notification collection.
//!
//! Business logic records user-facing outcomes ("user not found", "changes
//! saved") by message key and positional arguments. The crate negotiates the
//! locale for each request, formats every key through a pluggable
//! [`MessageCatalog`] and keeps the results in an append-only, ordered
//! collection that the caller reads back as an immutable snapshot.
//!
//! A process builds one [`NotificationService`] from a validated
//! [`CultureNegotiator`] (usually produced by [`NotificationOptions`]) and a
//! catalogue, then calls [`NotificationService::begin_request`] once per unit
//! of work.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use localized_notifications::{
//!     NotificationOptions, NotificationService, TemplateCatalog, langid, notification_args,
//! };
//!
//! let negotiator = NotificationOptions {
//!     default_locale: Some("pt-BR".into()),
//!     supported_locales: vec!["pt-BR".into(), "en-US".into()],
//! }
//! .validate()
//! .expect("options are valid");
//!
//! let catalog = TemplateCatalog::builder()
//!     .with_message(langid!("en-US"), "UserNotFound", "User '{0}' not found.")
//!     .with_message(langid!("pt-BR"), "UserNotFound", "Usuário '{0}' não encontrado.")
//!     .build();
//! let service = NotificationService::new(negotiator, Arc::new(catalog));
//!
//! let mut notifications = service.begin_request(Some("pt-BR"));
//! notifications
//!     .add_notification("UserNotFound", &notification_args!["john doe"])
//!     .expect("template takes one argument");
//!
//! let snapshot = notifications.into_snapshot();
//! assert_eq!(
//!     snapshot.first().map(|n| n.text()),
//!     Some("Usuário 'john doe' não encontrado.")
//! );
//! ```

mod catalog;
mod config;
mod culture;
mod error;
mod localized;
mod notification;
mod service;

pub use catalog::{
    FluentCatalog, FluentCatalogBuilder, FormattingIssue, FormattingIssueReporter,
    LocalizedText, MessageCatalog, MessageDomain, NoOpCatalog, TemplateCatalog,
    TemplateCatalogBuilder,
};
pub use config::{ENV_PREFIX, LocaleListEnv, NotificationOptions};
pub use culture::{CultureNegotiator, parse_locale_hint, resolve_culture};
pub use error::{CatalogError, ConfigError, NotificationError};
pub use fluent_bundle::FluentValue;
pub use localized::LocalizedNotificationCollection;
pub use notification::{Notification, NotificationCollection, NotificationId, NotificationSnapshot};
pub use service::NotificationService;
pub use unic_langid::{LanguageIdentifier, langid};
