//! Process-wide setup shared by every request.
//!
//! A [`NotificationService`] is built once at startup from validated
//! settings and a catalogue. Each unit of work then calls
//! [`NotificationService::begin_request`] to obtain its own
//! [`LocalizedNotificationCollection`]; nothing is shared between requests
//! apart from the immutable catalogue.

use std::fmt;
use std::sync::Arc;

use camino::Utf8Path;

use crate::catalog::{FluentCatalog, MessageCatalog, MessageDomain};
use crate::culture::CultureNegotiator;
use crate::error::CatalogError;
use crate::localized::LocalizedNotificationCollection;

/// Builds request-scoped notification collections.
///
/// Cloning is cheap; the catalogue is shared.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use localized_notifications::{
///     CultureNegotiator, NotificationService, TemplateCatalog, langid, notification_args,
/// };
///
/// let negotiator = CultureNegotiator::new(
///     langid!("pt-BR"),
///     [langid!("pt-BR"), langid!("en-US")],
/// )
/// .expect("default is supported");
/// let catalog = TemplateCatalog::builder()
///     .with_message(langid!("en-US"), "UserNotFound", "User '{0}' not found.")
///     .build();
/// let service = NotificationService::new(negotiator, Arc::new(catalog));
///
/// let mut notifications = service.begin_request(Some("en-GB"));
/// assert_eq!(notifications.locale(), &langid!("en-US"));
/// notifications
///     .add_notification("UserNotFound", &notification_args!["john doe"])
///     .expect("template takes one argument");
/// assert!(notifications.has_any());
/// ```
#[derive(Clone)]
pub struct NotificationService {
    negotiator: CultureNegotiator,
    catalog: Arc<dyn MessageCatalog>,
}

impl NotificationService {
    /// Combines validated settings with a shared catalogue.
    #[must_use]
    pub const fn new(negotiator: CultureNegotiator, catalog: Arc<dyn MessageCatalog>) -> Self {
        Self {
            negotiator,
            catalog,
        }
    }

    /// Loads the Fluent resources of domain `D` for every supported locale
    /// from `<root>/<locale>/<D::NAME>.ftl`.
    ///
    /// Keys missing from a locale fall back to the default locale's
    /// resources before falling back to the key itself.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the directory cannot be read or a
    /// resource is invalid.
    pub fn for_domain<D: MessageDomain>(
        negotiator: CultureNegotiator,
        root: &Utf8Path,
    ) -> Result<Self, CatalogError> {
        let catalog = FluentCatalog::builder()
            .with_domain_dir(root, D::NAME, negotiator.supported_locales())?
            .with_fallback_locale(negotiator.default_locale().clone())
            .try_build()?;
        tracing::debug!(
            domain = D::NAME,
            %root,
            locales = ?catalog.locales(),
            "loaded notification catalogue"
        );
        Ok(Self::new(negotiator, Arc::new(catalog)))
    }

    /// Negotiates the locale for `hint` and starts an empty collection bound
    /// to it.
    #[must_use]
    pub fn begin_request(&self, hint: Option<&str>) -> LocalizedNotificationCollection {
        let locale = self.negotiator.resolve_hint(hint);
        tracing::debug!(?hint, %locale, "negotiated request locale");
        LocalizedNotificationCollection::new(locale.clone(), Arc::clone(&self.catalog))
    }

    /// Returns the negotiation settings.
    #[must_use]
    pub const fn negotiator(&self) -> &CultureNegotiator {
        &self.negotiator
    }

    /// Returns the shared catalogue.
    #[must_use]
    pub const fn catalog(&self) -> &Arc<dyn MessageCatalog> {
        &self.catalog
    }
}

impl fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationService")
            .field("negotiator", &self.negotiator)
            .finish_non_exhaustive()
    }
}
