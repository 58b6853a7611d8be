//! Fluent-backed message catalogue.
//!
//! One concurrent bundle is kept per locale. Positional notification
//! arguments are exposed to Fluent as the variables `$arg0`, `$arg1`, and so
//! on, so a resource reads:
//!
//! ```ftl
//! UserNotFound = User '{ $arg0 }' not found.
//! ```
//!
//! Unicode bidi isolation marks are disabled by default because notification
//! text is usually embedded in plain-text payloads; opt back in with
//! [`FluentCatalogBuilder::with_isolating`].

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentError, FluentResource, FluentValue};
use unic_langid::LanguageIdentifier;

use super::{MessageCatalog, MessageDomain, candidate_locales};
use crate::error::CatalogError;

mod ids;

use ids::{fluent_id, rewrite_dotted_ids};

/// Captures a formatting failure raised by Fluent.
#[derive(Debug, Clone)]
pub struct FormattingIssue {
    /// Key that failed to format.
    pub key: String,
    /// Locale of the bundle holding the message.
    pub locale: LanguageIdentifier,
    /// Resolver errors emitted by Fluent.
    pub errors: Vec<FluentError>,
}

/// Hook invoked whenever Fluent reports formatting errors.
pub type FormattingIssueReporter = Arc<dyn Fn(&FormattingIssue) + Send + Sync>;

/// Catalogue backed by Fluent bundles, one per locale.
pub struct FluentCatalog {
    bundles: HashMap<LanguageIdentifier, FluentBundle<Arc<FluentResource>>>,
    fallback: Option<LanguageIdentifier>,
    report_issue: FormattingIssueReporter,
}

/// Builds a [`FluentCatalog`].
pub struct FluentCatalogBuilder {
    resources: Vec<(LanguageIdentifier, String)>,
    fallback: Option<LanguageIdentifier>,
    use_isolating: bool,
    report_issue: FormattingIssueReporter,
}

impl FluentCatalog {
    /// Starts building a catalogue from in-memory resources.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use localized_notifications::{FluentCatalog, FluentValue, MessageCatalog, langid};
    ///
    /// let catalog = FluentCatalog::builder()
    ///     .with_resource(langid!("en-US"), "UserNotFound = User '{ $arg0 }' not found.")
    ///     .try_build()
    ///     .expect("resource should parse");
    ///
    /// let text = catalog
    ///     .format(&langid!("en-US"), "UserNotFound", &[FluentValue::from("john doe")])
    ///     .expect("arguments match the template");
    /// assert_eq!(text.as_deref(), Some("User 'john doe' not found."));
    /// ```
    #[must_use]
    pub fn builder() -> FluentCatalogBuilder {
        FluentCatalogBuilder::new()
    }

    /// Loads the resources of domain `D` for each of `locales` from
    /// `<root>/<locale>/<D::NAME>.ftl`.
    ///
    /// # Errors
    ///
    /// See [`FluentCatalog::load_dir`].
    pub fn load_domain<D: MessageDomain>(
        root: &Utf8Path,
        locales: &[LanguageIdentifier],
    ) -> Result<Self, CatalogError> {
        Self::load_dir(root, D::NAME, locales)
    }

    /// Loads `<root>/<locale>/<domain>.ftl` for each of `locales`.
    ///
    /// Locales without a file are skipped; lookups for them fall through the
    /// locale chain and, ultimately, to the literal key.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] when `root` cannot be opened or a file
    /// cannot be read, and parser or registration errors for invalid
    /// resources.
    pub fn load_dir(
        root: &Utf8Path,
        domain: &str,
        locales: &[LanguageIdentifier],
    ) -> Result<Self, CatalogError> {
        Self::builder()
            .with_domain_dir(root, domain, locales)?
            .try_build()
    }

    /// Lists the locales that have a bundle.
    #[must_use]
    pub fn locales(&self) -> Vec<&LanguageIdentifier> {
        self.bundles.keys().collect()
    }
}

impl MessageCatalog for FluentCatalog {
    fn format(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: &[FluentValue<'_>],
    ) -> Result<Option<String>, CatalogError> {
        let fluent_args = positional_args(args);
        let bundle_key = fluent_id(key);
        let lookup_ids = [key, bundle_key.as_ref()];

        for candidate in candidate_locales(locale, self.fallback.as_ref()) {
            let Some(bundle) = self.bundles.get(&candidate) else {
                continue;
            };
            let Some(pattern) = lookup_ids.iter().find_map(|lookup_id| {
                bundle
                    .get_message(lookup_id)
                    .and_then(|message| message.value())
            }) else {
                continue;
            };

            let mut errors = Vec::new();
            let rendered = bundle.format_pattern(pattern, fluent_args.as_ref(), &mut errors);
            if errors.is_empty() {
                return Ok(Some(rendered.into_owned()));
            }

            let issue = FormattingIssue {
                key: key.to_owned(),
                locale: candidate,
                errors,
            };
            (self.report_issue)(&issue);
            return Err(CatalogError::Format {
                key: issue.key,
                locale: issue.locale,
                errors: issue.errors,
            });
        }

        Ok(None)
    }
}

impl fmt::Debug for FluentCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluentCatalog")
            .field("locales", &self.bundles.keys().collect::<Vec<_>>())
            .field("fallback", &self.fallback)
            .field("report_issue", &"<reporter>")
            .finish()
    }
}

impl Default for FluentCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FluentCatalogBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resources: Vec::new(),
            fallback: None,
            use_isolating: false,
            report_issue: default_reporter(),
        }
    }

    /// Adds Fluent source text for `locale`. May be called repeatedly.
    #[must_use]
    pub fn with_resource(mut self, locale: LanguageIdentifier, source: impl Into<String>) -> Self {
        self.resources.push((locale, source.into()));
        self
    }

    /// Reads `<root>/<locale>/<domain>.ftl` for each locale.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] when `root` cannot be opened or an
    /// existing file cannot be read.
    pub fn with_domain_dir(
        mut self,
        root: &Utf8Path,
        domain: &str,
        locales: &[LanguageIdentifier],
    ) -> Result<Self, CatalogError> {
        let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(|source| {
            CatalogError::Io {
                path: root.to_owned(),
                source,
            }
        })?;

        for locale in locales {
            let relative = Utf8PathBuf::from(locale.to_string()).join(format!("{domain}.ftl"));
            match dir.read_to_string(&relative) {
                Ok(source) => self.resources.push((locale.clone(), source)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(
                        path = %root.join(&relative),
                        %locale,
                        "no catalogue file for locale; lookups will fall back"
                    );
                }
                Err(source) => {
                    return Err(CatalogError::Io {
                        path: root.join(&relative),
                        source,
                    });
                }
            }
        }
        Ok(self)
    }

    /// Consults `locale` when a key is missing from the requested locale and
    /// its language-only parent.
    #[must_use]
    pub fn with_fallback_locale(mut self, locale: LanguageIdentifier) -> Self {
        self.fallback = Some(locale);
        self
    }

    /// Toggles Unicode bidi isolation marks around placeables.
    #[must_use]
    pub const fn with_isolating(mut self, use_isolating: bool) -> Self {
        self.use_isolating = use_isolating;
        self
    }

    /// Installs a hook to report formatting issues surfaced by Fluent.
    #[must_use]
    pub fn with_error_reporter(mut self, reporter: FormattingIssueReporter) -> Self {
        self.report_issue = reporter;
        self
    }

    /// Parses and registers every resource.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parser`] for invalid Fluent syntax and
    /// [`CatalogError::Registration`] when a locale defines a message twice.
    pub fn try_build(self) -> Result<FluentCatalog, CatalogError> {
        let mut bundles: HashMap<LanguageIdentifier, FluentBundle<Arc<FluentResource>>> =
            HashMap::new();

        for (locale, source) in self.resources {
            let parsed = FluentResource::try_new(rewrite_dotted_ids(&source)).map_err(
                |(_resource, errors)| CatalogError::Parser {
                    locale: locale.clone(),
                    errors,
                },
            )?;

            let bundle = bundles.entry(locale.clone()).or_insert_with(|| {
                let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
                bundle.set_use_isolating(self.use_isolating);
                bundle
            });
            bundle
                .add_resource(Arc::new(parsed))
                .map_err(|errors| CatalogError::Registration {
                    locale: locale.clone(),
                    errors,
                })?;
        }

        Ok(FluentCatalog {
            bundles,
            fallback: self.fallback,
            report_issue: self.report_issue,
        })
    }
}

impl fmt::Debug for FluentCatalogBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluentCatalogBuilder")
            .field("resources_len", &self.resources.len())
            .field("fallback", &self.fallback)
            .field("use_isolating", &self.use_isolating)
            .field("report_issue", &"<reporter>")
            .finish()
    }
}

fn default_reporter() -> FormattingIssueReporter {
    Arc::new(|issue: &FormattingIssue| {
        tracing::warn!(
            key = %issue.key,
            locale = %issue.locale,
            errors = ?issue.errors,
            "failed to format Fluent message"
        );
    })
}

fn positional_args<'a>(args: &[FluentValue<'a>]) -> Option<FluentArgs<'a>> {
    if args.is_empty() {
        return None;
    }
    let mut fluent_args = FluentArgs::with_capacity(args.len());
    for (index, value) in args.iter().enumerate() {
        fluent_args.set(format!("arg{index}"), value.clone());
    }
    Some(fluent_args)
}
