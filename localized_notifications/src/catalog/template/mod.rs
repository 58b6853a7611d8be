//! Composite-format message catalogue.
//!
//! Templates use zero-based positional placeholders (`{0}`, `{1}`) and escape
//! literal braces by doubling them (`{{`, `}}`). Alignment and format
//! specifiers are not supported; a placeholder must contain only an index.
//! Strings and numbers render as Fluent would render them without isolation
//! marks. Any other Fluent value is rejected with
//! [`CatalogError::UnrenderableArgument`].
//!
//! Catalogues can be assembled in code or parsed from TOML, one table per
//! locale:
//!
//! ```toml
//! [en-US]
//! UserNotFound = "User '{0}' not found."
//!
//! [pt-BR]
//! UserNotFound = "Usuário '{0}' não encontrado."
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::str::FromStr;

use fluent_bundle::FluentValue;
use unic_langid::LanguageIdentifier;

use super::{MessageCatalog, candidate_locales};
use crate::error::CatalogError;

/// Catalogue of `{0}`-style templates keyed by locale.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    messages: HashMap<LanguageIdentifier, HashMap<String, String>>,
    fallback: Option<LanguageIdentifier>,
}

/// Builds a [`TemplateCatalog`].
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalogBuilder {
    catalog: TemplateCatalog,
}

impl TemplateCatalog {
    /// Starts building a catalogue in code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use localized_notifications::{FluentValue, MessageCatalog, TemplateCatalog, langid};
    ///
    /// let catalog = TemplateCatalog::builder()
    ///     .with_message(langid!("en-US"), "UserNotFound", "User '{0}' not found.")
    ///     .build();
    ///
    /// let text = catalog
    ///     .format(&langid!("en-US"), "UserNotFound", &[FluentValue::from("john doe")])
    ///     .expect("arguments match the template");
    /// assert_eq!(text.as_deref(), Some("User 'john doe' not found."));
    /// ```
    #[must_use]
    pub fn builder() -> TemplateCatalogBuilder {
        TemplateCatalogBuilder::default()
    }

    /// Parses a TOML document of per-locale tables.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidCatalogue`] when the document is not
    /// valid TOML, a table name is not a locale tag, or a template is not a
    /// string.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let document: toml::Table =
            toml::from_str(source).map_err(|err| CatalogError::InvalidCatalogue {
                message: err.to_string(),
            })?;

        let mut builder = Self::builder();
        for (tag, entries) in document {
            let locale = LanguageIdentifier::from_str(&tag).map_err(|err| {
                CatalogError::InvalidCatalogue {
                    message: format!("'{tag}' is not a locale tag: {err}"),
                }
            })?;
            let toml::Value::Table(table) = entries else {
                return Err(CatalogError::InvalidCatalogue {
                    message: format!("'{tag}' must be a table of templates"),
                });
            };
            for (key, value) in table {
                let toml::Value::String(template) = value else {
                    return Err(CatalogError::InvalidCatalogue {
                        message: format!("template '{tag}.{key}' must be a string"),
                    });
                };
                builder = builder.with_message(locale.clone(), key, template);
            }
        }
        Ok(builder.build())
    }

    /// Returns the raw template for `key` in exactly `locale`.
    #[must_use]
    pub fn template(&self, locale: &LanguageIdentifier, key: &str) -> Option<&str> {
        self.messages
            .get(locale)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }
}

impl TemplateCatalogBuilder {
    /// Registers `template` for `key` in `locale`, replacing any previous one.
    #[must_use]
    pub fn with_message(
        mut self,
        locale: LanguageIdentifier,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.catalog
            .messages
            .entry(locale)
            .or_default()
            .insert(key.into(), template.into());
        self
    }

    /// Consults `locale` when a key is missing from the requested locale and
    /// its language-only parent.
    #[must_use]
    pub fn with_fallback_locale(mut self, locale: LanguageIdentifier) -> Self {
        self.catalog.fallback = Some(locale);
        self
    }

    /// Finishes the catalogue.
    #[must_use]
    pub fn build(self) -> TemplateCatalog {
        self.catalog
    }
}

impl MessageCatalog for TemplateCatalog {
    fn format(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: &[FluentValue<'_>],
    ) -> Result<Option<String>, CatalogError> {
        candidate_locales(locale, self.fallback.as_ref())
            .iter()
            .find_map(|candidate| self.template(candidate, key))
            .map(|template| render(key, template, args))
            .transpose()
    }
}

/// Expands `{n}` placeholders in `template`.
fn render(key: &str, template: &str, args: &[FluentValue<'_>]) -> Result<String, CatalogError> {
    let malformed = |position: usize| CatalogError::MalformedTemplate {
        key: key.to_owned(),
        position,
    };

    let mut output = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();
    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    output.push('{');
                    continue;
                }
                let mut index_text = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    index_text.push(inner);
                }
                if !closed {
                    return Err(malformed(position));
                }
                let index: usize = index_text
                    .trim()
                    .parse()
                    .map_err(|_| malformed(position))?;
                let value = args.get(index).ok_or_else(|| CatalogError::MissingArgument {
                    key: key.to_owned(),
                    index,
                    provided: args.len(),
                })?;
                let text = render_value(value).ok_or_else(|| {
                    CatalogError::UnrenderableArgument {
                        key: key.to_owned(),
                        index,
                    }
                })?;
                output.push_str(&text);
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_none() {
                    return Err(malformed(position));
                }
                output.push('}');
            }
            other => output.push(other),
        }
    }
    Ok(output)
}

fn render_value<'a>(value: &'a FluentValue<'_>) -> Option<Cow<'a, str>> {
    match value {
        FluentValue::String(text) => Some(Cow::Borrowed(text.as_ref())),
        FluentValue::Number(number) => Some(number.as_string()),
        FluentValue::Custom(_) | FluentValue::None | FluentValue::Error => None,
    }
}
