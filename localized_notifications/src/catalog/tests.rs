//! Tests for the catalogue abstractions shared by every backend.

use rstest::rstest;
use unic_langid::langid;

use super::*;

struct FixedCatalog;

impl MessageCatalog for FixedCatalog {
    fn format(
        &self,
        _locale: &LanguageIdentifier,
        key: &str,
        args: &[FluentValue<'_>],
    ) -> Result<Option<String>, CatalogError> {
        match key {
            "Known" => Ok(Some(format!("known with {} args", args.len()))),
            "Broken" => Err(CatalogError::MissingArgument {
                key: key.to_owned(),
                index: 0,
                provided: args.len(),
            }),
            _ => Ok(None),
        }
    }
}

#[rstest]
fn localize_marks_found_text() {
    let localized = FixedCatalog
        .localize(&langid!("en-US"), "Known", &notification_args!["a", 1])
        .expect("known keys format");
    assert_eq!(localized, LocalizedText::found(String::from("known with 2 args")));
    assert!(!localized.resource_not_found());
}

#[rstest]
#[case(&FixedCatalog as &dyn MessageCatalog)]
#[case(&NoOpCatalog as &dyn MessageCatalog)]
fn localize_falls_back_to_the_key(#[case] catalog: &dyn MessageCatalog) {
    let localized = catalog
        .localize(&langid!("pt-BR"), "Missing.Key", &[])
        .expect("unknown keys are not errors");
    assert_eq!(localized.value(), "Missing.Key");
    assert!(localized.resource_not_found());
    assert_eq!(localized.into_value(), "Missing.Key");
}

#[rstest]
fn localize_propagates_formatting_errors() {
    let err = FixedCatalog
        .localize(&langid!("en-US"), "Broken", &[])
        .expect_err("formatting errors propagate");
    assert!(matches!(err, CatalogError::MissingArgument { .. }));
}

#[rstest]
fn notification_args_converts_each_value() {
    let args = notification_args!["john doe", 42, String::from("owned")];
    assert_eq!(
        args,
        vec![
            FluentValue::from("john doe"),
            FluentValue::from(42),
            FluentValue::from(String::from("owned")),
        ]
    );
    let empty: Vec<FluentValue<'static>> = notification_args![];
    assert!(empty.is_empty());
}

#[rstest]
#[case(langid!("pt-BR"), None, vec![langid!("pt-BR"), langid!("pt")])]
#[case(langid!("en"), None, vec![langid!("en")])]
#[case(
    langid!("pt-BR"),
    Some(langid!("en-US")),
    vec![langid!("pt-BR"), langid!("pt"), langid!("en-US")]
)]
#[case(langid!("en-US"), Some(langid!("en")), vec![langid!("en-US"), langid!("en")])]
#[case(langid!("en-US"), Some(langid!("en-US")), vec![langid!("en-US"), langid!("en")])]
fn candidate_chain_runs_specific_to_general(
    #[case] locale: LanguageIdentifier,
    #[case] fallback: Option<LanguageIdentifier>,
    #[case] expected: Vec<LanguageIdentifier>,
) {
    assert_eq!(candidate_locales(&locale, fallback.as_ref()), expected);
}
