use common::i18n::Catalog;
use common::model::ModelName;

use super::{ACTIVE_RECORD_SCOPE, TranslationMatcher, TranslationTarget};

/// Matches subjects whose model name is translated.
pub type ModelTranslationMatcher<'c> = TranslationMatcher<'c, ModelTranslation>;

/// Key derivation for whole-model translations:
/// `activerecord.models.<canonical class name>`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ModelTranslation;

impl TranslationTarget for ModelTranslation {
    const DESCRIPTION: &'static str = "model-description";
    const FAILURE: &'static str = "model-failure";

    fn translation_key(&self, subject: &dyn ModelName) -> String {
        format!("{ACTIVE_RECORD_SCOPE}.models.{}", subject.canonical_name())
    }
}

/// Ensure a model has a translated name in the catalog.
///
/// The matcher tests every available locale unless narrowed with
/// [`TranslationMatcher::in_default_locale`].
///
/// ```
/// use common::i18n::{KeyValueBackend, Locale, LocaleSettings, TranslationCatalog};
/// use translation_matchers::have_a_translated_model;
///
/// let en = Locale::parse("en").expect("valid tag");
/// let fr = Locale::parse("fr").expect("valid tag");
/// let mut backend = KeyValueBackend::default();
/// backend.store(&en, "activerecord.models.invoice", "Invoice");
/// let settings = LocaleSettings::new(en, vec![Locale::parse("en").expect("valid tag"), fr])
///     .expect("valid settings");
/// let catalog = TranslationCatalog::new(backend, settings);
///
/// assert!(have_a_translated_model(&catalog).in_default_locale().matches(&"Invoice"));
/// assert!(!have_a_translated_model(&catalog).matches(&"Invoice"));
/// ```
pub fn have_a_translated_model(catalog: &dyn Catalog) -> ModelTranslationMatcher<'_> {
    TranslationMatcher::new(catalog, ModelTranslation)
}
