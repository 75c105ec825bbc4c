use common::i18n::{Arguments, Catalog, arguments};
use common::model::ModelName;

use super::{ACTIVE_RECORD_SCOPE, TranslationMatcher, TranslationTarget};

/// Matches subjects whose named attribute is translated.
pub type AttributeTranslationMatcher<'c> = TranslationMatcher<'c, AttributeTranslation>;

/// Key derivation for attribute translations:
/// `activerecord.attributes.<canonical class name>.<attribute>`.
///
/// The attribute name is used verbatim; only the class name is canonicalised.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttributeTranslation {
    attribute: String,
}

impl AttributeTranslation {
    /// Target the attribute called `attribute`.
    #[must_use]
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    /// The attribute name as supplied.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }
}

impl TranslationTarget for AttributeTranslation {
    const DESCRIPTION: &'static str = "attribute-description";
    const FAILURE: &'static str = "attribute-failure";

    fn translation_key(&self, subject: &dyn ModelName) -> String {
        format!(
            "{ACTIVE_RECORD_SCOPE}.attributes.{}.{}",
            subject.canonical_name(),
            self.attribute,
        )
    }

    fn message_arguments(&self) -> Arguments<'_> {
        arguments(&[("attribute", self.attribute.as_str())])
    }
}

/// Ensure a model attribute has a translated name in the catalog.
///
/// ```
/// use common::i18n::{KeyValueBackend, Locale, LocaleSettings, TranslationCatalog};
/// use translation_matchers::have_a_translated_attribute;
///
/// let en = Locale::parse("en").expect("valid tag");
/// let settings = LocaleSettings::new(en.clone(), vec![en]).expect("valid settings");
/// let catalog = TranslationCatalog::new(KeyValueBackend::default(), settings);
///
/// let matcher = have_a_translated_attribute(&catalog, "title").in_default_locale();
/// assert_eq!(
///     matcher.description(),
///     "have a translated attribute name for 'title' in :en"
/// );
/// ```
pub fn have_a_translated_attribute(
    catalog: &dyn Catalog,
    attribute: impl Into<String>,
) -> AttributeTranslationMatcher<'_> {
    TranslationMatcher::new(catalog, AttributeTranslation::new(attribute))
}
