//! Localised text for matcher descriptions and failure messages.

use std::borrow::Cow;
use std::collections::HashMap;
use std::str::FromStr;

use fluent_templates::Loader;
use fluent_templates::fluent_bundle::FluentValue;

use super::{FALLBACK_LANGUAGE, I18nError, LOADER, LanguageIdentifier, normalise_locale};

/// Fluent argument map supplied to message lookups.
pub type Arguments<'a> = HashMap<Cow<'static, str>, FluentValue<'a>>;

const UNICODE_ISOLATION_MARKS: [char; 2] = ['\u{2068}', '\u{2069}'];

/// Resolve matcher messages for a specific language.
///
/// Unknown or unsupported tags fall back to [`super::FALLBACK_LOCALE`].
#[derive(Clone, Debug)]
pub struct Localizer {
    language: LanguageIdentifier,
    fallback_used: bool,
}

impl Localizer {
    /// Create a localizer for `locale`.
    ///
    /// ```
    /// use common::i18n::Localizer;
    ///
    /// let french = Localizer::new(Some("fr"));
    /// assert_eq!(french.locale(), "fr");
    /// assert!(!french.used_fallback());
    ///
    /// let fallback = Localizer::new(Some("zz"));
    /// assert_eq!(fallback.locale(), "en");
    /// assert!(fallback.used_fallback());
    /// ```
    #[must_use]
    pub fn new(locale: Option<&str>) -> Self {
        let supported = normalise_locale(locale)
            .and_then(|value| LanguageIdentifier::from_str(value).ok())
            .filter(|identifier| LOADER.locales().any(|candidate| candidate == identifier));

        match supported {
            Some(language) => Self {
                language,
                fallback_used: false,
            },
            None => Self {
                language: FALLBACK_LANGUAGE.clone(),
                fallback_used: true,
            },
        }
    }

    /// Return the resolved locale tag.
    #[must_use]
    pub fn locale(&self) -> String {
        self.language.to_string()
    }

    /// Whether the fallback language was used.
    #[must_use]
    pub const fn used_fallback(&self) -> bool {
        self.fallback_used
    }

    /// Fetch the message for `key`, formatted with `args`.
    pub fn message(&self, key: &str, args: &Arguments<'_>) -> Result<String, I18nError> {
        LOADER
            .try_lookup_with_args(&self.language, key, args)
            .map(|text| strip_isolation_marks(&text))
            .ok_or_else(|| I18nError::MissingMessage {
                key: key.to_owned(),
                locale: self.locale(),
            })
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Build an argument map from string pairs.
#[must_use]
pub fn arguments<'a>(pairs: &[(&'static str, &'a str)]) -> Arguments<'a> {
    pairs
        .iter()
        .map(|&(name, value)| (Cow::Borrowed(name), FluentValue::from(value)))
        .collect()
}

fn strip_isolation_marks(text: &str) -> String {
    text.chars()
        .filter(|character| !UNICODE_ISOLATION_MARKS.contains(character))
        .collect()
}
