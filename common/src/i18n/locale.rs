//! Locale identifiers and candidate normalisation.
//!
//! Locales are stored as parsed language identifiers so that equivalent tags
//! compare equal regardless of the casing used in configuration or tests.

use std::fmt;
use std::str::FromStr;

use unic_langid::LanguageIdentifier;

use super::I18nError;

/// A language or region identifier such as `en`, `fr`, or `en-GB`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locale(LanguageIdentifier);

impl Locale {
    /// Parse `tag` into a locale.
    ///
    /// ```
    /// use common::i18n::Locale;
    ///
    /// let locale = Locale::parse("en").expect("`en` is a valid tag");
    /// assert_eq!(locale.tag(), "en");
    /// assert!(Locale::parse("not a tag").is_err());
    /// ```
    pub fn parse(tag: &str) -> Result<Self, I18nError> {
        tag.parse()
    }

    /// Return the underlying language identifier.
    #[must_use]
    pub const fn language(&self) -> &LanguageIdentifier {
        &self.0
    }

    /// Return the canonical tag, e.g. `en-GB`.
    #[must_use]
    pub fn tag(&self) -> String {
        self.0.to_string()
    }

    /// Render the locale with a leading symbol marker, e.g. `:en`.
    #[must_use]
    pub fn marker(&self) -> String {
        format!(":{}", self.0)
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let candidate = normalise_locale(Some(input)).ok_or_else(|| I18nError::InvalidLocale {
            tag: input.to_owned(),
        })?;

        candidate
            .parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|_| I18nError::InvalidLocale {
                tag: input.to_owned(),
            })
    }
}

impl From<LanguageIdentifier> for Locale {
    fn from(language: LanguageIdentifier) -> Self {
        Self(language)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

/// Trim whitespace and discard empty locale candidates.
#[must_use]
pub fn normalise_locale(input: Option<&str>) -> Option<&str> {
    input
        .map(str::trim)
        .and_then(|value| if value.is_empty() { None } else { Some(value) })
}
