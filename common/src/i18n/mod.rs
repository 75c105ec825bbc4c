//! Locales, the translation catalog, and localised matcher messages.
//!
//! The catalog side is read-only: matchers query it through the [`Catalog`]
//! trait and never mutate it. Matcher text is resolved from Fluent resources
//! under `locales/`, embedded at compile time so no filesystem access happens
//! at runtime.

use fluent_templates::static_loader;
use thiserror::Error;
use unic_langid::langid;

pub(crate) use fluent_templates::loader::LanguageIdentifier;

const FALLBACK_LITERAL: &str = "en";

static_loader! {
    pub(crate) static LOADER = {
        locales: "./locales",
        fallback_language: "en",
    };
}

/// The language used for matcher messages when no other is requested.
pub const FALLBACK_LOCALE: &str = FALLBACK_LITERAL;
pub(crate) const FALLBACK_LANGUAGE: LanguageIdentifier = langid!("en");

mod catalog;
mod locale;
mod messages;

pub use catalog::{
    Backend, Catalog, KEY_SEPARATOR, KeyValueBackend, LocaleSettings, TranslationCatalog,
};
pub use locale::{Locale, normalise_locale};
pub use messages::{Arguments, Localizer, arguments};

/// Error raised when locale or translation data cannot be loaded.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    /// Raised when a locale tag cannot be parsed.
    #[error("`{tag}` is not a valid locale tag")]
    InvalidLocale { tag: String },
    /// Raised when a translation document is not valid TOML.
    #[error("failed to parse translations: {message}")]
    Parse { message: String },
    /// Raised when a translation leaf is not a string.
    #[error("translation `{key}` must be a string, found {kind}")]
    UnsupportedValue { key: String, kind: &'static str },
    /// Raised when no available locales are configured.
    #[error("at least one available locale is required")]
    NoAvailableLocales,
    /// Raised when the default locale is not one of the available locales.
    #[error("default locale `{locale}` is not an available locale")]
    DefaultLocaleUnavailable { locale: String },
    /// Raised when a matcher message is missing for the resolved language.
    #[error("message `{key}` missing for locale `{locale}`")]
    MissingMessage { key: String, locale: String },
}
