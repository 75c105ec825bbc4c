//! TOML configuration for the locales a matcher suite tests.
//!
//! `MatcherConfig` captures the default locale, the ordered list of available
//! locales, and the language matcher messages are rendered in. It is parsed
//! from TOML and then validated against a translation backend into the
//! explicit [`LocaleSettings`] every catalog carries, so test suites never
//! depend on process-wide locale state.

use common::i18n::{
    FALLBACK_LOCALE, I18nError, KeyValueBackend, Locale, LocaleSettings, Localizer,
    TranslationCatalog, normalise_locale,
};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Error raised when matcher configuration cannot be loaded or validated.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Raised when the configuration is not valid TOML for [`MatcherConfig`].
    #[error("failed to parse matcher configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// Raised when a configured locale is invalid or unavailable.
    #[error(transparent)]
    Locale(#[from] I18nError),
}

/// Locale configuration for the translation matchers.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
    /// Locale tested by `in_default_locale`. Blank or absent values fall back
    /// to [`FALLBACK_LOCALE`].
    pub default_locale: Option<String>,
    /// Ordered locales tested by default. When empty, the locales holding
    /// translations in the backend are used, sorted by tag.
    pub available_locales: Vec<String>,
    /// Language for matcher descriptions and failure messages.
    pub message_locale: Option<String>,
}

impl MatcherConfig {
    /// Parse configuration from TOML.
    ///
    /// ```
    /// use translation_matchers::MatcherConfig;
    ///
    /// let config = MatcherConfig::from_toml_str(
    ///     "default_locale = \"en\"\navailable_locales = [\"en\", \"fr\", \"jp\"]\n",
    /// )
    /// .expect("configuration should parse");
    /// assert_eq!(config.default_locale(), "en");
    /// assert_eq!(config.available_locales.len(), 3);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration using the supplied loader.
    ///
    /// The loader receives `namespace` so callers can keep several suites'
    /// settings in one file; tests inject a closure returning a fixed value.
    ///
    /// ```
    /// use translation_matchers::MatcherConfig;
    ///
    /// let config = MatcherConfig::load_with("models", |_| Ok(MatcherConfig::default()))
    ///     .expect("loader should succeed");
    /// assert_eq!(config.default_locale(), "en");
    /// ```
    pub fn load_with<F>(namespace: &str, loader: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&str) -> Result<Self, ConfigError>,
    {
        loader(namespace)
    }

    /// The configured default locale tag, or [`FALLBACK_LOCALE`].
    #[must_use]
    pub fn default_locale(&self) -> &str {
        normalise_locale(self.default_locale.as_deref()).unwrap_or(FALLBACK_LOCALE)
    }

    /// Validate the configured locales against `backend`.
    pub fn settings(&self, backend: &KeyValueBackend) -> Result<LocaleSettings, ConfigError> {
        let default_locale = Locale::parse(self.default_locale())?;

        let settings = if self.available_locales.is_empty() {
            debug!(
                target: "matchers::config",
                "no available locales configured; using the backend's locales",
            );
            LocaleSettings::from_backend(default_locale, backend)?
        } else {
            let available = self
                .available_locales
                .iter()
                .map(|tag| Locale::parse(tag))
                .collect::<Result<Vec<_>, _>>()?;
            LocaleSettings::new(default_locale, available)?
        };

        Ok(settings)
    }

    /// Build a catalog over `backend` using the configured locales.
    pub fn catalog(
        &self,
        backend: KeyValueBackend,
    ) -> Result<TranslationCatalog<KeyValueBackend>, ConfigError> {
        let settings = self.settings(&backend)?;
        Ok(TranslationCatalog::new(backend, settings))
    }

    /// A localizer for the configured message language.
    #[must_use]
    pub fn localizer(&self) -> Localizer {
        let localizer = Localizer::new(self.message_locale.as_deref());
        if localizer.used_fallback() && normalise_locale(self.message_locale.as_deref()).is_some()
        {
            debug!(
                target: "matchers::config",
                "message locale `{}` is not bundled; using `{}`",
                self.message_locale.as_deref().unwrap_or_default(),
                localizer.locale(),
            );
        }
        localizer
    }
}
