//! Translation catalog consumed by the matchers.
//!
//! The catalog pairs a read-only [`Backend`] with explicit [`LocaleSettings`]
//! so every matcher receives its default and available locales by reference
//! rather than from process-wide state.

use std::collections::HashMap;

use log::trace;

use super::{I18nError, Locale};

/// Separator between the segments of a lookup key.
pub const KEY_SEPARATOR: char = '.';

/// Read access to stored translations.
pub trait Backend {
    /// Return the translation stored for `key` in `locale`, if any.
    fn lookup(&self, locale: &Locale, key: &str) -> Option<String>;

    /// Report whether `key` resolves to anything in `locale`.
    ///
    /// Backends with nested storage may treat an interior node (such as the
    /// `one`/`other` forms of a pluralised model name) as present even though
    /// [`Backend::lookup`] has no single string to return for it.
    fn contains(&self, locale: &Locale, key: &str) -> bool {
        self.lookup(locale, key).is_some()
    }
}

/// In-memory backend keyed by locale and dotted lookup key.
///
/// ```
/// use common::i18n::{Backend, KeyValueBackend, Locale};
///
/// let en = Locale::parse("en").expect("valid tag");
/// let mut backend = KeyValueBackend::default();
/// backend.store(&en, "activerecord.models.post", "Post");
///
/// assert_eq!(backend.lookup(&en, "activerecord.models.post").as_deref(), Some("Post"));
/// assert!(backend.contains(&en, "activerecord.models"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct KeyValueBackend {
    entries: HashMap<Locale, HashMap<String, String>>,
}

impl KeyValueBackend {
    /// Parse a TOML document whose top-level tables are locale tags.
    ///
    /// ```
    /// use common::i18n::{Backend, KeyValueBackend, Locale};
    ///
    /// let backend = KeyValueBackend::from_toml_str(
    ///     "[fr.activerecord.models]\npost = \"Article\"\n",
    /// )
    /// .expect("document should load");
    /// let fr = Locale::parse("fr").expect("valid tag");
    ///
    /// assert_eq!(backend.lookup(&fr, "activerecord.models.post").as_deref(), Some("Article"));
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, I18nError> {
        let document =
            toml::from_str::<toml::Table>(source).map_err(|error| I18nError::Parse {
                message: error.to_string(),
            })?;

        let mut backend = Self::default();
        for (tag, value) in &document {
            let locale = Locale::parse(tag)?;
            match value {
                toml::Value::Table(table) => backend.store_translations(&locale, table)?,
                other => {
                    return Err(I18nError::UnsupportedValue {
                        key: tag.clone(),
                        kind: other.type_str(),
                    });
                }
            }
        }

        Ok(backend)
    }

    /// Store a single translation under a dotted `key`.
    pub fn store(&mut self, locale: &Locale, key: &str, value: impl Into<String>) {
        self.entries
            .entry(locale.clone())
            .or_default()
            .insert(key.to_owned(), value.into());
    }

    /// Merge a nested table of translations into `locale`.
    ///
    /// Nested tables become dotted keys; later values replace earlier ones.
    /// Leaves must be strings.
    pub fn store_translations(
        &mut self,
        locale: &Locale,
        translations: &toml::Table,
    ) -> Result<(), I18nError> {
        let mut flattened = Vec::new();
        flatten_into(None, translations, &mut flattened)?;

        for (key, value) in flattened {
            self.store(locale, &key, value);
        }
        Ok(())
    }

    /// Return the locales holding at least one translation, sorted by tag.
    #[must_use]
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self
            .entries
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(locale, _)| locale.clone())
            .collect();
        locales.sort_unstable_by_key(Locale::tag);
        locales
    }

    /// Number of translations stored for `locale`.
    #[must_use]
    pub fn len(&self, locale: &Locale) -> usize {
        self.entries.get(locale).map_or(0, HashMap::len)
    }
}

impl Backend for KeyValueBackend {
    fn lookup(&self, locale: &Locale, key: &str) -> Option<String> {
        self.entries.get(locale)?.get(key).cloned()
    }

    fn contains(&self, locale: &Locale, key: &str) -> bool {
        let Some(entries) = self.entries.get(locale) else {
            return false;
        };

        entries.contains_key(key)
            || entries.keys().any(|candidate| {
                candidate
                    .strip_prefix(key)
                    .is_some_and(|rest| rest.starts_with(KEY_SEPARATOR))
            })
    }
}

fn flatten_into(
    prefix: Option<&str>,
    table: &toml::Table,
    output: &mut Vec<(String, String)>,
) -> Result<(), I18nError> {
    for (segment, value) in table {
        let key = match prefix {
            Some(parent) => format!("{parent}{KEY_SEPARATOR}{segment}"),
            None => segment.clone(),
        };

        match value {
            toml::Value::String(text) => output.push((key, text.clone())),
            toml::Value::Table(nested) => flatten_into(Some(key.as_str()), nested, output)?,
            other => {
                return Err(I18nError::UnsupportedValue {
                    key,
                    kind: other.type_str(),
                });
            }
        }
    }
    Ok(())
}

/// The default locale and the ordered set of available locales.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleSettings {
    default_locale: Locale,
    available_locales: Vec<Locale>,
}

impl LocaleSettings {
    /// Build settings, validating that `default_locale` is available.
    ///
    /// ```
    /// use common::i18n::{Locale, LocaleSettings};
    ///
    /// let parse = |tag| Locale::parse(tag).expect("valid tag");
    /// let settings = LocaleSettings::new(parse("en"), vec![parse("en"), parse("fr")])
    ///     .expect("settings should validate");
    ///
    /// assert_eq!(settings.default_locale().tag(), "en");
    /// assert_eq!(settings.available_locales().len(), 2);
    /// ```
    pub fn new(default_locale: Locale, available_locales: Vec<Locale>) -> Result<Self, I18nError> {
        if available_locales.is_empty() {
            return Err(I18nError::NoAvailableLocales);
        }

        if !available_locales.contains(&default_locale) {
            return Err(I18nError::DefaultLocaleUnavailable {
                locale: default_locale.tag(),
            });
        }

        Ok(Self {
            default_locale,
            available_locales,
        })
    }

    /// Build settings whose available locales are those stored in `backend`.
    pub fn from_backend(
        default_locale: Locale,
        backend: &KeyValueBackend,
    ) -> Result<Self, I18nError> {
        Self::new(default_locale, backend.locales())
    }

    /// The locale used when only the default is tested.
    #[must_use]
    pub const fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Every available locale, in configured order.
    #[must_use]
    pub fn available_locales(&self) -> &[Locale] {
        &self.available_locales
    }
}

/// Everything a matcher reads from the translation layer.
pub trait Catalog {
    /// Return the translation stored for `key` in `locale`, if any.
    fn lookup(&self, locale: &Locale, key: &str) -> Option<String>;

    /// Report whether `key` has a translation in `locale`.
    fn is_translated(&self, locale: &Locale, key: &str) -> bool {
        self.lookup(locale, key).is_some()
    }

    /// The default locale.
    fn default_locale(&self) -> &Locale;

    /// The available locales, in configured order.
    fn available_locales(&self) -> &[Locale];
}

/// A [`Backend`] paired with its [`LocaleSettings`].
#[derive(Clone, Debug)]
pub struct TranslationCatalog<B> {
    backend: B,
    settings: LocaleSettings,
}

impl<B: Backend> TranslationCatalog<B> {
    /// Pair `backend` with `settings`.
    #[must_use]
    pub const fn new(backend: B, settings: LocaleSettings) -> Self {
        Self { backend, settings }
    }

    /// Access the backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend, for seeding translations in tests.
    pub const fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Access the locale settings.
    #[must_use]
    pub const fn settings(&self) -> &LocaleSettings {
        &self.settings
    }
}

impl<B: Backend> Catalog for TranslationCatalog<B> {
    fn lookup(&self, locale: &Locale, key: &str) -> Option<String> {
        self.backend.lookup(locale, key)
    }

    fn is_translated(&self, locale: &Locale, key: &str) -> bool {
        let found = self.backend.contains(locale, key);
        trace!(
            target: "i18n::catalog",
            "lookup of `{key}` in `{locale}`: {}",
            if found { "found" } else { "absent" },
        );
        found
    }

    fn default_locale(&self) -> &Locale {
        self.settings.default_locale()
    }

    fn available_locales(&self) -> &[Locale] {
        self.settings.available_locales()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn locale(tag: &str) -> Locale {
        Locale::parse(tag).expect("test locale should parse")
    }

    #[fixture]
    fn backend() -> KeyValueBackend {
        KeyValueBackend::from_toml_str(concat!(
            "[en.activerecord.models.post]\n",
            "one = \"Post\"\n",
            "other = \"Posts\"\n",
            "[en.activerecord.attributes.post]\n",
            "title = \"Title\"\n",
            "[fr.activerecord.attributes.post]\n",
            "title = \"Titre\"\n",
        ))
        .expect("fixture document should load")
    }

    #[rstest]
    #[case("en", "activerecord.attributes.post.title", Some("Title"))]
    #[case("fr", "activerecord.attributes.post.title", Some("Titre"))]
    #[case("fr", "activerecord.models.post.one", None)]
    #[case("jp", "activerecord.attributes.post.title", None)]
    #[case("en", "activerecord.models.post", None)]
    fn looks_up_leaves(
        backend: KeyValueBackend,
        #[case] tag: &str,
        #[case] key: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(backend.lookup(&locale(tag), key).as_deref(), expected);
    }

    #[rstest]
    #[case("en", "activerecord.models.post", true)]
    #[case("en", "activerecord.models.pos", false)]
    #[case("fr", "activerecord.models.post", false)]
    #[case("en", "activerecord.attributes.post.title", true)]
    fn treats_interior_nodes_as_present(
        backend: KeyValueBackend,
        #[case] tag: &str,
        #[case] key: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(backend.contains(&locale(tag), key), expected);
    }

    #[rstest]
    fn lists_locales_with_entries(backend: KeyValueBackend) {
        assert_eq!(backend.locales(), vec![locale("en"), locale("fr")]);
        assert_eq!(backend.len(&locale("en")), 3);
        assert_eq!(backend.len(&locale("jp")), 0);
    }

    #[rstest]
    fn rejects_non_string_leaves() {
        let outcome = KeyValueBackend::from_toml_str("[en.activerecord.models]\npost = 3\n");

        assert_eq!(
            outcome.map(|_| ()),
            Err(I18nError::UnsupportedValue {
                key: "activerecord.models.post".to_owned(),
                kind: "integer",
            })
        );
    }

    #[rstest]
    fn rejects_top_level_values() {
        let outcome = KeyValueBackend::from_toml_str("en = \"English\"\n");

        assert!(matches!(
            outcome,
            Err(I18nError::UnsupportedValue { ref key, kind: "string" }) if key == "en"
        ));
    }

    #[rstest]
    fn surfaces_parse_failures() {
        let outcome = KeyValueBackend::from_toml_str("[en\n");

        assert!(matches!(outcome, Err(I18nError::Parse { .. })));
    }

    #[rstest]
    fn settings_require_available_locales() {
        assert_eq!(
            LocaleSettings::new(locale("en"), Vec::new()),
            Err(I18nError::NoAvailableLocales)
        );
    }

    #[rstest]
    fn settings_require_default_to_be_available() {
        assert_eq!(
            LocaleSettings::new(locale("de"), vec![locale("en"), locale("fr")]),
            Err(I18nError::DefaultLocaleUnavailable {
                locale: "de".to_owned()
            })
        );
    }

    #[rstest]
    fn settings_preserve_configured_order() {
        let settings = LocaleSettings::new(
            locale("fr"),
            vec![locale("jp"), locale("en"), locale("fr")],
        )
        .expect("settings should validate");

        assert_eq!(
            settings.available_locales(),
            [locale("jp"), locale("en"), locale("fr")]
        );
    }

    #[rstest]
    fn settings_derive_from_backend(backend: KeyValueBackend) {
        let settings =
            LocaleSettings::from_backend(locale("en"), &backend).expect("settings should validate");

        assert_eq!(settings.available_locales(), [locale("en"), locale("fr")]);
    }

    #[rstest]
    fn catalog_reads_through_to_backend(backend: KeyValueBackend) {
        let settings =
            LocaleSettings::new(locale("en"), vec![locale("en"), locale("fr"), locale("jp")])
                .expect("settings should validate");
        let catalog = TranslationCatalog::new(backend, settings);

        assert!(catalog.is_translated(&locale("en"), "activerecord.models.post"));
        assert!(!catalog.is_translated(&locale("jp"), "activerecord.models.post"));
        assert_eq!(catalog.default_locale(), &locale("en"));
        assert_eq!(catalog.available_locales().len(), 3);
    }
}
