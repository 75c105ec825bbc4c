//! Matchers asserting that models and their attributes are translated.
//!
//! A matcher is built once per assertion, optionally narrowed to the default
//! locale, evaluated against a subject with [`TranslationMatcher::matches`],
//! and then asked for its description or failure message. Every tested
//! locale is checked on each evaluation so failure messages list all of the
//! locales missing a translation, not just the first.

use std::slice;

use common::i18n::{Arguments, Catalog, Locale, Localizer, arguments};
use common::model::ModelName;
use log::{debug, warn};
use thiserror::Error;

mod attribute;
mod model;

pub use attribute::{
    AttributeTranslation, AttributeTranslationMatcher, have_a_translated_attribute,
};
pub use model::{ModelTranslation, ModelTranslationMatcher, have_a_translated_model};

/// Catalog prefix shared by every key the matchers derive.
pub const ACTIVE_RECORD_SCOPE: &str = "activerecord";

/// Which locales a matcher evaluates.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LocaleScope {
    /// Every locale the catalog reports as available.
    #[default]
    AllAvailable,
    /// Only the catalog's default locale.
    DefaultOnly,
}

/// Error raised when a matcher is queried out of order.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatcherError {
    /// Raised when a failure message is requested before any evaluation.
    #[error("the matcher has not been evaluated against a subject yet")]
    NotEvaluated,
}

/// The variant-specific half of a matcher: how its catalog key is derived
/// and which messages describe it.
pub trait TranslationTarget {
    /// Message key for the matcher description.
    const DESCRIPTION: &'static str;
    /// Message key for the first line of the failure message.
    const FAILURE: &'static str;

    /// Derive the catalog lookup key for `subject`.
    fn translation_key(&self, subject: &dyn ModelName) -> String;

    /// Arguments the variant contributes to its messages.
    fn message_arguments(&self) -> Arguments<'_> {
        Arguments::new()
    }
}

/// Outcome of the most recent evaluation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Evaluation {
    model: String,
    key: String,
    failed_locales: Vec<Locale>,
}

impl Evaluation {
    /// Class name of the evaluated subject.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The catalog key that was looked up.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Tested locales lacking a translation, in tested order.
    #[must_use]
    pub fn failed_locales(&self) -> &[Locale] {
        &self.failed_locales
    }

    /// Whether every tested locale had a translation.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failed_locales.is_empty()
    }
}

/// The host-facing matcher protocol.
pub trait Matcher {
    /// Evaluate the matcher against `subject`.
    fn matches(&mut self, subject: &dyn ModelName) -> bool;

    /// Describe what the matcher expects.
    fn description(&self) -> String;

    /// Explain why the last evaluation failed.
    fn failure_message(&self) -> Result<String, MatcherError>;

    /// Explain why the last evaluation unexpectedly passed.
    fn negated_failure_message(&self) -> Result<String, MatcherError>;
}

/// Shared state and behaviour for the translation matchers.
#[derive(Clone)]
pub struct TranslationMatcher<'c, T> {
    catalog: &'c dyn Catalog,
    target: T,
    scope: LocaleScope,
    localizer: Localizer,
    evaluation: Option<Evaluation>,
}

impl<'c, T: TranslationTarget> TranslationMatcher<'c, T> {
    /// Create a matcher for `target` reading from `catalog`.
    pub fn new(catalog: &'c dyn Catalog, target: T) -> Self {
        Self {
            catalog,
            target,
            scope: LocaleScope::default(),
            localizer: Localizer::default(),
            evaluation: None,
        }
    }

    /// Only test the catalog's default locale.
    #[must_use]
    pub fn in_default_locale(self) -> Self {
        self.with_scope(LocaleScope::DefaultOnly)
    }

    /// Test every available locale.
    #[must_use]
    pub fn in_available_locales(self) -> Self {
        self.with_scope(LocaleScope::AllAvailable)
    }

    /// Render messages with `localizer` instead of the fallback language.
    #[must_use]
    pub fn with_localizer(mut self, localizer: Localizer) -> Self {
        self.localizer = localizer;
        self
    }

    fn with_scope(mut self, scope: LocaleScope) -> Self {
        self.scope = scope;
        self.evaluation = None;
        self
    }

    /// The configured locale scope.
    #[must_use]
    pub const fn scope(&self) -> LocaleScope {
        self.scope
    }

    /// The variant-specific target.
    #[must_use]
    pub const fn target(&self) -> &T {
        &self.target
    }

    /// The locales this matcher evaluates, in catalog order.
    #[must_use]
    pub fn tested_locales(&self) -> &'c [Locale] {
        let catalog = self.catalog;
        match self.scope {
            LocaleScope::DefaultOnly => slice::from_ref(catalog.default_locale()),
            LocaleScope::AllAvailable => catalog.available_locales(),
        }
    }

    /// The result of the last evaluation, if any.
    #[must_use]
    pub const fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    /// Locales that failed the last evaluation; empty before evaluation.
    #[must_use]
    pub fn failed_locales(&self) -> &[Locale] {
        self.evaluation
            .as_ref()
            .map(Evaluation::failed_locales)
            .unwrap_or_default()
    }

    /// Whether `key` has a translation in `locale`.
    #[must_use]
    pub fn is_translated(&self, locale: &Locale, key: &str) -> bool {
        self.catalog.is_translated(locale, key)
    }

    /// Check the derived key in every tested locale.
    pub fn matches(&mut self, subject: &dyn ModelName) -> bool {
        let key = self.target.translation_key(subject);
        let failed_locales: Vec<Locale> = self
            .tested_locales()
            .iter()
            .filter(|locale| !self.is_translated(locale, &key))
            .cloned()
            .collect();

        let model = subject.model_name().into_owned();
        if failed_locales.is_empty() {
            debug!(
                target: "matchers",
                "`{key}` for `{model}` is translated in every tested locale",
            );
        } else {
            debug!(
                target: "matchers",
                "`{key}` for `{model}` is missing in {}",
                locales_as_string(&failed_locales),
            );
        }

        let evaluation = Evaluation {
            model,
            key,
            failed_locales,
        };
        let passed = evaluation.passed();
        self.evaluation = Some(evaluation);
        passed
    }

    /// Describe the expectation, listing the tested locales.
    #[must_use]
    pub fn description(&self) -> String {
        let locales = locales_as_string(self.tested_locales());
        let mut args = self.target.message_arguments();
        args.extend(arguments(&[("locales", locales.as_str())]));
        self.render(T::DESCRIPTION, &args)
    }

    /// Explain which key was missing and for which locales.
    pub fn failure_message(&self) -> Result<String, MatcherError> {
        let evaluation = self.evaluation.as_ref().ok_or(MatcherError::NotEvaluated)?;
        let failed = locales_as_string(&evaluation.failed_locales);

        let mut args = self.target.message_arguments();
        args.extend(arguments(&[("model", evaluation.model.as_str())]));
        let expected = self.render(T::FAILURE, &args);
        let missing = self.render(
            "missing-key",
            &arguments(&[("key", evaluation.key.as_str())]),
        );
        let locales = self.render(
            "failed-locales",
            &arguments(&[("locales", failed.as_str())]),
        );

        Ok([expected, missing, locales].join("\n"))
    }

    /// Explain that the subject was translated although it should not be.
    pub fn negated_failure_message(&self) -> Result<String, MatcherError> {
        let evaluation = self.evaluation.as_ref().ok_or(MatcherError::NotEvaluated)?;
        let description = self.description();

        Ok(self.render(
            "negated-failure",
            &arguments(&[
                ("model", evaluation.model.as_str()),
                ("description", description.as_str()),
            ]),
        ))
    }

    fn render(&self, key: &str, args: &Arguments<'_>) -> String {
        self.localizer.message(key, args).unwrap_or_else(|error| {
            warn!(target: "matchers", "{error}; rendering the message key instead");
            key.to_owned()
        })
    }
}

impl<T: TranslationTarget> Matcher for TranslationMatcher<'_, T> {
    fn matches(&mut self, subject: &dyn ModelName) -> bool {
        Self::matches(self, subject)
    }

    fn description(&self) -> String {
        Self::description(self)
    }

    fn failure_message(&self) -> Result<String, MatcherError> {
        Self::failure_message(self)
    }

    fn negated_failure_message(&self) -> Result<String, MatcherError> {
        Self::negated_failure_message(self)
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn matches(&mut self, subject: &dyn ModelName) -> bool {
        (**self).matches(subject)
    }

    fn description(&self) -> String {
        (**self).description()
    }

    fn failure_message(&self) -> Result<String, MatcherError> {
        (**self).failure_message()
    }

    fn negated_failure_message(&self) -> Result<String, MatcherError> {
        (**self).negated_failure_message()
    }
}

/// Render locales as a symbol-marked, comma-separated list.
///
/// ```
/// use common::i18n::Locale;
/// use translation_matchers::locales_as_string;
///
/// let locales: Vec<Locale> = ["en", "fr", "jp"]
///     .into_iter()
///     .map(|tag| Locale::parse(tag).expect("valid tag"))
///     .collect();
///
/// assert_eq!(locales_as_string(&locales), ":en, :fr, :jp");
/// assert_eq!(locales_as_string(&[]), "");
/// ```
#[must_use]
pub fn locales_as_string(locales: &[Locale]) -> String {
    locales
        .iter()
        .map(Locale::marker)
        .collect::<Vec<_>>()
        .join(", ")
}
