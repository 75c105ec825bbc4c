//! Test matchers asserting that models and their attributes have translated
//! names in a translation catalog.
//!
//! [`have_a_translated_model`] checks `activerecord.models.<model>` and
//! [`have_a_translated_attribute`] checks
//! `activerecord.attributes.<model>.<attribute>`, either in the catalog's
//! default locale or in every available locale. Failure messages list every
//! locale missing the translation.

pub mod config;
pub mod expectation;
pub mod matchers;

pub use common::impl_model_name;
pub use common::model::ModelName;
pub use config::{ConfigError, MatcherConfig};
pub use expectation::{Expectation, ExpectationError, expect};
pub use matchers::{
    AttributeTranslation, AttributeTranslationMatcher, Evaluation, LocaleScope, Matcher,
    MatcherError, ModelTranslation, ModelTranslationMatcher, TranslationMatcher,
    TranslationTarget, have_a_translated_attribute, have_a_translated_model, locales_as_string,
};
