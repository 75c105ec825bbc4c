//! Minimal assertion surface for driving matchers from plain `#[test]`s.
//!
//! ```
//! use common::i18n::{KeyValueBackend, Locale, LocaleSettings, TranslationCatalog};
//! use translation_matchers::{expect, have_a_translated_attribute};
//!
//! let en = Locale::parse("en").expect("valid tag");
//! let mut backend = KeyValueBackend::default();
//! backend.store(&en, "activerecord.attributes.post.title", "Title");
//! let settings = LocaleSettings::new(en.clone(), vec![en]).expect("valid settings");
//! let catalog = TranslationCatalog::new(backend, settings);
//!
//! expect("Post")
//!     .to(have_a_translated_attribute(&catalog, "title"))
//!     .expect("title should be translated");
//! assert!(expect("Post").to(have_a_translated_attribute(&catalog, "body")).is_err());
//! ```

use common::model::ModelName;
use thiserror::Error;

use crate::matchers::{Matcher, MatcherError};

/// Error raised when an expectation does not hold.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExpectationError {
    /// The matcher disagreed with the expectation; carries its message.
    #[error("{message}")]
    Failed { message: String },
    /// The matcher could not render its message.
    #[error(transparent)]
    Matcher(#[from] MatcherError),
}

/// A subject awaiting a matcher.
pub struct Expectation<'s, S: ?Sized> {
    subject: &'s S,
}

/// Begin an expectation about `subject`.
pub const fn expect<S: ModelName + ?Sized>(subject: &S) -> Expectation<'_, S> {
    Expectation { subject }
}

impl<S: ModelName + ?Sized> Expectation<'_, S> {
    /// Require `matcher` to match the subject.
    pub fn to(&self, mut matcher: impl Matcher) -> Result<(), ExpectationError> {
        if matcher.matches(&self.subject) {
            return Ok(());
        }
        Err(ExpectationError::Failed {
            message: matcher.failure_message()?,
        })
    }

    /// Require `matcher` not to match the subject.
    pub fn to_not(&self, mut matcher: impl Matcher) -> Result<(), ExpectationError> {
        if !matcher.matches(&self.subject) {
            return Ok(());
        }
        Err(ExpectationError::Failed {
            message: matcher.negated_failure_message()?,
        })
    }
}
