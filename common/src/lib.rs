//! Shared primitives for the translation matchers: locales, the read-only
//! translation catalog, naming-convention transforms, and the localised
//! message bundles used to render matcher output.

pub mod i18n;
pub mod inflection;
pub mod model;

pub use i18n::{
    Arguments, Backend, Catalog, FALLBACK_LOCALE, I18nError, KeyValueBackend, Locale,
    LocaleSettings, Localizer, TranslationCatalog, normalise_locale,
};
pub use inflection::underscore;
pub use model::ModelName;
