//! Naming-convention transforms for catalog keys.

use once_cell::sync::Lazy;
use regex::Regex;

static ACRONYM_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z\d]+)([A-Z][a-z])").unwrap_or_else(|error| panic!("invalid regex: {error}"))
});

static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-z\d])([A-Z])").unwrap_or_else(|error| panic!("invalid regex: {error}"))
});

/// Convert a class-like identifier into its lower-case, underscored form.
///
/// Namespace separators (`::`) become `/`, camel humps and acronym runs are
/// split with `_`, and hyphens become underscores.
///
/// ```
/// use common::inflection::underscore;
///
/// assert_eq!(underscore("MyTranslatedModel"), "my_translated_model");
/// assert_eq!(underscore("Some::NamespacedModel"), "some/namespaced_model");
/// assert_eq!(underscore("HTMLPage"), "html_page");
/// ```
#[must_use]
pub fn underscore(identifier: &str) -> String {
    if !identifier.contains("::")
        && !identifier
            .chars()
            .any(|character| character.is_ascii_uppercase() || character == '-')
    {
        return identifier.to_owned();
    }

    let namespaced = identifier.replace("::", "/");
    let acronyms = ACRONYM_BOUNDARY.replace_all(&namespaced, "${1}_${2}");
    let humps = CAMEL_BOUNDARY.replace_all(&acronyms, "${1}_${2}");

    humps.replace('-', "_").to_lowercase()
}
