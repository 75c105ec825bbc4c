//! Shared test support utilities for behaviour-driven suites.
//!
//! Exposes the `locale` helpers (`StepLocale`, `StepLocales`, `StepText`)
//! that parse step parameters so scenarios can describe catalogs and expected
//! messages in the same notation the matchers print, such as `:en, :fr`.
pub mod locale;
