//! Behaviour-driven tests for matcher configuration loading.

use std::cell::RefCell;

mod support;

use common::i18n::{Catalog, KeyValueBackend, Locale};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::locale::{StepLocale, StepLocales, StepText};
use translation_matchers::MatcherConfig;

/// Default and available locales of a successfully built catalog.
type Resolved = (Locale, Vec<Locale>);

#[fixture]
fn config_source() -> RefCell<Vec<String>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn backend() -> RefCell<KeyValueBackend> {
    RefCell::new(KeyValueBackend::default())
}

#[fixture]
fn load_result() -> RefCell<Option<Result<Resolved, String>>> {
    RefCell::new(None)
}

fn resolved(load_result: &RefCell<Option<Result<Resolved, String>>>) -> Resolved {
    match load_result.borrow().as_ref() {
        Some(Ok(resolved)) => resolved.clone(),
        Some(Err(error)) => panic!("expected configuration loading to succeed: {error}"),
        None => panic!("configuration should be loaded"),
    }
}

#[given("no matcher configuration is provided")]
fn no_configuration(config_source: &RefCell<Vec<String>>) {
    config_source.borrow_mut().clear();
}

#[given("the configuration sets the default locale to {value}")]
fn set_default_locale(config_source: &RefCell<Vec<String>>, value: StepText) {
    config_source
        .borrow_mut()
        .push(format!("default_locale = \"{}\"", value.into_inner()));
}

#[given("the configuration lists the available locales {value}")]
fn set_available_locales(config_source: &RefCell<Vec<String>>, value: StepLocales) {
    let tags: Vec<String> = value
        .into_inner()
        .iter()
        .map(|locale| format!("\"{locale}\""))
        .collect();
    config_source
        .borrow_mut()
        .push(format!("available_locales = [{}]", tags.join(", ")));
}

#[given("the configuration contains an unknown field")]
fn unknown_field(config_source: &RefCell<Vec<String>>) {
    config_source
        .borrow_mut()
        .push(String::from("locales = [\"en\"]"));
}

#[given("translations are stored for {value}")]
fn store_translations(backend: &RefCell<KeyValueBackend>, value: StepLocales) {
    for locale in value.into_inner() {
        backend
            .borrow_mut()
            .store(&locale, "activerecord.models.post", "post");
    }
}

#[when("the matcher configuration is loaded")]
fn load_configuration(
    config_source: &RefCell<Vec<String>>,
    backend: &RefCell<KeyValueBackend>,
    load_result: &RefCell<Option<Result<Resolved, String>>>,
) {
    let source = config_source.borrow().join("\n");
    let outcome = MatcherConfig::load_with("models", |namespace| {
        assert_eq!(namespace, "models");
        MatcherConfig::from_toml_str(&source)
    })
    .and_then(|config| config.catalog(backend.borrow().clone()))
    .map(|catalog| {
        (
            catalog.default_locale().clone(),
            catalog.available_locales().to_vec(),
        )
    })
    .map_err(|error| error.to_string());

    load_result.borrow_mut().replace(outcome);
}

#[then("the default locale is {expected}")]
fn assert_default_locale(
    load_result: &RefCell<Option<Result<Resolved, String>>>,
    expected: StepLocale,
) {
    let (default_locale, _) = resolved(load_result);

    assert_eq!(default_locale, expected.into_inner());
}

#[then("the available locales are {expected}")]
fn assert_available_locales(
    load_result: &RefCell<Option<Result<Resolved, String>>>,
    expected: StepLocales,
) {
    let (_, available_locales) = resolved(load_result);

    assert_eq!(available_locales, expected.into_inner());
}

#[then("a configuration error mentioning {snippet} is reported")]
fn assert_error_with_snippet(
    load_result: &RefCell<Option<Result<Resolved, String>>>,
    snippet: StepText,
) {
    let snippet_value = snippet.into_inner();
    match load_result.borrow().as_ref() {
        Some(Err(error)) => {
            assert!(
                error.contains(snippet_value.as_str()),
                "expected error '{error}' to mention '{snippet_value}'",
            );
        }
        Some(Ok(resolved)) => {
            panic!("expected configuration loading to fail but succeeded with {resolved:?}")
        }
        None => panic!("configuration should be loaded"),
    }
}

#[scenario(path = "tests/features/config_loading.feature", index = 0)]
fn scenario_configured_locales(
    config_source: RefCell<Vec<String>>,
    backend: RefCell<KeyValueBackend>,
    load_result: RefCell<Option<Result<Resolved, String>>>,
) {
    let _ = (config_source, backend, load_result);
}

#[scenario(path = "tests/features/config_loading.feature", index = 1)]
fn scenario_backend_locales(
    config_source: RefCell<Vec<String>>,
    backend: RefCell<KeyValueBackend>,
    load_result: RefCell<Option<Result<Resolved, String>>>,
) {
    let _ = (config_source, backend, load_result);
}

#[scenario(path = "tests/features/config_loading.feature", index = 2)]
fn scenario_unavailable_default(
    config_source: RefCell<Vec<String>>,
    backend: RefCell<KeyValueBackend>,
    load_result: RefCell<Option<Result<Resolved, String>>>,
) {
    let _ = (config_source, backend, load_result);
}

#[scenario(path = "tests/features/config_loading.feature", index = 3)]
fn scenario_unknown_fields(
    config_source: RefCell<Vec<String>>,
    backend: RefCell<KeyValueBackend>,
    load_result: RefCell<Option<Result<Resolved, String>>>,
) {
    let _ = (config_source, backend, load_result);
}

#[scenario(path = "tests/features/config_loading.feature", index = 4)]
fn scenario_empty_backend(
    config_source: RefCell<Vec<String>>,
    backend: RefCell<KeyValueBackend>,
    load_result: RefCell<Option<Result<Resolved, String>>>,
) {
    let _ = (config_source, backend, load_result);
}
