use std::convert::Infallible;
use std::str::FromStr;

use common::i18n::{I18nError, Locale};

/// Strip whitespace, surrounding quotes, and a leading symbol marker.
fn unquote(input: &str) -> &str {
    let trimmed = input
        .trim()
        .trim_matches(|candidate| matches!(candidate, '"' | '\''));
    trimmed.strip_prefix(':').unwrap_or(trimmed)
}

/// Locale supplied via a behaviour-driven test step, e.g. `:en` or `fr`.
#[derive(Clone, Debug)]
pub struct StepLocale(Locale);

impl FromStr for StepLocale {
    type Err = I18nError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Locale::parse(unquote(input)).map(Self)
    }
}

impl StepLocale {
    /// Consumes the step value, yielding the parsed locale.
    pub fn into_inner(self) -> Locale {
        self.0
    }
}

/// Comma-separated locale list supplied via a step, e.g. `:en, :fr, :jp`.
#[derive(Clone, Debug)]
pub struct StepLocales(Vec<Locale>);

impl FromStr for StepLocales {
    type Err = I18nError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        input
            .split(',')
            .map(|candidate| Locale::parse(unquote(candidate)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl StepLocales {
    /// Consumes the step value, yielding the parsed locales in order.
    pub fn into_inner(self) -> Vec<Locale> {
        self.0
    }
}

/// Quoted free text supplied via a step.
#[derive(Clone, Debug)]
pub struct StepText(String);

impl FromStr for StepText {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let raw = input
            .trim()
            .strip_prefix('"')
            .and_then(|stripped| stripped.strip_suffix('"'))
            .unwrap_or(input.trim());

        Ok(Self(raw.to_owned()))
    }
}

impl StepText {
    /// Consumes the step value, yielding the unquoted text.
    pub fn into_inner(self) -> String {
        self.0
    }
}
