// Host-side tests for locale routing and message tables.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/core/config.rs");
}
mod locale {
    include!("../src/core/locale.rs");
}

use config::*;
use locale::*;

#[test]
fn switching_from_root_prepends_locale() {
    assert_eq!(switch_locale_path("/", Locale::Pl), "/pl/");
    assert_eq!(switch_locale_path("/about", Locale::Pl), "/pl/about");
}

#[test]
fn switching_replaces_existing_locale_segment() {
    assert_eq!(switch_locale_path("/en/about", Locale::Pl), "/pl/about");
    assert_eq!(switch_locale_path("/pl", Locale::En), "/en");
    assert_eq!(switch_locale_path("/pl/a/b/c", Locale::En), "/en/a/b/c");
}

#[test]
fn lookalike_segments_are_not_locales() {
    assert_eq!(switch_locale_path("/english", Locale::Pl), "/pl/english");
    assert_eq!(switch_locale_path("/plan", Locale::En), "/en/plan");
}

#[test]
fn default_locale_is_served_without_prefix() {
    assert_eq!(APP_CONFIG.locale_prefix, LocalePrefix::AsNeeded);
    assert_eq!(localized_path("/pl/about", Locale::En), "/about");
    assert_eq!(localized_path("/pl", Locale::En), "/");
    assert_eq!(localized_path("/", Locale::En), "/");
    assert_eq!(localized_path("/english", Locale::En), "/english");
    assert_eq!(localized_path("/about", Locale::Pl), "/pl/about");
}

#[test]
fn locale_from_pathname_falls_back_to_default() {
    assert_eq!(Locale::from_pathname("/pl/about"), Locale::Pl);
    assert_eq!(Locale::from_pathname("/en"), Locale::En);
    assert_eq!(Locale::from_pathname("/"), APP_CONFIG.default_locale);
    assert_eq!(Locale::from_pathname("/de/x"), Locale::En);
    assert_eq!(Locale::from_pathname(""), Locale::En);
}

#[test]
fn parse_and_display() {
    assert_eq!("pl".parse::<Locale>(), Ok(Locale::Pl));
    assert_eq!(
        "PL".parse::<Locale>(),
        Err(LocaleError::Unsupported("PL".into()))
    );
    assert_eq!(Locale::Pl.to_string(), "pl");
    assert_eq!(Locale::En.menu_label(), "EN");
}

#[test]
fn every_locale_translates_every_key() {
    let keys = [
        MSG_APP_TITLE,
        MSG_TRAILER_LABEL,
        MSG_CHANGE_LANGUAGE,
        MSG_TOGGLE_THEME,
        MSG_CREDITS_MODEL,
    ];
    for &locale in APP_CONFIG.locales {
        let messages = Messages::for_locale(locale);
        for key in keys {
            assert_ne!(messages.get(key), key, "{locale} is missing {key}");
        }
    }
}

#[test]
fn polish_strings() {
    let pl = Messages::for_locale(Locale::Pl);
    assert_eq!(pl.get(MSG_TRAILER_LABEL), "Naczepa");
    assert_eq!(pl.get(MSG_CREDITS_MODEL), "Model ciężarówki:");
    let en = Messages::for_locale(Locale::En);
    assert_eq!(en.get(MSG_TRAILER_LABEL), "Trailer");
    assert_eq!(en.get(MSG_APP_TITLE), APP_CONFIG.name);
}

#[test]
fn unknown_key_echoes_back() {
    let en = Messages::for_locale(Locale::En);
    assert_eq!(en.get("no.such.key"), "no.such.key");
}
