// Supported locales, locale-aware paths and the UI message tables.

use super::config::{LocalePrefix, APP_CONFIG};
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Pl,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("unsupported locale `{0}`")]
    Unsupported(String),
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pl => "pl",
        }
    }

    /// Label shown in the language menu.
    pub fn menu_label(self) -> String {
        self.as_str().to_uppercase()
    }

    /// Locale named by the first path segment, falling back to the default.
    pub fn from_pathname(pathname: &str) -> Locale {
        pathname
            .split('/')
            .nth(1)
            .and_then(|seg| seg.parse().ok())
            .unwrap_or(APP_CONFIG.default_locale)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        APP_CONFIG
            .locales
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| LocaleError::Unsupported(s.to_string()))
    }
}

/// Path to navigate to when switching to `locale`.
///
/// A leading locale segment is replaced in place; otherwise the locale is
/// prepended to the whole path.
pub fn switch_locale_path(pathname: &str, locale: Locale) -> String {
    let mut segments: SmallVec<[&str; 8]> = pathname.split('/').collect();
    let has_locale = segments
        .get(1)
        .map(|s| !s.is_empty() && s.parse::<Locale>().is_ok())
        .unwrap_or(false);
    if has_locale {
        segments[1] = locale.as_str();
        segments.join("/")
    } else {
        format!("/{}{}", locale, pathname)
    }
}

/// Canonical path for `locale` under the configured prefix mode.
///
/// With [`LocalePrefix::AsNeeded`] the default locale's prefix is dropped.
pub fn localized_path(pathname: &str, locale: Locale) -> String {
    let switched = switch_locale_path(pathname, locale);
    if APP_CONFIG.locale_prefix == LocalePrefix::AsNeeded && locale == APP_CONFIG.default_locale {
        let prefix = format!("/{}", locale);
        if let Some(rest) = switched.strip_prefix(prefix.as_str()) {
            if rest.is_empty() {
                return "/".to_string();
            }
            if rest.starts_with('/') {
                return rest.to_string();
            }
        }
    }
    switched
}

pub const MSG_APP_TITLE: &str = "app.title";
pub const MSG_TRAILER_LABEL: &str = "sidebar.trailer";
pub const MSG_CHANGE_LANGUAGE: &str = "header.change_language";
pub const MSG_TOGGLE_THEME: &str = "header.toggle_theme";
pub const MSG_CREDITS_MODEL: &str = "credits.truck_model";

const EN: &[(&str, &str)] = &[
    (MSG_APP_TITLE, "Pallet Express"),
    (MSG_TRAILER_LABEL, "Trailer"),
    (MSG_CHANGE_LANGUAGE, "Change language"),
    (MSG_TOGGLE_THEME, "Toggle light/dark mode"),
    (MSG_CREDITS_MODEL, "Truck Model:"),
];

const PL: &[(&str, &str)] = &[
    (MSG_APP_TITLE, "Pallet Express"),
    (MSG_TRAILER_LABEL, "Naczepa"),
    (MSG_CHANGE_LANGUAGE, "Zmień język"),
    (MSG_TOGGLE_THEME, "Przełącz tryb jasny/ciemny"),
    (MSG_CREDITS_MODEL, "Model ciężarówki:"),
];

pub struct Messages {
    table: FnvHashMap<&'static str, &'static str>,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> Self {
        let entries = match locale {
            Locale::En => EN,
            Locale::Pl => PL,
        };
        Self {
            table: entries.iter().copied().collect(),
        }
    }

    /// Message for `key`; unknown keys echo the key back so gaps are visible.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.get(key).copied().unwrap_or(key)
    }
}
