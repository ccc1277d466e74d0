use super::locale::Locale;

/// How the locale appears in URLs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocalePrefix {
    /// Default locale is served without a prefix, others are prefixed.
    AsNeeded,
    Always,
}

#[derive(Clone, Copy, Debug)]
pub struct AppConfig {
    pub name: &'static str,
    pub locales: &'static [Locale],
    pub default_locale: Locale,
    pub locale_prefix: LocalePrefix,
}

pub const APP_CONFIG: AppConfig = AppConfig {
    name: "Pallet Express",
    locales: &[Locale::En, Locale::Pl],
    default_locale: Locale::En,
    locale_prefix: LocalePrefix::AsNeeded,
};
