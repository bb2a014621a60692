//! Locale detection and startup language selection.

use crate::types::Language;

/// Read the OS (or browser, under wasm) locale, e.g. `"es-CO"`.
#[must_use]
pub fn system_locale() -> Option<String> {
    sys_locale::get_locale()
}

/// Map a locale to a supported language.
///
/// Only the primary subtag is considered (`es-CO` → `es`, `en_US` → `en`).
/// Anything unsupported or absent yields `default`.
#[must_use]
pub fn detect_language(locale: Option<&str>, default: Language) -> Language {
    locale
        .and_then(|locale| locale.split(['-', '_']).next())
        .map(str::to_ascii_lowercase)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or(default)
}

/// Choose the language to start with.
///
/// A valid stored preference wins, then the detected locale, then `default`.
#[must_use]
pub fn initial_language(stored: Option<&str>, locale: Option<&str>, default: Language) -> Language {
    if let Some(stored) = stored {
        if let Some(language) = Language::from_code(stored) {
            return language;
        }
        tracing::debug!("Ignoring unsupported stored language: {:?}", stored);
    }
    detect_language(locale, default)
}
