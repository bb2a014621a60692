use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::i18n::ResolverOptions;
use crate::i18n::resolver::DEFAULT_STORAGE_KEY;
use crate::types::Language;

/// A single invalid settings field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "storageKey")
    pub field_path: String,
    /// What is wrong and how to fix it
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Errors raised while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more fields failed validation
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The settings file could not be read
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The settings file is not valid JSON for [`PortfolioSettings`]
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Numbered list of validation errors, one per line.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Site settings read from `.portfolio-i18n.json`.
///
/// Unsupported language codes are rejected while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioSettings {
    /// Key of the persisted language preference.
    pub storage_key: String,

    /// Used when neither a stored preference nor the locale is usable.
    pub default_language: Language,

    /// Consulted when the active language lacks a key.
    pub fallback_language: Language,

    /// Separator between the segments of a translation key.
    pub key_separator: String,

    /// Directory holding `projects.json` and `projects-es.json`.
    pub data_dir: PathBuf,

    /// Optional directory of `<lang>.json` files merged over the built-in
    /// catalogs.
    pub locales_dir: Option<PathBuf>,

    /// Glob, relative to `localesDir`, selecting the files to merge.
    pub locales_pattern: String,

    /// File standing in for the browser's local storage.
    pub preferences_file: PathBuf,
}

impl PortfolioSettings {
    /// # Errors
    /// - Required field is empty
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.storage_key.trim().is_empty() {
            errors.push(ValidationError::new(
                "storageKey",
                "The storage key cannot be empty. Example: \"ai-portfolio-language\"",
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.data_dir.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "dataDir",
                "The data directory cannot be empty. Example: \"assets/data\"",
            ));
        }

        if let Some(dir) = &self.locales_dir
            && dir.as_os_str().is_empty()
        {
            errors.push(ValidationError::new(
                "localesDir",
                "The locales directory cannot be empty. Please specify a directory, or remove this field",
            ));
        }

        if self.locales_pattern.is_empty() {
            errors.push(ValidationError::new(
                "localesPattern",
                "The pattern cannot be empty. Example: \"**/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.locales_pattern) {
            errors.push(ValidationError::new(
                "localesPattern",
                format!("Invalid glob pattern '{}': {e}", self.locales_pattern),
            ));
        }

        if self.preferences_file.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "preferencesFile",
                "The preferences file cannot be empty. Example: \".portfolio-preferences.json\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Resolver options derived from these settings.
    #[must_use]
    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            fallback: self.fallback_language,
            storage_key: self.storage_key.clone(),
            key_separator: self.key_separator.clone(),
        }
    }
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_language: Language::Es,
            fallback_language: Language::Es,
            key_separator: ".".to_string(),
            data_dir: PathBuf::from("assets/data"),
            locales_dir: None,
            locales_pattern: "**/*.json".to_string(),
            preferences_file: PathBuf::from(".portfolio-preferences.json"),
        }
    }
}
