use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or using the translation layer
#[derive(Error, Debug)]
pub enum I18nError {
    /// The requested tag is not one of the supported languages
    #[error("Unknown language: {0:?}")]
    UnknownLanguage(String),
    /// A translation file name carries no supported language code
    #[error("Cannot detect language of translation file: {0:?}")]
    UndetectedLanguage(PathBuf),
    /// Failed to read a translation file
    #[error("Failed to read translation file: {0}")]
    Io(#[from] std::io::Error),
    /// The locales pattern is not a valid glob
    #[error("Invalid locales pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    /// Failed to walk the locales directory
    #[error("Failed to walk locales directory: {0}")]
    Walk(#[from] ignore::Error),
    /// Translation data is not a tree of strings
    #[error("Failed to parse translation data: {0}")]
    Parse(#[from] serde_json::Error),
}
