//! Translation tree definitions and translation file loading.

use std::collections::BTreeMap;
use std::path::Path;

use globset::GlobBuilder;
use ignore::WalkBuilder;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

use crate::i18n::I18nError;
use crate::types::Language;

/// A node in a translation tree: either a display string or a nested tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    /// A display string.
    Leaf(String),
    /// A nested group of keys.
    Node(TranslationTree),
}

impl TranslationValue {
    /// The display string, if this is a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(text) => Some(text),
            Self::Node(_) => None,
        }
    }
}

impl From<&str> for TranslationValue {
    fn from(text: &str) -> Self {
        Self::Leaf(text.to_string())
    }
}

impl From<TranslationTree> for TranslationValue {
    fn from(tree: TranslationTree) -> Self {
        Self::Node(tree)
    }
}

/// Nested mapping from key segments to translation values for one language.
///
/// Only strings and objects are accepted when deserializing; numbers, arrays
/// and `null` are rejected so that every leaf is displayable as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTree {
    /// Entries keyed by segment, kept sorted for stable output.
    entries: BTreeMap<String, TranslationValue>,
}

impl TranslationTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a tree from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, I18nError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, I18nError> {
        Ok(serde_json::from_value(value)?)
    }

    #[must_use]
    pub fn get(&self, segment: &str) -> Option<&TranslationValue> {
        self.entries.get(segment)
    }

    pub fn insert(
        &mut self,
        segment: impl Into<String>,
        value: impl Into<TranslationValue>,
    ) -> Option<TranslationValue> {
        self.entries.insert(segment.into(), value.into())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TranslationValue)> {
        self.entries.iter()
    }

    /// Walk the tree segment by segment.
    ///
    /// Returns `None` as soon as a segment is missing or the walk would have to
    /// descend into a leaf.
    #[must_use]
    pub fn walk(&self, segments: &[&str]) -> Option<&TranslationValue> {
        let (first, rest) = segments.split_first()?;
        let mut current = self.entries.get(*first)?;
        for segment in rest {
            match current {
                TranslationValue::Node(tree) => current = tree.entries.get(*segment)?,
                TranslationValue::Leaf(_) => return None,
            }
        }
        Some(current)
    }

    /// Walk the tree and return the string only if the walk ends on a leaf.
    #[must_use]
    pub fn lookup(&self, segments: &[&str]) -> Option<&str> {
        self.walk(segments).and_then(TranslationValue::as_leaf)
    }

    /// Overwrite top-level entries with those of `other`.
    ///
    /// Nested trees are replaced wholesale, never merged.
    pub fn merge_shallow(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Flatten into a `separator`-joined key → string map.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use portfolio_i18n::input::translation::TranslationTree;
    ///
    /// let tree = TranslationTree::from_value(json!({
    ///     "nav": {
    ///         "home": "Home",
    ///         "about": "About"
    ///     }
    /// }))
    /// .unwrap();
    ///
    /// let flattened = tree.flatten(".");
    /// assert_eq!(flattened.get("nav.home"), Some(&"Home".to_string()));
    /// assert_eq!(flattened.get("nav.about"), Some(&"About".to_string()));
    /// ```
    #[must_use]
    pub fn flatten(&self, separator: &str) -> BTreeMap<String, String> {
        let mut result = BTreeMap::new();
        flatten_tree(self, separator, None, &mut result);
        result
    }
}

impl FromIterator<(String, TranslationValue)> for TranslationTree {
    fn from_iter<T: IntoIterator<Item = (String, TranslationValue)>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Recursive step of [`TranslationTree::flatten`].
fn flatten_tree(
    tree: &TranslationTree,
    separator: &str,
    prefix: Option<&str>,
    result: &mut BTreeMap<String, String>,
) {
    for (key, value) in &tree.entries {
        let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
        match value {
            TranslationValue::Node(child) => {
                flatten_tree(child, separator, Some(&full_key), result);
            }
            TranslationValue::Leaf(text) => {
                result.insert(full_key, text.clone());
            }
        }
    }
}

/// Detect the language of a translation file from its path.
///
/// Splits the path by '/' and '.', then searches backwards for a part
/// that is a supported language code.
///
/// # Examples
/// - `locales/en.json` → `en`
/// - `i18n/es/overrides.json` → `es`
/// - `locales/fr.json` → `None`
fn detect_language_from_path(file_path: &Path) -> Option<Language> {
    let path_str = file_path.to_string_lossy();
    path_str.split(&['/', '\\', '.']).rev().find_map(Language::from_code)
}

/// Load a translation file and detect its language.
///
/// # Errors
/// Returns error if the language cannot be detected, or file read or JSON
/// parse fails.
pub fn load_translation_file(file_path: &Path) -> Result<(Language, TranslationTree), I18nError> {
    let language = detect_language_from_path(file_path)
        .ok_or_else(|| I18nError::UndetectedLanguage(file_path.to_path_buf()))?;

    let content = std::fs::read_to_string(file_path)?;
    let tree = TranslationTree::from_json_str(&content)?;

    tracing::debug!(%language, path = ?file_path, keys = tree.len(), "Loaded translation file");
    Ok((language, tree))
}

/// Load every translation file under `dir` whose path relative to `dir`
/// matches `pattern`, sorted by path.
///
/// Files whose language cannot be detected are skipped with a warning. Errors
/// reading a directory entry abort the load.
pub fn load_translation_dir(
    dir: &Path,
    pattern: &str,
) -> Result<Vec<(Language, TranslationTree)>, I18nError> {
    let matcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|source| I18nError::InvalidPattern { pattern: pattern.to_string(), source })?
        .compile_matcher();

    let mut paths = Vec::new();
    for result in WalkBuilder::new(dir).hidden(false).git_ignore(false).follow_links(false).build() {
        let entry = result?;
        if !entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            continue;
        }
        let path = entry.into_path();
        let relative = path.strip_prefix(dir).unwrap_or(&path);
        if matcher.is_match(relative) {
            paths.push(path);
        }
    }
    paths.sort();
    tracing::debug!(?dir, pattern, count = paths.len(), "Found translation files");

    let mut loaded = Vec::with_capacity(paths.len());
    for path in paths {
        match load_translation_file(&path) {
            Ok(entry) => loaded.push(entry),
            Err(I18nError::UndetectedLanguage(path)) => {
                tracing::warn!("Skipping translation file with unknown language: {:?}", path);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(loaded)
}
