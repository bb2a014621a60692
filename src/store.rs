//! Per-language translation trees.

use std::collections::{
    BTreeMap,
    BTreeSet,
};

use crate::i18n::I18nError;
use crate::input::translation::TranslationTree;
use crate::types::Language;

/// Built-in English catalog.
const EN_CATALOG: &str = include_str!("../assets/locales/en.json");
/// Built-in Spanish catalog.
const ES_CATALOG: &str = include_str!("../assets/locales/es.json");

/// Holds one [`TranslationTree`] per language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationStore {
    /// One tree per language that has a catalog.
    trees: BTreeMap<Language, TranslationTree>,
}

impl TranslationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the store from the catalogs embedded in the binary.
    pub fn builtin() -> Result<Self, I18nError> {
        let mut store = Self::new();
        store.insert(Language::En, TranslationTree::from_json_str(EN_CATALOG)?);
        store.insert(Language::Es, TranslationTree::from_json_str(ES_CATALOG)?);
        Ok(store)
    }

    #[must_use]
    pub fn get(&self, language: Language) -> Option<&TranslationTree> {
        self.trees.get(&language)
    }

    /// Replace a language's tree.
    pub fn insert(&mut self, language: Language, tree: TranslationTree) {
        self.trees.insert(language, tree);
    }

    /// Shallow-merge `partial` into the tree for `language`.
    ///
    /// Top-level keys of `partial` overwrite existing ones; deeper keys are not
    /// merged, so overriding one string means supplying its whole subtree.
    pub fn merge(&mut self, language: Language, partial: TranslationTree) {
        tracing::debug!(%language, keys = partial.len(), "Merging translations");
        self.trees.entry(language).or_default().merge_shallow(partial);
    }

    /// Languages that currently have a tree.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.trees.keys().copied()
    }

    /// Leaf keys present in `reference` but missing from `language`.
    #[must_use]
    pub fn untranslated_keys(
        &self,
        language: Language,
        reference: Language,
        separator: &str,
    ) -> Vec<String> {
        let Some(reference_tree) = self.get(reference) else {
            return Vec::new();
        };
        let present: BTreeSet<String> = self
            .get(language)
            .map(|tree| tree.flatten(separator).into_keys().collect())
            .unwrap_or_default();

        reference_tree
            .flatten(separator)
            .into_keys()
            .filter(|key| !present.contains(key))
            .collect()
    }
}
