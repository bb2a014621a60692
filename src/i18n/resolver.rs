//! Dotted-key resolution with fallback, and the page rebinding pass.

use std::collections::BTreeSet;

use super::locale::initial_language;
use crate::input::translation::{
    TranslationTree,
    TranslationValue,
};
use crate::page::{
    BindTarget,
    Page,
};
use crate::storage::PreferenceStorage;
use crate::store::TranslationStore;
use crate::types::Language;

/// Storage key of the persisted language preference.
pub const DEFAULT_STORAGE_KEY: &str = "ai-portfolio-language";

/// Resolver behavior that does not change at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Consulted when the active language lacks a key.
    pub fallback: Language,
    /// Key under which the active language is persisted.
    pub storage_key: String,
    /// Separator between the segments of a dotted key.
    pub key_separator: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            fallback: Language::Es,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            key_separator: ".".to_string(),
        }
    }
}

/// Whether a rebind pass is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolverState {
    /// No rebind is running.
    #[default]
    Idle,
    /// A rebind pass is rewriting the page.
    Rebinding,
}

/// Outcome of one [`Resolver::rebind_page`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RebindReport {
    /// Bound elements whose key resolved and were written.
    pub updated: usize,
    /// Bound elements left untouched because their key did not resolve.
    pub unresolved: usize,
}

/// Resolves translation keys for the active language and binds them to a page.
///
/// The resolver owns the active language; nothing else mutates it. Every
/// operation is synchronous, so a rebind always observes the language set
/// just before it.
#[derive(Debug)]
pub struct Resolver<S> {
    /// Catalogs for every language.
    store: TranslationStore,
    /// Where the active language is persisted.
    storage: S,
    /// The active language.
    active: Language,
    /// Fallback language, storage key and key separator.
    options: ResolverOptions,
    /// Whether a rebind is in progress.
    state: ResolverState,
}

impl<S: PreferenceStorage> Resolver<S> {
    /// Create a resolver with an explicit active language. Nothing is persisted.
    pub const fn new(
        store: TranslationStore,
        storage: S,
        active: Language,
        options: ResolverOptions,
    ) -> Self {
        Self { store, storage, active, options, state: ResolverState::Idle }
    }

    /// Create a resolver for page load.
    ///
    /// The active language is the stored preference if it is supported, else
    /// the language of `locale`, else `default`. The choice is persisted.
    pub fn start(
        store: TranslationStore,
        storage: S,
        options: ResolverOptions,
        locale: Option<&str>,
        default: Language,
    ) -> Self {
        let stored = storage.get(&options.storage_key).unwrap_or_else(|e| {
            tracing::warn!("Failed to read language preference: {e}");
            None
        });
        let active = initial_language(stored.as_deref(), locale, default);
        tracing::debug!(%active, ?stored, ?locale, "Selected startup language");

        let mut resolver = Self::new(store, storage, active, options);
        resolver.persist();
        resolver
    }

    /// Language currently used for resolution.
    #[must_use]
    pub const fn active_language(&self) -> Language {
        self.active
    }

    /// Language consulted when the active one lacks a key.
    #[must_use]
    pub const fn fallback_language(&self) -> Language {
        self.options.fallback
    }

    /// Whether a rebind is in progress.
    #[must_use]
    pub const fn state(&self) -> ResolverState {
        self.state
    }

    /// The catalogs resolution reads from.
    #[must_use]
    pub const fn store(&self) -> &TranslationStore {
        &self.store
    }

    /// The preference storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Shallow-merge extra translations into the store.
    ///
    /// The page is not rebound; call [`Self::rebind_page`] to show them.
    pub fn merge_translations(&mut self, language: Language, partial: TranslationTree) {
        self.store.merge(language, partial);
    }

    /// Resolve a dotted key.
    ///
    /// The active tree is walked first. If a segment is missing (or the walk
    /// hits a leaf early) the walk restarts from the root of the fallback
    /// tree. Only a leaf string is returned; a key naming a subtree is absent.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<&str> {
        let segments: Vec<&str> = key.split(self.options.key_separator.as_str()).collect();
        self.resolve_segments(&segments)
    }

    /// [`Self::resolve`] on an already split key.
    fn resolve_segments(&self, segments: &[&str]) -> Option<&str> {
        self.walk(self.active, segments)
            .or_else(|| self.walk(self.options.fallback, segments))
            .and_then(TranslationValue::as_leaf)
    }

    /// Walk the tree of `language`, if the store has one.
    fn walk(&self, language: Language, segments: &[&str]) -> Option<&TranslationValue> {
        self.store.get(language).and_then(|tree| tree.walk(segments))
    }

    /// Resolve a key for display, returning the key itself when it is missing
    /// or its translation is empty.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.displayable(key).map_or_else(
            || {
                tracing::debug!(key, language = %self.active, "Missing translation");
                key.to_string()
            },
            str::to_string,
        )
    }

    /// [`Self::resolve`], treating an empty string as unresolved.
    fn displayable(&self, key: &str) -> Option<&str> {
        self.resolve(key).filter(|text| !text.is_empty())
    }

    /// Switch the active language, persist it and rebind the page.
    ///
    /// An unsupported tag is ignored with a warning. Returns the language
    /// active after the call.
    pub fn set_active_language(&mut self, page: &mut Page, tag: &str) -> Language {
        let Some(language) = Language::from_code(tag) else {
            tracing::warn!("Language {:?} is not supported, keeping {}", tag, self.active);
            return self.active;
        };

        self.active = language;
        self.persist();
        self.rebind_page(page);
        language
    }

    /// Handle a click on a language-switch control carrying `tag`.
    ///
    /// Clicking the control of the active language does nothing.
    pub fn handle_language_click(&mut self, page: &mut Page, tag: &str) -> Language {
        if Language::from_code(tag) == Some(self.active) {
            tracing::debug!("Language {} already active", self.active);
            return self.active;
        }
        self.set_active_language(page, tag)
    }

    /// Rewrite every bound element of the page for the active language.
    ///
    /// Elements whose key does not resolve, or resolves to an empty string,
    /// keep their current content. Also
    /// updates the document title (`meta.title`), the root `lang` and the
    /// `active`/`aria-pressed` state of the language-switch controls.
    pub fn rebind_page(&mut self, page: &mut Page) -> RebindReport {
        self.state = ResolverState::Rebinding;

        let active = self.active;
        let mut report = RebindReport::default();
        page.for_each_element_mut(|element| {
            if let Some(tag) = element.lang_control() {
                let pressed = tag == active.code();
                element.toggle_class("active", pressed);
                element.set_attr("aria-pressed", if pressed { "true" } else { "false" });
            }

            let Some(key) = element.i18n_key() else {
                return;
            };
            let target = BindTarget::of(element);
            if let Some(text) = self.displayable(key) {
                target.write(element, text);
                report.updated += 1;
            } else {
                tracing::trace!(key, "Leaving unresolved element untouched");
                report.unresolved += 1;
            }
        });

        if let Some(title) = self.resolve_segments(&["meta", "title"]).filter(|title| !title.is_empty()) {
            title.clone_into(&mut page.title);
        }
        active.code().clone_into(&mut page.lang);

        self.state = ResolverState::Idle;
        tracing::debug!(
            language = %active,
            updated = report.updated,
            unresolved = report.unresolved,
            "Rebound page"
        );
        report
    }

    /// Bound keys that do not resolve even in the fallback language.
    #[must_use]
    pub fn missing_keys(&self, page: &Page) -> Vec<String> {
        let separator = self.options.key_separator.as_str();
        let fallback = self.store.get(self.options.fallback);
        let mut missing = BTreeSet::new();
        page.for_each_element(|element| {
            let Some(key) = element.i18n_key() else {
                return;
            };
            let segments: Vec<&str> = key.split(separator).collect();
            if fallback.and_then(|tree| tree.lookup(&segments)).is_none() {
                missing.insert(key.to_string());
            }
        });
        missing.into_iter().collect()
    }

    /// Store the active language, logging failures.
    fn persist(&mut self) {
        if let Err(e) = self.storage.set(&self.options.storage_key, self.active.code()) {
            tracing::warn!("Failed to store language preference: {e}");
        }
    }
}
