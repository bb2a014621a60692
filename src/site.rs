//! Site controller: boot sequence and language-switch handling.

use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use crate::config::{
    ConfigError,
    ConfigManager,
};
use crate::i18n::{
    I18nError,
    Resolver,
};
use crate::input::translation::load_translation_dir;
use crate::page::Page;
use crate::projects::{
    FeedSource,
    Project,
    load_projects,
    render_project_cards,
    update_project_count,
};
use crate::storage::{
    PreferenceStorage,
    StorageError,
};
use crate::store::TranslationStore;
use crate::types::Language;

/// Errors that stop a page from being rendered.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Invalid or unreadable settings
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Broken translation overrides
    #[error(transparent)]
    I18n(#[from] I18nError),

    /// Preference storage failure
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The page file could not be read or written
    #[error("Failed to access page {path:?}: {source}")]
    PageIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The page file is not a valid page
    #[error("Failed to parse page {path:?}: {source}")]
    PageParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Owns the resolver, the page and the loaded projects.
#[derive(Debug)]
pub struct Site<S> {
    /// Sole owner of the active language.
    resolver: Resolver<S>,
    /// The page being rendered.
    page: Page,
    /// Directory holding the project feeds.
    data_dir: PathBuf,
    /// Projects currently rendered in the grid.
    projects: Vec<Project>,
    /// Where `projects` came from.
    feed_source: FeedSource,
}

/// Built-in catalogs with every file of `locales_dir` matching `pattern`
/// merged over them.
pub fn build_store(locales_dir: Option<&Path>, pattern: &str) -> Result<TranslationStore, I18nError> {
    let mut store = TranslationStore::builtin()?;
    if let Some(dir) = locales_dir {
        for (language, tree) in load_translation_dir(dir, pattern)? {
            store.merge(language, tree);
        }
    }
    Ok(store)
}

impl<S: PreferenceStorage + Send> Site<S> {
    /// Run the page-load sequence.
    ///
    /// Picks the start language from `storage`, `locale` and the configured
    /// default, binds the page, then loads and renders the project feed for
    /// that language. Only a broken locales directory is fatal.
    pub async fn boot(
        config: &ConfigManager,
        storage: S,
        locale: Option<&str>,
        page: Page,
    ) -> Result<Self, SiteError> {
        let settings = config.get_settings();
        let locales_dir = settings.locales_dir.as_deref().map(|dir| config.resolve_path(dir));
        let store = build_store(locales_dir.as_deref(), &settings.locales_pattern)?;

        let resolver = Resolver::start(
            store,
            storage,
            settings.resolver_options(),
            locale,
            settings.default_language,
        );
        tracing::info!(language = %resolver.active_language(), "Booting site");

        let mut site = Self {
            resolver,
            page,
            data_dir: config.resolve_path(&settings.data_dir),
            projects: Vec::new(),
            feed_source: FeedSource::Fallback,
        };
        site.resolver.rebind_page(&mut site.page);
        for key in site.resolver.missing_keys(&site.page) {
            tracing::warn!(key, "Bound key has no translation in any language");
        }

        site.refresh_projects().await;
        Ok(site)
    }

    /// Handle a click on the language-switch control for `tag`.
    ///
    /// Switching reloads the project feed for the new language. Clicking the
    /// active language or an unsupported tag changes nothing.
    pub async fn switch_language(&mut self, tag: &str) -> Language {
        let before = self.resolver.active_language();
        let active = self.resolver.handle_language_click(&mut self.page, tag);
        if active != before {
            tracing::info!(from = %before, to = %active, "Switched language");
            self.refresh_projects().await;
        }
        active
    }

    /// Load the feed for the active language, render it and rebind.
    async fn refresh_projects(&mut self) {
        let feed = load_projects(&self.data_dir, self.resolver.active_language()).await;
        render_project_cards(&mut self.page, &feed.projects);
        self.resolver.rebind_page(&mut self.page);
        update_project_count(&mut self.page, feed.projects.len());

        self.projects = feed.projects;
        self.feed_source = feed.source;
    }

    #[must_use]
    pub const fn resolver(&self) -> &Resolver<S> {
        &self.resolver
    }

    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn into_page(self) -> Page {
        self.page
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub const fn feed_source(&self) -> FeedSource {
        self.feed_source
    }
}

/// Read a page from a JSON file.
pub fn read_page(path: &Path) -> Result<Page, SiteError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| SiteError::PageIo { path: path.to_path_buf(), source })?;
    Page::from_json_str(&content).map_err(|source| SiteError::PageParse { path: path.to_path_buf(), source })
}

/// Write a page as pretty JSON.
pub fn write_page(path: &Path, page: &Page) -> Result<(), SiteError> {
    let json = page
        .to_json_string()
        .map_err(|source| SiteError::PageParse { path: path.to_path_buf(), source })?;
    std::fs::write(path, json).map_err(|source| SiteError::PageIo { path: path.to_path_buf(), source })
}
