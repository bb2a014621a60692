//! Test helpers shared by several test modules.
#![cfg(test)]
#![allow(clippy::expect_used)]

use crate::i18n::{
    Resolver,
    ResolverOptions,
};
use crate::page::{
    Element,
    I18N_ATTR,
    LANG_ATTR,
    Page,
};
use crate::storage::MemoryStorage;
use crate::store::TranslationStore;
use crate::types::Language;

/// Resolver over the built-in catalogs with an empty in-memory storage.
pub(crate) fn create_resolver(language: Language) -> Resolver<MemoryStorage> {
    let store = TranslationStore::builtin().expect("built-in catalogs parse");
    Resolver::new(store, MemoryStorage::new(), language, ResolverOptions::default())
}

/// A page exercising every bind target, one unresolvable key, the
/// language-switch controls and the project grid.
pub(crate) fn create_page() -> Page {
    Page::new(vec![
        Element::new("meta")
            .with_attr("id", "meta-description")
            .with_attr("name", "description")
            .with_attr("content", "")
            .with_attr(I18N_ATTR, "meta.description"),
        Element::new("nav")
            .with_attr("id", "navbar")
            .with_child(
                Element::new("a")
                    .with_attr("id", "home-link")
                    .with_attr("href", "#home")
                    .with_attr(I18N_ATTR, "nav.home")
                    .with_text("Home"),
            )
            .with_child(
                Element::new("button")
                    .with_attr("id", "lang-en")
                    .with_attr("class", "lang-btn")
                    .with_attr(LANG_ATTR, "en"),
            )
            .with_child(
                Element::new("button")
                    .with_attr("id", "lang-es")
                    .with_attr("class", "lang-btn")
                    .with_attr(LANG_ATTR, "es"),
            ),
        Element::new("section")
            .with_attr("id", "home")
            .with_child(
                Element::new("a")
                    .with_attr("id", "github-link")
                    .with_attr("title", "")
                    .with_attr(I18N_ATTR, "hero.github")
                    .with_text("GitHub"),
            )
            .with_child(
                Element::new("span")
                    .with_attr("id", "hero-time")
                    .with_attr(I18N_ATTR, "hero.cta_primary_time"),
            )
            .with_child(
                Element::new("p")
                    .with_attr("id", "legacy")
                    .with_attr(I18N_ATTR, "legacy.banner")
                    .with_text("Keep me"),
            ),
        Element::new("section")
            .with_attr("id", "projects")
            .with_child(
                Element::new("input")
                    .with_attr("id", "search")
                    .with_attr("type", "search")
                    .with_attr("placeholder", "")
                    .with_attr(I18N_ATTR, "projects.filter.all"),
            )
            .with_child(Element::new("span").with_attr("id", "project-count").with_text("0"))
            .with_child(Element::new("div").with_attr("id", "projects-grid")),
        Element::new("form").with_attr("id", "contact").with_child(
            Element::new("input")
                .with_attr("id", "submit")
                .with_attr("type", "submit")
                .with_attr(I18N_ATTR, "contact.cta_button"),
        ),
    ])
}

/// Text content of the element with `id`.
pub(crate) fn text_of<'a>(page: &'a Page, id: &str) -> Option<&'a str> {
    page.find_by_id(id).map(|element| element.text.as_str())
}
