//! End-to-end tests of the site boot and language switch.

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::fs;

use portfolio_i18n::config::{
    CONFIG_FILE_NAME,
    ConfigManager,
};
use portfolio_i18n::page::{
    Element,
    I18N_ATTR,
    LANG_ATTR,
    Page,
};
use portfolio_i18n::site::{
    Site,
    read_page,
    write_page,
};
use portfolio_i18n::storage::{
    FileStorage,
    PreferenceStorage,
};
use portfolio_i18n::types::Language;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn landing_page() -> Page {
    Page::new(vec![
        Element::new("nav")
            .with_child(Element::new("a").with_attr("id", "nav-projects").with_attr(I18N_ATTR, "nav.projects"))
            .with_child(Element::new("button").with_attr("id", "btn-en").with_attr(LANG_ATTR, "en"))
            .with_child(Element::new("button").with_attr("id", "btn-es").with_attr(LANG_ATTR, "es")),
        Element::new("h1").with_attr("id", "headline").with_attr(I18N_ATTR, "hero.subtitle"),
        Element::new("span").with_attr("id", "project-count"),
        Element::new("div").with_attr("id", "projects-grid"),
    ])
}

fn text<'a>(page: &'a Page, id: &str) -> &'a str {
    page.find_by_id(id).map(|e| e.text.as_str()).unwrap_or_default()
}

fn setup_site(config_json: &str) -> (TempDir, ConfigManager) {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_json).unwrap();
    let mut config = ConfigManager::new();
    config.load_settings(Some(temp_dir.path().to_path_buf())).unwrap();
    (temp_dir, config)
}

#[tokio::test]
async fn test_preference_survives_restart() {
    let (temp_dir, config) = setup_site(r#"{"preferencesFile": "prefs.json"}"#);
    let prefs = temp_dir.path().join("prefs.json");

    let mut site = Site::boot(&config, FileStorage::new(&prefs), Some("es-MX"), landing_page()).await.unwrap();
    assert_eq!(site.resolver().active_language(), Language::Es);
    site.switch_language("en").await;

    // A new visit with a Spanish locale still starts in English.
    let site = Site::boot(&config, FileStorage::new(&prefs), Some("es-MX"), landing_page()).await.unwrap();
    assert_eq!(site.resolver().active_language(), Language::En);
    assert_eq!(text(site.page(), "nav-projects"), "Projects");
    assert_eq!(
        FileStorage::new(&prefs).get("ai-portfolio-language").unwrap().as_deref(),
        Some("en")
    );
}

#[tokio::test]
async fn test_locale_overrides_and_project_feed() {
    let (temp_dir, config) = setup_site(r#"{"localesDir": "i18n", "dataDir": "data", "defaultLanguage": "en"}"#);
    fs::create_dir_all(temp_dir.path().join("i18n")).unwrap();
    fs::write(temp_dir.path().join("i18n/es.json"), r#"{"nav": {"projects": "Experimentos"}}"#).unwrap();
    fs::create_dir_all(temp_dir.path().join("data")).unwrap();
    fs::write(
        temp_dir.path().join("data/projects-es.json"),
        r#"[{"id": 9, "title": "Bot", "description": "d", "complexity": "Expert",
             "projectCategory": "AI/ML", "category": "nlp", "github": "https://github.com/example/bot",
             "demo": "https://bot.example.com"}]"#,
    )
    .unwrap();

    let site = Site::boot(
        &config,
        FileStorage::new(temp_dir.path().join("prefs.json")),
        Some("es-CO"),
        landing_page(),
    )
    .await
    .unwrap();

    let page = site.page();
    assert_eq!(text(page, "nav-projects"), "Experimentos");
    assert_eq!(text(page, "project-count"), "1");
    assert_eq!(page.lang, "es");
    let grid = page.find_by_id("projects-grid").unwrap();
    assert_eq!(grid.children.len(), 1);

    let mut link_texts = Vec::new();
    page.for_each_element(|element| {
        if element.has_class("card-link") {
            link_texts.push(element.text.clone());
        }
    });
    assert_eq!(link_texts, vec!["Ver Código".to_string(), "Demo en Vivo".to_string()]);
}

#[tokio::test]
async fn test_rendered_page_written_to_disk() {
    let (temp_dir, config) = setup_site("{}");
    let input = temp_dir.path().join("index.json");
    write_page(&input, &landing_page()).unwrap();

    let page = read_page(&input).unwrap();
    let mut site =
        Site::boot(&config, FileStorage::new(temp_dir.path().join("prefs.json")), None, page).await.unwrap();
    site.switch_language("en").await;
    let output = temp_dir.path().join("index.rendered.json");
    write_page(&output, &site.into_page()).unwrap();

    let rendered = read_page(&output).unwrap();
    assert_eq!(rendered.lang, "en");
    assert_eq!(rendered.title, "AI Projects Portfolio");
    assert_eq!(text(&rendered, "project-count"), "4");
    let en = rendered.find_by_id("btn-en").unwrap();
    assert_eq!(en.attr("aria-pressed"), Some("true"));
}
