use super::feed::Project;
use crate::i18n::Resolver;
use crate::page::{
    Element,
    I18N_ATTR,
    Page,
};
use crate::storage::PreferenceStorage;

/// Id of the element holding the project cards.
pub const PROJECTS_GRID_ID: &str = "projects-grid";
/// Id of the element showing the number of projects.
pub const PROJECT_COUNT_ID: &str = "project-count";

/// CSS suffix for a project category: lowercased, with the first `/` and the
/// first space turned into `-`.
#[must_use]
pub fn category_slug(category: &str) -> String {
    category.to_lowercase().replacen('/', "-", 1).replacen(' ', "-", 1)
}

/// CSS class for a project status. Unknown statuses render as completed.
#[must_use]
pub fn status_class(status: &str) -> &'static str {
    match status {
        "in-progress" => "status-progress",
        "archived" => "status-archived",
        _ => "status-completed",
    }
}

/// Catalog key of a project status label.
///
/// Feed statuses are kebab-case while catalog keys are camelCase. Unknown
/// statuses have no key.
#[must_use]
pub fn status_key(status: &str) -> Option<&'static str> {
    match status {
        "completed" => Some("projects.status.completed"),
        "in-progress" => Some("projects.status.inProgress"),
        "archived" => Some("projects.status.archived"),
        _ => None,
    }
}

/// Translated label for a project status, or the status itself when the
/// catalogs have no entry for it.
#[must_use]
pub fn status_text<S: PreferenceStorage>(resolver: &Resolver<S>, status: &str) -> String {
    status_key(status)
        .and_then(|key| resolver.resolve(key))
        .filter(|text| !text.is_empty())
        .unwrap_or(status)
        .to_string()
}

/// Status tag of a card. Known statuses are bound to their catalog label.
fn status_tag(status: &str) -> Element {
    let tag = Element::new("span")
        .with_attr("class", format!("status-tag {}", status_class(status)))
        .with_text(status);
    match status_key(status) {
        Some(key) => tag.with_attr(I18N_ATTR, key),
        None => tag,
    }
}

/// External link opening in a new tab, labelled by the catalog key `key`.
fn link(href: &str, class: &str, key: &str, text: &str, label: String) -> Element {
    Element::new("a")
        .with_attr("href", href)
        .with_attr("class", class)
        .with_attr("target", "_blank")
        .with_attr("rel", "noopener noreferrer")
        .with_attr("aria-label", label)
        .with_attr(I18N_ATTR, key)
        .with_text(text)
}

/// Build the card for one project.
///
/// Link labels are bound to `projects.links.*`, so they only show translated
/// text once the page is rebound.
#[must_use]
pub fn project_card(project: &Project) -> Element {
    let complexity = Element::new("span")
        .with_attr("class", format!("complexity-tag complexity-{}", project.complexity.to_lowercase()))
        .with_attr("aria-label", format!("Complexity: {}", project.complexity))
        .with_text(&project.complexity);
    let category = Element::new("span")
        .with_attr("class", format!("category-tag category-{}", category_slug(&project.project_category)))
        .with_attr("aria-label", format!("Category: {}", project.project_category))
        .with_text(&project.project_category);
    let mut tags = Element::new("div").with_attr("class", "card-tags").with_child(complexity).with_child(category);
    if let Some(status) = &project.status {
        tags = tags.with_child(status_tag(status));
    }

    let mut actions = Element::new("div").with_attr("class", "card-actions").with_child(link(
        &project.github,
        "card-link primary",
        "projects.links.code",
        "View Code",
        format!("View code for {} on GitHub", project.title),
    ));
    if let Some(demo) = project.demo_url() {
        actions = actions.with_child(link(
            demo,
            "card-link",
            "projects.links.demo",
            "Demo",
            format!("View live demo of {}", project.title),
        ));
    }

    let content = Element::new("div")
        .with_attr("class", "card-content")
        .with_child(Element::new("h3").with_attr("class", "card-title").with_text(&project.title))
        .with_child(
            Element::new("p").with_attr("class", "card-description").with_text(&project.description),
        )
        .with_child(tags)
        .with_child(actions);

    Element::new("article")
        .with_attr("class", "experiment-card")
        .with_attr("data-category", &project.category)
        .with_attr("aria-label", format!("Project: {}", project.title))
        .with_child(content)
}

/// Replace the contents of `#projects-grid` with one card per project.
///
/// Returns `false` when the page has no grid.
pub fn render_project_cards(page: &mut Page, projects: &[Project]) -> bool {
    let Some(grid) = page.find_by_id_mut(PROJECTS_GRID_ID) else {
        tracing::debug!("Page has no #{PROJECTS_GRID_ID}, skipping project cards");
        return false;
    };
    grid.children = projects.iter().map(project_card).collect();
    tracing::debug!(count = projects.len(), "Rendered project cards");
    true
}

/// Write the project count into `#project-count`, if present.
pub fn update_project_count(page: &mut Page, count: usize) {
    if let Some(counter) = page.find_by_id_mut(PROJECT_COUNT_ID) {
        counter.text = count.to_string();
    }
}
