//! Project list: loading the per-language feed and rendering cards.

/// Card elements and grid rendering.
mod card;
/// Feed loading and sample data.
mod feed;

pub use card::{
    PROJECT_COUNT_ID,
    PROJECTS_GRID_ID,
    category_slug,
    project_card,
    render_project_cards,
    status_class,
    status_key,
    status_text,
    update_project_count,
};
pub use feed::{
    FeedSource,
    Project,
    ProjectError,
    ProjectFeed,
    feed_file,
    load_projects,
    read_projects,
    sample_projects,
};
