use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::Language;

/// Errors reading a project feed. Always recovered with [`sample_projects`].
#[derive(Error, Debug)]
pub enum ProjectError {
    /// The feed file could not be read
    #[error("Failed to read project feed {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The feed file is not a list of projects
    #[error("Failed to parse project feed {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One entry of the project feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// `Beginner` to `Expert`; lowercased into a CSS class.
    pub complexity: String,
    /// Display category such as `AI/ML`.
    pub project_category: String,
    /// Filter category written to `data-category`.
    pub category: String,
    /// Repository URL.
    pub github: String,
    /// Live demo URL. An empty string means no demo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    /// `completed`, `in-progress` or `archived`; feeds usually omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Project {
    /// The demo URL, treating an empty string as absent.
    #[must_use]
    pub fn demo_url(&self) -> Option<&str> {
        self.demo.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Where a [`ProjectFeed`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSource {
    /// Read from the data directory.
    File,
    /// The feed was unavailable; built-in sample data was used.
    Fallback,
}

/// Projects to render and their origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFeed {
    /// Projects in feed order.
    pub projects: Vec<Project>,
    /// Whether the feed file or the sample data was used.
    pub source: FeedSource,
}

/// Feed file name for a language.
#[must_use]
pub const fn feed_file(language: Language) -> &'static str {
    match language {
        Language::Es => "projects-es.json",
        Language::En => "projects.json",
    }
}

/// Read and parse the feed for `language`.
pub async fn read_projects(data_dir: &Path, language: Language) -> Result<Vec<Project>, ProjectError> {
    let path = data_dir.join(feed_file(language));
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| ProjectError::Io { path: path.clone(), source })?;
    serde_json::from_str(&content).map_err(|source| ProjectError::Parse { path, source })
}

/// Load the feed for `language`, substituting sample data on any failure.
///
/// There is no retry.
pub async fn load_projects(data_dir: &Path, language: Language) -> ProjectFeed {
    match read_projects(data_dir, language).await {
        Ok(projects) => {
            tracing::debug!(%language, count = projects.len(), "Loaded projects");
            ProjectFeed { projects, source: FeedSource::File }
        }
        Err(e) => {
            tracing::error!("Error loading projects: {e}");
            ProjectFeed { projects: sample_projects(), source: FeedSource::Fallback }
        }
    }
}

/// One built-in project; `links` is the GitHub URL and the demo URL.
fn sample(
    id: u32,
    title: &str,
    description: &str,
    complexity: &str,
    project_category: &str,
    category: &str,
    links: (&str, &str),
) -> Project {
    let (github, demo) = links;
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        complexity: complexity.to_string(),
        project_category: project_category.to_string(),
        category: category.to_string(),
        github: github.to_string(),
        demo: Some(demo.to_string()),
        status: None,
    }
}

/// Built-in projects shown when the feed cannot be loaded.
#[must_use]
pub fn sample_projects() -> Vec<Project> {
    vec![
        sample(
            1,
            "AI Chat Assistant",
            "An intelligent chatbot built with natural language processing capabilities and contextual understanding.",
            "Advanced",
            "AI/ML",
            "nlp",
            ("https://github.com/yourusername/ai-chat-assistant", "https://ai-chat-demo.vercel.app"),
        ),
        sample(
            2,
            "Computer Vision Classifier",
            "Real-time image classification system using deep learning for object detection and recognition.",
            "Expert",
            "AI/ML",
            "computer-vision",
            ("https://github.com/yourusername/cv-classifier", ""),
        ),
        sample(
            3,
            "ML Prediction Dashboard",
            "Interactive web dashboard for machine learning model predictions with real-time data visualization.",
            "Intermediate",
            "Web App",
            "machine-learning",
            ("https://github.com/yourusername/ml-dashboard", "https://ml-dashboard-demo.streamlit.app"),
        ),
        sample(
            4,
            "Text Summarization Tool",
            "Automatic text summarization using transformer models for extracting key insights from documents.",
            "Advanced",
            "AI/ML",
            "nlp",
            ("https://github.com/yourusername/text-summarizer", "https://text-summary-tool.vercel.app"),
        ),
    ]
}
