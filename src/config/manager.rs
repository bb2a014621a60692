//! Settings lifecycle.

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    PortfolioSettings,
    loader,
};

/// Holds the validated settings and the site root they were loaded from.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Settings in effect; defaults until a load succeeds.
    current_settings: PortfolioSettings,

    /// Directory relative paths in the settings are resolved against.
    site_root: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: PortfolioSettings::default(), site_root: None }
    }

    /// Load and validate the settings of a site.
    ///
    /// A missing settings file means default settings.
    pub fn load_settings(&mut self, site_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for site: {:?}", site_root);

        let settings = if let Some(root) = &site_root {
            loader::load_from_site_root(root)?.map_or_else(PortfolioSettings::default, |s| {
                tracing::debug!("Loaded site settings: {:?}", s);
                s
            })
        } else {
            PortfolioSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.site_root = site_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &PortfolioSettings {
        &self.current_settings
    }

    /// Resolve a configured path against the site root.
    #[must_use]
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.site_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::CONFIG_FILE_NAME;
    use crate::types::Language;

    #[rstest]
    fn new_creates_default_settings() {
        let manager = ConfigManager::new();

        assert_eq!(manager.get_settings(), &PortfolioSettings::default());
        assert_eq!(manager.resolve_path(Path::new("data")), PathBuf::from("data"));
    }

    #[rstest]
    fn load_settings_without_site_root() {
        let mut manager = ConfigManager::new();

        let result = manager.load_settings(None);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().key_separator, ".");
    }

    #[rstest]
    fn load_settings_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"{"defaultLanguage": "en", "dataDir": "data"}"#,
        )
        .unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().default_language, Language::En);
        assert_eq!(
            manager.resolve_path(&manager.get_settings().data_dir),
            temp_dir.path().join("data")
        );
    }

    #[rstest]
    fn load_settings_rejects_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"storageKey": ""}"#).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        // The previous settings are kept.
        assert_eq!(manager.get_settings(), &PortfolioSettings::default());
    }

    #[rstest]
    fn resolve_path_keeps_absolute_paths() {
        let mut manager = ConfigManager::new();
        manager.load_settings(Some(PathBuf::from("/site"))).unwrap();

        assert_eq!(manager.resolve_path(Path::new("/abs/data")), PathBuf::from("/abs/data"));
        assert_eq!(manager.resolve_path(Path::new("data")), PathBuf::from("/site/data"));
    }
}
