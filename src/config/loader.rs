//! Config file loading.

use std::path::Path;

use super::{
    ConfigError,
    PortfolioSettings,
};

/// Name of the settings file looked up in the site root.
pub const CONFIG_FILE_NAME: &str = ".portfolio-i18n.json";

/// Load settings from the site root.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and parsed
/// - `Ok(None)`: no settings file
/// - `Err(ConfigError)`: read or parse error
pub(super) fn load_from_site_root(site_root: &Path) -> Result<Option<PortfolioSettings>, ConfigError> {
    let config_path = site_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: PortfolioSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
