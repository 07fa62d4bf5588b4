use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/splitmint.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the expense service.
    pub base_url: String,
    /// Log level for the env filter.
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            level: "info".to_string(),
        }
    }
}

/// Loads configuration: TOML file, then `SPLITMINT_*` environment variables,
/// then CLI overrides, later sources winning.
pub fn load(path: Option<&str>, base_url_override: Option<String>) -> Result<AppConfig> {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("SPLITMINT"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = base_url_override {
        settings.base_url = base_url;
    }

    Ok(settings)
}
