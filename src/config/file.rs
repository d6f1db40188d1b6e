use crate::utils::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file contents (`config.toml`). Every key is optional in the file;
/// defaults mirror the bootstrap file written on first run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub weekly_hours: f64,
    /// dd/mm/yyyy
    pub start_date: String,
    pub workspace: Option<String>,
    pub client: String,
    pub project_list: Vec<String>,
    pub whitelist: bool,
    pub lenient_durations: bool,
    pub holiday_country: Option<String>,
    pub holiday_prov: Option<String>,
    pub holiday_state: Option<String>,
    pub holiday_file: PathBuf,
    pub api_url: String,
    pub api_key_file: PathBuf,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            weekly_hours: 20.0,
            start_date: "01/01/2022".to_string(),
            workspace: None,
            client: "Your Client".to_string(),
            project_list: Vec::new(),
            whitelist: false,
            lenient_durations: false,
            holiday_country: None,
            holiday_prov: None,
            holiday_state: None,
            holiday_file: PathBuf::from("holidays.toml"),
            api_url: "https://api.clockify.me/api/v1".to_string(),
            api_key_file: PathBuf::from("clockify.api.key"),
        }
    }
}

impl FileConfig {
    /// Loads the config file, writing a default one first if it is missing.
    pub fn load_or_bootstrap(path: &Path) -> Result<Self> {
        if !path.is_file() {
            tracing::info!("{} does not exist, creating new one", path.display());
            let default = Self::default();
            let content =
                toml::to_string_pretty(&default).map_err(|e| TrackerError::ConfigError {
                    message: format!("failed to serialize default config: {}", e),
                })?;
            std::fs::write(path, content)?;
            tracing::info!("{} created", path.display());
            return Ok(default);
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TrackerError::ConfigError {
            message: format!("failed to parse {}: {}", path.display(), e),
        })
    }
}
