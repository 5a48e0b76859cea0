use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Simple configuration for veil
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Viewer role assumed when the CLI is not given one explicitly
    #[serde(default = "default_viewer")]
    pub default_viewer: String,

    /// Decorator tokens applied when no --decorate flags are passed
    #[serde(default)]
    pub decorators: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_viewer: default_viewer(),
            decorators: Vec::new(),
        }
    }
}

fn default_viewer() -> String {
    "User".to_string()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "veil", "veil") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.veil/config.toml")
        }
    }
}
