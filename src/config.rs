use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_DIR: &str = "vibecheck";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_API_URL: &str = "https://api.vibecheck.dev";

/// Global CLI configuration, stored in the user config directory
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Effective configuration: config file if present, defaults otherwise.
    /// `VIBECHECK_API_URL` overrides either.
    pub fn load() -> Result<Self> {
        let mut config = match Self::path() {
            Ok(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Malformed config at {}", path.display()))?
            }
            _ => Self::default(),
        };
        if let Ok(url) = std::env::var("VIBECHECK_API_URL") {
            if !url.is_empty() {
                config.api_url = url;
            }
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    fn path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| anyhow!("No user config directory"))?;
        Ok(dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }
}
