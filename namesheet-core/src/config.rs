use crate::mapping::HeaderMode;
use crate::plan::DuplicatePolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the mapping spreadsheet looked up inside the target folder.
pub const DEFAULT_MAPPING_FILE: &str = "rename.xlsx";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Mapping file name, relative to the target folder
    #[serde(default = "default_mapping_file")]
    pub mapping_file: String,

    /// Header detection: "auto", "present", or "absent"
    #[serde(default)]
    pub header: HeaderMode,

    /// Duplicate old names: "last-wins" or "reject"
    #[serde(default)]
    pub duplicates: DuplicatePolicy,

    /// Default preview format: "summary", "table", or "none"
    #[serde(default = "default_preview")]
    pub preview_format: String,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            mapping_file: default_mapping_file(),
            header: HeaderMode::Auto,
            duplicates: DuplicatePolicy::LastWins,
            preview_format: default_preview(),
            use_color: None,
        }
    }
}

fn default_mapping_file() -> String {
    DEFAULT_MAPPING_FILE.to_string()
}

fn default_preview() -> String {
    "summary".to_string()
}

impl Config {
    /// Load config from .namesheet/config.toml if it exists
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(".namesheet").join("config.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
