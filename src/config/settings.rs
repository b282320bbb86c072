//! Editor settings

use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::localize::FALLBACK_LANGUAGE;

/// Current settings format version
pub const SETTINGS_VERSION: u32 = 1;

/// Persistent preferences for the editor tooling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Version of the settings format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Language used for group titles (e.g. "en", "de-DE")
    #[serde(default = "default_language")]
    pub language: String,
    /// Pretty-print schema output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

fn default_language() -> String {
    FALLBACK_LANGUAGE.to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            language: default_language(),
            pretty: default_pretty(),
        }
    }
}

impl EditorSettings {
    /// Load settings from the platform config directory.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Save settings to the platform config directory
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path()?)
    }

    /// Get the settings file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "github.flow_card_editor", "flow-card-editor")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("editor.json"))
    }

    /// Load settings from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        info!("Loaded editor settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Saved editor settings to {:?}", path);
        Ok(())
    }
}
