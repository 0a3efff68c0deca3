//! Configuration handling for the TUI

use crate::client::DEFAULT_ADDRESS;
use crate::theme::{ThemeConfig, ThemeOverrides};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// API server base URL
    pub server_address: Option<String>,
    /// Theme preset name (default/blue/ocean/forest)
    pub theme: Option<String>,
    /// Per-role color overrides applied on top of the preset
    #[serde(default)]
    pub overrides: ThemeOverrides,
    /// Start in dark mode
    pub dark_mode: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "fieldwork", "fieldwork-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Resolve the server base URL: config file entry, then the
    /// `FIELDWORK_SERVER` environment variable, then the local default
    pub fn resolve_server_address(&self) -> String {
        pick_address(
            self.server_address.as_deref(),
            std::env::var("FIELDWORK_SERVER").ok().as_deref(),
        )
    }

    /// Resolve the theme: preset looked up by name (unknown names fall
    /// back to the default), overrides applied on top
    pub fn resolve_theme(&self) -> ThemeConfig {
        self.theme
            .as_deref()
            .and_then(ThemeConfig::preset)
            .unwrap_or_default()
            .with_overrides(&self.overrides)
    }
}

fn pick_address(config: Option<&str>, env: Option<&str>) -> String {
    config
        .or(env)
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
}
