//! Grid configuration persistence
//!
//! Stores user preferences in `~/.config/impactgrid/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::{Placeholders, DEFAULT_COLUMN_LABEL, DEFAULT_ROW_LABEL};

/// Grid configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Label for rows created from the context menu
    #[serde(default = "default_row_label")]
    pub new_row_label: String,
    /// Label for columns created from the context menu
    #[serde(default = "default_column_label")]
    pub new_column_label: String,
    /// Fixed random seed; `None` seeds from OS entropy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_row_label() -> String {
    DEFAULT_ROW_LABEL.to_string()
}

fn default_column_label() -> String {
    DEFAULT_COLUMN_LABEL.to_string()
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            new_row_label: default_row_label(),
            new_column_label: default_column_label(),
            seed: None,
        }
    }
}

impl GridConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Labels for inserted rows and columns
    pub fn placeholders(&self) -> Placeholders {
        Placeholders {
            row_label: self.new_row_label.clone(),
            column_label: self.new_column_label.clone(),
        }
    }
}
