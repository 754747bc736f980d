//! Editor configuration
//!
//! Reads user preferences from `~/.config/datgrid/config.yaml`. The file
//! is written by hand; a missing or unreadable one falls back to
//! defaults, and a broken one is reported and ignored rather than
//! aborting the session.

use serde::{Deserialize, Serialize};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Ask before deleting rows that still contain data
    #[serde(default = "default_confirm_deletes")]
    pub confirm_deletes: bool,

    /// Maximum number of rows the `show` command prints before truncating
    #[serde(default = "default_max_show_rows")]
    pub max_show_rows: usize,
}

fn default_confirm_deletes() -> bool {
    true
}

fn default_max_show_rows() -> usize {
    40
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            confirm_deletes: default_confirm_deletes(),
            max_show_rows: default_max_show_rows(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Self::default();
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match serde_yaml::from_str(&content) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
