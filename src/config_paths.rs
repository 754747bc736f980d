//! Filesystem locations for datgrid state
//!
//! Everything the editor persists (config, recent files, logs) lives in
//! one directory:
//! - Unix/macOS: `~/.config/datgrid/`
//! - Windows: `%APPDATA%\datgrid\`
//!
//! This module is the single source of truth for those paths.

use std::path::{Path, PathBuf};
use std::{env, fs};

const APP_DIR: &str = "datgrid";

/// Root of the per-user state directory
///
/// Honors `XDG_CONFIG_HOME` on Unix (falling back to `~/.config`) and
/// `%APPDATA%` on Windows. `None` when no home directory can be found.
pub fn config_dir() -> Option<PathBuf> {
    config_root().map(|root| root.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn config_root() -> Option<PathBuf> {
    env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn config_root() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

/// `config.yaml` inside [`config_dir`]
pub fn config_file() -> Option<PathBuf> {
    Some(config_dir()?.join("config.yaml"))
}

/// `recent.json` inside [`config_dir`]
pub fn recent_files_path() -> Option<PathBuf> {
    Some(config_dir()?.join("recent.json"))
}

/// `logs/` inside [`config_dir`], written by daily-rotated log files
pub fn logs_dir() -> Option<PathBuf> {
    Some(config_dir()?.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create the config directory if missing, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Create the logs directory (and the config directory above it) if missing
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = ensure_config_dir()?.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}

/// Create the whole state directory tree, logging failures instead of
/// returning them
pub fn ensure_all_config_dirs() {
    match ensure_logs_dir() {
        Ok(logs) => tracing::debug!("Config directories ready (logs: {})", logs.display()),
        Err(e) => tracing::warn!("Failed to ensure config directories: {}", e),
    }
}
