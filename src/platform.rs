//! Config file location resolution.
//!
//! Lookup order:
//! 1. Explicit path (`--config`)
//! 2. `DELAYSTART_CONFIG` environment variable
//! 3. Home directory (`~/.delay-start/config.toml`)
//! 4. Platform config directory (XDG on Linux, Application Support on macOS, AppData on Windows)

use anyhow::Result;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "DELAYSTART_CONFIG";
const APP_DIR: &str = "delay-start";
const CONFIG_FILE: &str = "config.toml";

/// Candidate locations below the explicit/env overrides, in priority order.
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(home) = home::home_dir() {
        paths.push(home.join(format!(".{}", APP_DIR)).join(CONFIG_FILE));
    }
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(APP_DIR).join(CONFIG_FILE));
    }
    paths
}

fn requested_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(CONFIG_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

/// Find the config file to load, if any.
///
/// A requested path (flag or environment) that does not exist is logged
/// and treated like no config file at all.
pub fn find_config_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = requested_path(explicit) {
        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Requested config file does not exist, using defaults"
            );
            return Ok(None);
        }
        return Ok(Some(path));
    }

    Ok(default_config_paths().into_iter().find(|p| p.exists()))
}

/// Where `config init` writes and `config path` reports when nothing exists yet.
pub fn config_write_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = requested_path(explicit) {
        return Ok(path);
    }
    if let Some(existing) = default_config_paths().into_iter().find(|p| p.exists()) {
        return Ok(existing);
    }
    match default_config_paths().into_iter().next() {
        Some(path) => Ok(path),
        None => Ok(PathBuf::from(format!(".{}", APP_DIR)).join(CONFIG_FILE)),
    }
}
