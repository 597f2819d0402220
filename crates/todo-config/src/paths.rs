//! Configuration directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/todo-store/`
//! - macOS: `~/Library/Application Support/todo-store/`
//! - Windows: `%APPDATA%\todo-store\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "todo-store";

/// Name of the config file looked up in the CWD and home directory
pub const CONFIG_FILE: &str = ".todo-store.toml";

/// Get the application config directory (not created)
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to the config file in the application config directory
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get path to the config file in the home directory
pub fn home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_path() {
        if let Ok(path) = app_config_path() {
            assert!(path.ends_with("todo-store/config.toml"));
        }
    }

    #[test]
    fn test_home_config_path() {
        if let Some(path) = home_config_path() {
            assert!(path.ends_with(CONFIG_FILE));
        }
    }
}
