//! Application configuration
//!
//! Configuration loaded from `.todo-store.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use todo_reducers::VisibilityFilter;

/// Application configuration loaded from `.todo-store.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Prompt printed before reading a command in interactive mode
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Print the whole state as JSON after every dispatch
    #[serde(default)]
    pub echo_state: bool,

    /// Filter applied on startup
    #[serde(default)]
    pub initial_filter: VisibilityFilter,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            prompt: default_prompt(),
            echo_state: false,
            initial_filter: VisibilityFilter::default(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, then the platform
    /// config directory, or use defaults
    pub fn load() -> Self {
        if let Some((path, content)) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {}: {:#}", path.display(), e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid todo-store configuration")
    }
}
