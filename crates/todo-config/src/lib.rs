//! Configuration for todo-cli
//!
//! This crate provides:
//! - Config file lookup (CWD, home directory, platform config directory)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
