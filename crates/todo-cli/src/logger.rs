//! Console logging using env_logger
//!
//! Logs go to stderr so they never mix with the rendered list on stdout.
//! `RUST_LOG` wins over the configured level.

use env_logger::{Builder, Env};

/// Initialize logging with `default_level` unless RUST_LOG is set
pub fn init(default_level: &str) {
    let env = Env::default().default_filter_or(default_level);

    if let Err(e) = Builder::from_env(env).format_timestamp_millis().try_init() {
        eprintln!("Failed to initialize logger: {}", e);
    }
}
