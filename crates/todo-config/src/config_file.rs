use std::path::{Path, PathBuf};

use crate::paths::{app_config_path, home_config_path, CONFIG_FILE};

/// Candidate config files, most specific first:
/// 1. `.todo-store.toml` in the current working directory
/// 2. `~/.todo-store.toml`
/// 3. `config.toml` in the platform config directory
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    candidates.extend(home_config_path());
    candidates.extend(app_config_path().ok());
    candidates
}

/// Load the first config file that exists.
///
/// Returns the path and content if found, None otherwise.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    load_first(&config_candidates())
}

fn load_first(candidates: &[PathBuf]) -> Option<(PathBuf, String)> {
    candidates.iter().find_map(|path| {
        read(path).map(|content| {
            log::debug!("Loaded config from {}", path.display());
            (path.clone(), content)
        })
    })
}

fn read(path: &Path) -> Option<String> {
    std::fs::read_to_string(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cwd_is_checked_first() {
        let candidates = config_candidates();
        assert_eq!(candidates[0], PathBuf::from(CONFIG_FILE));
    }

    #[test]
    fn test_load_first_skips_missing_files() {
        let dir = std::env::temp_dir().join(format!("todo-config-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let existing = dir.join("present.toml");
        std::fs::write(&existing, "prompt = \"$ \"").unwrap();

        let found = load_first(&[dir.join("missing.toml"), existing.clone()]);
        std::fs::remove_dir_all(&dir).unwrap();

        let (path, content) = found.unwrap();
        assert_eq!(path, existing);
        assert_eq!(content, "prompt = \"$ \"");
    }

    #[test]
    fn test_load_first_nothing_found() {
        assert!(load_first(&[PathBuf::from("/nonexistent/todo-store.toml")]).is_none());
    }
}
