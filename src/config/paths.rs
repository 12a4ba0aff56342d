// Filesystem locations.
// Config file in the platform config dir, log file in the cache dir.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "devfolio")
}

/// Base config directory (~/.config/devfolio on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Base cache directory (~/.cache/devfolio on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the settings file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Path to the log file.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("devfolio.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        // Path construction only; nothing is created on disk.
        if let Some(path) = config_path() {
            assert!(path.ends_with("config.json"));
        }
        if let Some(path) = log_path() {
            assert!(path.ends_with("devfolio.log"));
        }
    }
}
