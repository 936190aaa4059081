//! Application paths.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Application paths.
pub struct AppPaths {
    /// Configuration directory.
    pub config: PathBuf,
}

impl AppPaths {
    /// Resolve platform paths for jokebox.
    #[must_use]
    pub fn new() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("dev", "jokebox", "jokebox") {
            Self {
                config: proj_dirs.config_dir().to_path_buf(),
            }
        } else {
            let home = BaseDirs::new()
                .map_or_else(|| PathBuf::from("."), |dirs| dirs.home_dir().to_path_buf());
            Self {
                config: home.join(".config/jokebox"),
            }
        }
    }

    /// Default config file location.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.toml")
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
