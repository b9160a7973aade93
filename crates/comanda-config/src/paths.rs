use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

/// Environment variable that relocates the user-level `~/.comanda` directory.
pub const COMANDA_HOME_ENV: &str = "COMANDA_HOME";

/// Path construction for the `~/.comanda/` directory layout.
///
/// Use `resolve()` in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct ComandaPaths {
    comanda_dir: PathBuf,
}

impl ComandaPaths {
    /// Resolve from `$COMANDA_HOME`, falling back to `~/.comanda`.
    pub fn resolve() -> Result<Self, ConfigError> {
        if let Some(dir) = std::env::var_os(COMANDA_HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self {
                comanda_dir: PathBuf::from(dir),
            });
        }
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(Self {
            comanda_dir: home.join(".comanda"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(comanda_dir: PathBuf) -> Self {
        Self { comanda_dir }
    }

    pub fn comanda_dir(&self) -> &Path {
        &self.comanda_dir
    }

    pub fn user_config(&self) -> PathBuf {
        self.comanda_dir.join("config.toml")
    }

    /// Project-level config lives in `<root>/.comanda/config.toml`.
    pub fn project_config(project_root: &Path) -> PathBuf {
        project_root.join(".comanda").join("config.toml")
    }
}
