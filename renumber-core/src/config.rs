use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// How many times interactive prompts retry before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_prompt_attempts: u32,

    /// Show the old -> new table before renaming.
    #[serde(default = "default_true")]
    pub show_preview: bool,

    /// Directory that folder prompts resolve against. Defaults to the
    /// platform Downloads directory when unset.
    #[serde(default)]
    pub base_directory: Option<PathBuf>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            max_prompt_attempts: default_max_attempts(),
            show_preview: true,
            base_directory: None,
        }
    }
}

fn default_max_attempts() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load config from `path` if it exists; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.defaults.max_prompt_attempts, 5);
        assert!(config.defaults.show_preview);
        assert!(config.defaults.base_directory.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[defaults]\nmax_prompt_attempts = 2\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.defaults.max_prompt_attempts, 2);
        assert!(config.defaults.show_preview);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "defaults = not-a-table").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
