use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use serde::Deserialize;

const DATA_DIR_NAME: &str = ".pioneer";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Regular pioneer requirement.
pub const DEFAULT_YEARLY_GOAL: f64 = 600.0;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Hours to reach over one service year.
    pub yearly_goal: f64,
    /// Language code such as "en" or "it".
    pub language: Option<String>,
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            yearly_goal: DEFAULT_YEARLY_GOAL,
            language: None,
            data_dir: None,
        }
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DATA_DIR_NAME))
}

impl Config {
    /// Loads `~/.pioneer/config.toml`, or `custom_path` when given.
    ///
    /// A missing default file yields the defaults; a missing custom file is an error.
    pub fn load(custom_path: Option<&Path>) -> Result<Self> {
        let path = match custom_path {
            Some(p) => p.to_path_buf(),
            None => {
                let path = default_data_dir()?.join(CONFIG_FILE_NAME);
                if !path.exists() {
                    return Ok(Config::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .map_err(|e| anyhow!("failed to read config {}: {}", path.display(), e))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| anyhow!("failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.yearly_goal.is_finite() && self.yearly_goal > 0.0) {
            bail!("yearly_goal must be a positive number, got {}", self.yearly_goal);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.yearly_goal, 600.0);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            yearly_goal = 800
            language = "it"
            data_dir = "/tmp/pioneer"
            "#,
        )
        .unwrap();
        assert_eq!(config.yearly_goal, 800.0);
        assert_eq!(config.language.as_deref(), Some("it"));
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/pioneer")));
    }

    #[test]
    fn test_non_positive_goal_rejected() {
        assert!(Config::from_toml("yearly_goal = 0").is_err());
        assert!(Config::from_toml("yearly_goal = -10.5").is_err());
    }

    #[test]
    fn test_missing_custom_file_is_an_error() {
        let path = std::env::temp_dir().join("pioneer-no-such-config.toml");
        assert!(Config::load(Some(&path)).is_err());
    }
}
