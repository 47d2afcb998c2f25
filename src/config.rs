use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{ReleasePrefixSet, DEFAULT_RELEASE_PREFIXES};
use crate::error::{Result, VersionError};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "gittagversion.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".gittagversion.toml";

/// Configuration for git-tag-version.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Tag prefixes marking a release, in tie-break order
    #[serde(default = "default_release_prefixes")]
    pub release_prefixes: Vec<String>,

    /// Match annotated tags by the commit they tag rather than the tag object.
    ///
    /// Defaults to `true`. This is a departure from comparing each tag ref's
    /// direct target, where annotated tags never match HEAD; set to `false`
    /// to compare direct targets only.
    #[serde(default = "default_peel_annotated_tags")]
    pub peel_annotated_tags: bool,
}

/// Returns the default list of release prefixes.
fn default_release_prefixes() -> Vec<String> {
    DEFAULT_RELEASE_PREFIXES
        .iter()
        .map(|prefix| prefix.to_string())
        .collect()
}

fn default_peel_annotated_tags() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            release_prefixes: default_release_prefixes(),
            peel_annotated_tags: default_peel_annotated_tags(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(source).map_err(|e| VersionError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject prefix lists that would make every tag a release.
    pub fn validate(&self) -> Result<()> {
        if self.release_prefixes.is_empty() {
            return Err(VersionError::config("release_prefixes must not be empty"));
        }
        if self.release_prefixes.iter().any(|prefix| prefix.is_empty()) {
            return Err(VersionError::config(
                "release_prefixes must not contain an empty prefix",
            ));
        }
        Ok(())
    }

    pub fn prefix_set(&self) -> ReleasePrefixSet {
        ReleasePrefixSet::new(self.release_prefixes.iter().cloned())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gittagversion.toml` in current directory
/// 3. `.gittagversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    Config::from_toml(&config_str)
}
