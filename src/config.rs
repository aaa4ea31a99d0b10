use crate::error::{ChangelogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Project-local configuration file name
pub const LOCAL_CONFIG_FILE: &str = "changelog.toml";
/// Configuration file name inside the user config directory
pub const USER_CONFIG_FILE: &str = ".ai-changelog.toml";

/// Represents the complete configuration for ai-changelog.
///
/// Contains the changelog location, model settings, trigger source, and git options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_changelog_path")]
    pub changelog_path: PathBuf,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub trigger: TriggerConfig,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_changelog_path() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

fn default_model_name() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_trigger_env_var() -> String {
    "npm_lifecycle_event".to_string()
}

/// Settings for the text-generation model.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ModelConfig {
    #[serde(default = "default_model_name")]
    pub name: String,

    /// Base URL of the Generative Language API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Request timeout; the call is attempted exactly once
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            name: default_model_name(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Where the release trigger is read from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TriggerConfig {
    #[serde(default = "default_trigger_env_var")]
    pub env_var: String,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        TriggerConfig {
            env_var: default_trigger_env_var(),
        }
    }
}

/// Which state the last tag is compared against.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiffTarget {
    /// The committed tree at HEAD
    #[default]
    Head,
    /// The working tree, including staged changes
    Workdir,
}

/// Git behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct GitConfig {
    #[serde(default)]
    pub diff_target: DiffTarget,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            changelog_path: default_changelog_path(),
            model: ModelConfig::default(),
            trigger: TriggerConfig::default(),
            git: GitConfig::default(),
        }
    }
}

impl Config {
    /// Read the model API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String> {
        match std::env::var(&self.model.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ChangelogError::config(format!(
                "environment variable {} is not set",
                self.model.api_key_env
            ))),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog.toml` in current directory
/// 3. `.ai-changelog.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(USER_CONFIG_FILE);
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)?;
    parse_config(&config_str)
}

/// Parse configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| ChangelogError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.changelog_path, PathBuf::from("CHANGELOG.md"));
        assert_eq!(config.model.name, "gemini-1.5-flash");
        assert_eq!(config.model.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.model.timeout_secs, 120);
        assert_eq!(config.trigger.env_var, "npm_lifecycle_event");
        assert_eq!(config.git.diff_target, DiffTarget::Head);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config(
            r#"
[model]
timeout_secs = 30

[git]
diff_target = "workdir"
"#,
        )
        .unwrap();
        assert_eq!(config.model.timeout_secs, 30);
        assert_eq!(config.model.name, "gemini-1.5-flash");
        assert_eq!(config.git.diff_target, DiffTarget::Workdir);
    }

    #[test]
    fn test_invalid_diff_target() {
        let err = parse_config("[git]\ndiff_target = \"index\"\n").unwrap_err();
        assert!(matches!(err, ChangelogError::Config(_)));
    }
}
