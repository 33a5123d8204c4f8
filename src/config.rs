use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BumpError, Result};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "bumpctl.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".bumpctl.toml";

/// Represents the complete configuration for bumpctl.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tool: ToolConfig,

    #[serde(default)]
    pub repository: RepositoryConfig,
}

fn default_command() -> Vec<String> {
    vec!["bump-my-version".to_string()]
}

fn default_show_bump_args() -> Vec<String> {
    vec!["show-bump".to_string()]
}

fn default_bump_args() -> Vec<String> {
    vec!["bump".to_string()]
}

fn default_true() -> bool {
    true
}

/// How to invoke the external version tool.
///
/// `command` is the program followed by any leading arguments, so wrappers
/// such as `["uv", "run", "bump-my-version"]` work unchanged.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ToolConfig {
    #[serde(default = "default_command")]
    pub command: Vec<String>,

    #[serde(default = "default_show_bump_args")]
    pub show_bump_args: Vec<String>,

    #[serde(default = "default_bump_args")]
    pub bump_args: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            command: default_command(),
            show_bump_args: default_show_bump_args(),
            bump_args: default_bump_args(),
        }
    }
}

impl ToolConfig {
    /// The program to spawn.
    pub fn program(&self) -> Result<&str> {
        self.command
            .first()
            .map(String::as_str)
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| BumpError::config("tool.command must name a program"))
    }
}

/// Working tree inspection settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    /// Count untracked files as pending changes.
    #[serde(default = "default_true")]
    pub include_untracked: bool,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            include_untracked: true,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumpctl.toml` in current directory
/// 3. `.bumpctl.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or names no program
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => discover_config(),
    };

    let config = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            parse_config_file(&path)?
        }
        None => Config::default(),
    };

    config.tool.program()?;
    Ok(config)
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| BumpError::config(format!("cannot read {}: {}", path.display(), e)))?;

    toml::from_str(&config_str)
        .map_err(|e| BumpError::config(format!("invalid {}: {}", path.display(), e)))
}
