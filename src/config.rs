use crate::domain::VersionBump;
use crate::error::{BumptagError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory and the user config directory
pub const SETTINGS_FILE: &str = "bumptag.toml";

/// Returns the default tag prefix.
fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Represents the complete configuration for bumptag.
///
/// Controls how tag names are built, which bump applies when none is
/// requested, and which editor opens annotations.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    #[serde(default)]
    pub default_bump: VersionBump,

    #[serde(default)]
    pub editor: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tag_prefix: default_tag_prefix(),
            default_bump: VersionBump::default(),
            editor: None,
        }
    }
}

/// Loads settings from file or returns defaults.
///
/// Attempts to load settings in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumptag.toml` in current directory
/// 3. `bumptag.toml` in the user config directory
/// 4. Default settings if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom settings file
///
/// # Returns
/// * `Ok(Settings)` - Loaded or default settings
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Settings> {
    match settings_path(config_path) {
        Some(path) => load_from(&path),
        None => Ok(Settings::default()),
    }
}

fn settings_path(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }
    let local = Path::new(".").join(SETTINGS_FILE);
    if local.exists() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join(SETTINGS_FILE))
        .filter(|path| path.exists())
}

/// Parse the settings file at `path`
pub fn load_from(path: &Path) -> Result<Settings> {
    let text = fs::read_to_string(path).map_err(|e| {
        BumptagError::settings(format!("cannot read {}: {}", path.display(), e))
    })?;
    toml::from_str(&text)
        .map_err(|e| BumptagError::settings(format!("invalid {}: {}", path.display(), e)))
}
