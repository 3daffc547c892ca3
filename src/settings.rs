use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::round::TailRule;

const APP_DIR_NAME: &str = "bogie-vs-chicken";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Runtime settings read from `settings.json`.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Fixed food-placement seed for reproducible sessions.
    pub seed: Option<u64>,
    /// Ring the terminal bell on eat, collision, timeout and win.
    pub terminal_bell: bool,
    pub tail_rule: TailRule,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            terminal_bell: true,
            tail_rule: TailRule::Strict,
            log_level: "info".to_owned(),
        }
    }
}

impl Settings {
    /// Parses `log_level` into a filter.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Returns the default log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push("game.log");
    base
}

/// Loads settings from `path`.
///
/// Returns defaults when the file does not exist (first run). Returns `Err`
/// when it exists but cannot be read or parsed, so the caller can report it
/// before entering raw terminal mode.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let settings: Settings = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    settings.level_filter()?;

    Ok(settings)
}
