// SPDX-License-Identifier: MPL-2.0
//! User preferences, loaded from and saved to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass a directory override (the `--config-dir` flag)
//! 3. Set the `EXIF_LENS_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const CONFIG_DIR_ENV: &str = "EXIF_LENS_CONFIG_DIR";
const APP_DIR: &str = "exif_lens";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, rename = "theme-mode")]
    pub theme_mode: ThemeMode,
}

/// Application configuration persisted as `settings.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

/// Resolves the directory holding `settings.toml`.
///
/// Precedence: explicit override > `EXIF_LENS_CONFIG_DIR` > platform config
/// directory. Returns `None` when the platform directory cannot be
/// determined (headless environments).
pub fn config_dir(override_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir.to_path_buf());
    }
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|base| base.join(APP_DIR))
}

/// Loads the configuration from the resolved location.
///
/// Never fails the launch: a missing file yields the defaults, and a corrupt
/// file yields the defaults plus a warning key the caller can localize.
pub fn load(override_dir: Option<&Path>) -> (Config, Option<&'static str>) {
    let Some(dir) = config_dir(override_dir) else {
        return (Config::default(), None);
    };
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            eprintln!("Failed to load {}: {}", path.display(), err);
            (Config::default(), Some("config-load-warning"))
        }
    }
}

/// Saves the configuration to the resolved location, creating the directory
/// if needed.
pub fn save(config: &Config, override_dir: Option<&Path>) -> Result<()> {
    let Some(dir) = config_dir(override_dir) else {
        return Ok(());
    };
    fs::create_dir_all(&dir)?;
    save_to_path(config, &dir.join(CONFIG_FILE))
}

/// Loads the configuration from an explicit path.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to an explicit path.
pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let content = toml::to_string(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_language_and_system_theme() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.general.theme_mode = ThemeMode::Dark;
        save_to_path(&config, &path).expect("save");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn serialized_form_uses_kebab_case_section_keys() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;
        let toml = toml::to_string(&config).expect("serialize");
        assert!(toml.contains("[general]"));
        assert!(toml.contains("theme-mode"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("parse");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn corrupt_file_degrades_to_defaults_with_warning() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "general = 3???").expect("write");

        let (config, warning) = load(Some(dir.path()));
        assert_eq!(config, Config::default());
        assert_eq!(warning, Some("config-load-warning"));
    }

    #[test]
    fn missing_file_is_not_a_warning() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (config, warning) = load(Some(dir.path()));
        assert_eq!(config, Config::default());
        assert_eq!(warning, None);
    }

    #[test]
    fn explicit_override_wins_over_environment() {
        let dir = tempfile::tempdir().expect("temp dir");
        let resolved = config_dir(Some(dir.path())).expect("dir");
        assert_eq!(resolved, dir.path());
    }
}
