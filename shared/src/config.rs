//! Startup settings
//!
//! Load-only configuration in the clock-series scheme: a `settings.toml`
//! under the platform config directory may override the startup defaults.
//! Nothing is ever written back; the running clock keeps no persistent state.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::state::DisplayMode;

/// City selected when nothing is configured or the configured one is bad
pub const DEFAULT_CITY: &str = "Tehran";

pub const WINDOW_TITLE: &str = "Global Clock";
pub const WINDOW_WIDTH: u32 = 1920;
pub const WINDOW_HEIGHT: u32 = 1080;

/// Ticking sound effects, relative to the media root, cycled by SwitchSound
pub const SOUND_FILES: &[&str] = &[
    "medias/sounds/Ticking-1.mp3",
    "medias/sounds/Ticking-2.mp3",
    "medias/sounds/Ticking-3.mp3",
];

/// Error type for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to determine config directory
    NoConfigDir,
    /// IO error while reading config
    Io(io::Error),
    /// Failed to parse config file
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "Could not determine config directory"),
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Startup settings, all optional in the file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub city: String,
    pub mode: DisplayMode,
    pub sound_enabled: bool,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            mode: DisplayMode::Analog,
            sound_enabled: true,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
        }
    }
}

/// Configuration file path under the platform config directory
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "global-clock", "global_clock")
        .map(|dirs| dirs.config_dir().join("settings.toml"))
}

/// Load startup settings.
///
/// Returns `None` if no settings file exists; an existing file that fails to
/// parse is an error so typos do not silently vanish into defaults.
pub fn load_settings() -> Result<Option<Settings>, ConfigError> {
    let path = settings_path().ok_or(ConfigError::NoConfigDir)?;

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&contents)?;
    Ok(Some(settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_path() {
        let path = settings_path();
        assert!(path.is_some());
        assert!(path
            .unwrap()
            .to_string_lossy()
            .contains("settings.toml"));
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.city, "Tehran");
        assert_eq!(settings.mode, DisplayMode::Analog);
        assert!(settings.sound_enabled);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = toml::from_str("city = \"Tokyo\"").unwrap();
        assert_eq!(settings.city, "Tokyo");
        assert_eq!(settings.mode, DisplayMode::Analog);
        assert!(settings.sound_enabled);
    }

    #[test]
    fn test_mode_parses_from_toml() {
        let settings: Settings = toml::from_str("mode = \"Digital\"").unwrap();
        assert_eq!(settings.mode, DisplayMode::Digital);
    }
}
