//! Application settings
//!
//! Read once at startup from `settings.json` in the platform config
//! directory. Nothing is written back: the theme toggled at runtime lives
//! only for the session.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Named visual themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    #[default]
    HunterGreen,
    PurpleSapphire,
}

impl ThemeChoice {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            ThemeChoice::HunterGreen => ThemeChoice::PurpleSapphire,
            ThemeChoice::PurpleSapphire => ThemeChoice::HunterGreen,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeChoice::HunterGreen => "Hunter Green",
            ThemeChoice::PurpleSapphire => "Purple Sapphire",
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Simulated network latency
    #[serde(default)]
    pub latency: LatencySettings,
    /// Toast notifications
    #[serde(default)]
    pub notifications: NotificationSettings,
}

/// Display-related settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Theme shown at startup
    pub theme: ThemeChoice,
    /// Application language code
    pub language: String,
}

/// Durations of the fake network calls, in milliseconds
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LatencySettings {
    /// Initial collection fetch
    pub initial_load_ms: u64,
    /// Each create, edit or delete
    pub action_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// How long a toast stays on screen
    pub toast_duration_ms: u64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::HunterGreen,
            language: "en".to_string(),
        }
    }
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            initial_load_ms: 2000,
            action_ms: 1000,
        }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
        }
    }
}

impl LatencySettings {
    pub fn initial_load(&self) -> Duration {
        Duration::from_millis(self.initial_load_ms)
    }

    pub fn action(&self) -> Duration {
        Duration::from_millis(self.action_ms)
    }
}

impl NotificationSettings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rosterdeck", "Rosterdeck")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if missing or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };
        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) => {
                tracing::debug!("No settings at {} ({}), using defaults", path.display(), e);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse settings JSON; missing sections and fields take their defaults
    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
