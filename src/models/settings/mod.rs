// Settings module
// User configuration persisted as TOML

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Theme names understood by the UI
pub const THEMES: [&str; 2] = ["light", "dark"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("Unknown theme '{0}' (expected one of: light, dark)")]
    UnknownTheme(String),
    #[error("Window size {width}x{height} is below the minimum of {}x{}", MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)]
    WindowTooSmall { width: f32, height: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    /// Populate the calendar with a few demo events around today on startup
    pub seed_sample_events: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            seed_sample_events: true,
            window_width: 1000.0,
            window_height: 760.0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !THEMES.contains(&self.theme.as_str()) {
            return Err(SettingsError::UnknownTheme(self.theme.clone()));
        }

        if self.window_width < MIN_WINDOW_WIDTH || self.window_height < MIN_WINDOW_HEIGHT {
            return Err(SettingsError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
            });
        }

        Ok(())
    }

    pub fn is_dark(&self) -> bool {
        self.theme == "dark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!(!settings.is_dark());
        assert!(settings.seed_sample_events);
    }

    #[test]
    fn test_unknown_theme() {
        let settings = Settings {
            theme: "solarized".into(),
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::UnknownTheme("solarized".into()))
        );
    }

    #[test]
    fn test_window_too_small() {
        let settings = Settings {
            window_width: 320.0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::WindowTooSmall { .. })
        ));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("theme = \"dark\"").unwrap();
        assert!(settings.is_dark());
        assert_eq!(settings.window_width, Settings::default().window_width);
    }
}
