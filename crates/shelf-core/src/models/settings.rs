//! User-facing application settings.

use crate::config::SettingsConfig;
use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
    System,
}

/// Application settings. Persisted by the host, mutated only through the
/// facade setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default)]
    pub color_scheme: ColorScheme,
    pub notifications_enabled: bool,
    pub cloud_sync_enabled: bool,
    pub font_scale: f64,
    pub show_reading_progress: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Light,
            notifications_enabled: true,
            cloud_sync_enabled: true,
            font_scale: SettingsConfig::FONT_SCALE_DEFAULT,
            show_reading_progress: true,
        }
    }
}

impl AppSettings {
    /// Check a font scale against the supported range.
    pub fn check_font_scale(font_scale: f64) -> Result<()> {
        if (SettingsConfig::FONT_SCALE_MIN..=SettingsConfig::FONT_SCALE_MAX).contains(&font_scale) {
            Ok(())
        } else {
            Err(ShelfError::OutOfRange {
                field: "font_scale".to_string(),
                value: font_scale,
                min: SettingsConfig::FONT_SCALE_MIN,
                max: SettingsConfig::FONT_SCALE_MAX,
            })
        }
    }

    pub fn validate(&self) -> Result<()> {
        Self::check_font_scale(self.font_scale)
    }
}
