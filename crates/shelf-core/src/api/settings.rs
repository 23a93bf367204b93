//! Settings setters.

use tracing::debug;

use crate::error::Result;
use crate::models::{AppSettings, ColorScheme};
use crate::Library;

impl Library {
    pub fn set_color_scheme(&mut self, scheme: ColorScheme) -> &AppSettings {
        self.settings.color_scheme = scheme;
        debug!("Color scheme set to {:?}", scheme);
        &self.settings
    }

    pub fn set_notifications_enabled(&mut self, enabled: bool) -> &AppSettings {
        self.settings.notifications_enabled = enabled;
        &self.settings
    }

    pub fn set_cloud_sync_enabled(&mut self, enabled: bool) -> &AppSettings {
        self.settings.cloud_sync_enabled = enabled;
        &self.settings
    }

    /// Preferred font size in points, bounded to the supported range.
    pub fn set_font_scale(&mut self, font_scale: f64) -> Result<&AppSettings> {
        AppSettings::check_font_scale(font_scale)?;
        self.settings.font_scale = font_scale;
        debug!("Font scale set to {}", font_scale);
        Ok(&self.settings)
    }

    pub fn set_show_reading_progress(&mut self, show: bool) -> &AppSettings {
        self.settings.show_reading_progress = show;
        &self.settings
    }

    /// Replace all settings at once.
    pub fn update_settings(&mut self, settings: AppSettings) -> Result<&AppSettings> {
        settings.validate()?;
        self.settings = settings;
        Ok(&self.settings)
    }
}
