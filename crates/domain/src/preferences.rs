//! Preference record — the persisted user-facing settings blob.
//!
//! Persisted as a single camelCase JSON object under one fixed key.
//! Loading always starts from [`PreferenceRecord::default`] and lets the
//! persisted partial record override it field by field, so adding a field
//! is backward-compatible and unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::theme::ThemeCatalog;

/// Base font size presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Fixed base font size in pixels. Design constants, not derived.
    #[must_use]
    pub fn base_px(self) -> u16 {
        match self {
            Self::Small => 14,
            Self::Medium => 16,
            Self::Large => 18,
        }
    }
}

/// The full set of user-facing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceRecord {
    pub reduced_motion: bool,
    pub font_size: FontSize,
    pub high_contrast: bool,
    pub notifications_enabled: bool,
    pub general_notifications: bool,
    pub performance_mode: bool,
    #[serde(rename = "showFPS")]
    pub show_fps: bool,
    pub disable_update_popups: bool,
    pub incognito_mode: bool,
    pub selected_theme: String,
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            font_size: FontSize::Medium,
            high_contrast: false,
            notifications_enabled: false,
            general_notifications: true,
            performance_mode: false,
            show_fps: false,
            disable_update_popups: false,
            incognito_mode: false,
            selected_theme: String::new(),
        }
    }
}

impl PreferenceRecord {
    /// Force `selected_theme` to reference an id present in `catalog`,
    /// falling back to the catalog's declared default.
    ///
    /// Returns `true` when the field was rewritten.
    pub fn normalize_theme(&mut self, catalog: &ThemeCatalog) -> bool {
        if catalog.resolve(&self.selected_theme).is_some() {
            return false;
        }
        self.selected_theme = catalog.default_theme.clone();
        true
    }
}
