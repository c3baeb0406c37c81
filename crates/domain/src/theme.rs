//! Theme catalog — remote, read-only list of installable themes.
//!
//! Wire shape (fixed by the published asset repository):
//! `{ "site": "...", "main-theme": "...", "themes": [{ "id", "name", "themePath" }] }`

use serde::{Deserialize, Serialize};

use crate::error::{AlcoveError, ValidationError};

/// Container ids that themes are known to create as side effects.
/// Cleanup is advisory: a theme may leak other nodes.
pub const THEME_SIDE_EFFECT_CONTAINERS: [&str; 2] = ["theme-effects", "halloween-pumpkins"];

/// A single installable theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    #[serde(rename = "themePath")]
    pub theme_path: String,
}

/// The remote theme catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCatalog {
    /// Base URL that `themePath` values are resolved against.
    pub site: String,
    /// Id of the theme applied when none is selected.
    #[serde(rename = "main-theme")]
    pub default_theme: String,
    pub themes: Vec<Theme>,
}

impl ThemeCatalog {
    /// Look up a theme by id.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    /// Absolute URL of a theme's resource.
    #[must_use]
    pub fn resource_url(&self, theme: &Theme) -> String {
        format!("{}{}", self.site, theme.theme_path)
    }

    /// Check catalog invariants: theme ids must be unique.
    ///
    /// # Errors
    ///
    /// Returns [`AlcoveError::Validation`] when two themes share an id.
    pub fn validate(&self) -> Result<(), AlcoveError> {
        let mut seen = std::collections::BTreeSet::new();
        for theme in &self.themes {
            if !seen.insert(theme.id.as_str()) {
                return Err(ValidationError::DuplicateCatalogId(theme.id.clone()).into());
            }
        }
        Ok(())
    }
}
