//! Theme service — the theme loader state machine.
//!
//! Two states: no theme loaded, or exactly one theme loaded. Selecting a
//! theme removes the previous resource and its known side-effect containers,
//! injects the new resource reference, and persists the selection. Rapid
//! repeated selections are last-write-wins; no atomicity is promised.

use std::sync::{Arc, Mutex, PoisonError};

use alcove_domain::error::{AlcoveError, NotFoundError};
use alcove_domain::theme::{THEME_SIDE_EFFECT_CONTAINERS, ThemeCatalog};

use crate::ports::{KvStore, Presentation};
use crate::services::preference_service::PreferenceService;

/// Loader state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeState {
    NoThemeLoaded,
    Loaded(String),
}

/// Application service for theme selection and restoration.
pub struct ThemeService<K, P> {
    preferences: Arc<PreferenceService<K>>,
    presentation: Arc<P>,
    state: Mutex<ThemeState>,
}

impl<K: KvStore, P: Presentation> ThemeService<K, P> {
    /// Create a new service over the preference store and presentation sink.
    pub fn new(preferences: Arc<PreferenceService<K>>, presentation: Arc<P>) -> Self {
        Self {
            preferences,
            presentation,
            state: Mutex::new(ThemeState::NoThemeLoaded),
        }
    }

    /// The current loader state.
    pub fn current(&self) -> ThemeState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Select a theme by id.
    ///
    /// # Errors
    ///
    /// Returns [`AlcoveError::NotFound`] when `id` is absent from the
    /// catalog; the loaded theme is left unchanged. Returns a storage error
    /// when persisting the selection fails (the injection has already
    /// happened at that point — last-write-wins, eventual convergence).
    pub async fn select_theme(
        &self,
        catalog: &ThemeCatalog,
        id: &str,
    ) -> Result<(), AlcoveError> {
        let theme = catalog.resolve(id).ok_or_else(|| NotFoundError {
            kind: "Theme",
            id: id.to_string(),
        })?;
        let url = catalog.resource_url(theme);

        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if let ThemeState::Loaded(prev) = &*state {
                tracing::debug!(from = %prev, to = %id, "switching theme");
                self.presentation.remove_theme_resource();
                // Advisory cleanup: themes may leak nodes beyond these.
                for container in THEME_SIDE_EFFECT_CONTAINERS {
                    self.presentation.remove_container(container);
                }
            }
            self.presentation.inject_theme_resource(&url);
            *state = ThemeState::Loaded(id.to_string());
        }

        self.preferences
            .update(|record| record.selected_theme = id.to_string())
            .await?;
        Ok(())
    }

    /// Re-inject the persisted theme on startup, normalising an unknown or
    /// empty selection to the catalog default.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the preference store, or
    /// [`AlcoveError::NotFound`] when even the catalog default is missing
    /// from its own theme list.
    pub async fn restore(&self, catalog: &ThemeCatalog) -> Result<(), AlcoveError> {
        let mut record = self.preferences.load().await?;
        if record.normalize_theme(catalog) {
            tracing::debug!(theme = %record.selected_theme, "falling back to default theme");
        }
        let id = record.selected_theme.clone();
        self.select_theme(catalog, &id).await
    }
}
