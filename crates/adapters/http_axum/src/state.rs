//! Shared application state for axum handlers.

use std::sync::Arc;

use alcove_app::applicator::SettingsApplicator;
use alcove_app::ports::{CatalogSource, KvStore, Presentation, UserRepository};
use alcove_app::services::addon_service::AddonService;
use alcove_app::services::auth_service::AuthService;
use alcove_app::services::catalog_service::CatalogService;
use alcove_app::services::preference_service::PreferenceService;
use alcove_app::services::session_service::SessionService;
use alcove_app::services::theme_service::ThemeService;

/// Application state shared across all axum handlers.
///
/// Generic over the user repository, the persistent and session key-value
/// scopes, the catalog source, and the presentation sink to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R, K, S, C, P> {
    /// Account operations.
    pub auth_service: Arc<AuthService<R>>,
    /// Preference record load/save.
    pub preference_service: Arc<PreferenceService<K>>,
    /// Diff-based presentation command issuer.
    pub applicator: Arc<SettingsApplicator<Arc<P>>>,
    /// Theme loader state machine.
    pub theme_service: Arc<ThemeService<K, P>>,
    /// Add-on installer.
    pub addon_service: Arc<AddonService<K, C, P>>,
    /// Fetch-once catalog cache.
    pub catalog_service: Arc<CatalogService<C>>,
    /// Remembered-user storage.
    pub session_service: Arc<SessionService<K, S>>,
}

impl<R, K, S, C, P> Clone for AppState<R, K, S, C, P> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            preference_service: Arc::clone(&self.preference_service),
            applicator: Arc::clone(&self.applicator),
            theme_service: Arc::clone(&self.theme_service),
            addon_service: Arc::clone(&self.addon_service),
            catalog_service: Arc::clone(&self.catalog_service),
            session_service: Arc::clone(&self.session_service),
        }
    }
}

impl<R, K, S, C, P> AppState<R, K, S, C, P>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Services arrive pre-wrapped because the composition root shares them
    /// with background tasks (cleanup job, startup restore) before the HTTP
    /// state exists.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth_service: Arc<AuthService<R>>,
        preference_service: Arc<PreferenceService<K>>,
        applicator: Arc<SettingsApplicator<Arc<P>>>,
        theme_service: Arc<ThemeService<K, P>>,
        addon_service: Arc<AddonService<K, C, P>>,
        catalog_service: Arc<CatalogService<C>>,
        session_service: Arc<SessionService<K, S>>,
    ) -> Self {
        Self {
            auth_service,
            preference_service,
            applicator,
            theme_service,
            addon_service,
            catalog_service,
            session_service,
        }
    }
}
