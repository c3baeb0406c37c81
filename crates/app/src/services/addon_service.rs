//! Add-on service — install, uninstall, and the installed set.
//!
//! Installation probes the real resource size, then runs a simulated
//! ten-step download timer before recording the add-on's script URL in the
//! persisted installed set. The add is idempotent: installing an already
//! installed add-on changes nothing.

use std::sync::Arc;
use std::time::Duration;

use alcove_domain::addon::{AddonCatalog, InstalledAddonSet};
use alcove_domain::error::{AlcoveError, NotFoundError};

use crate::ports::{CatalogSource, KvStore, Presentation};

/// Fixed key the installed set is persisted under.
pub const INSTALLED_ADDONS_KEY: &str = "alcove_installed_addons";

/// Number of simulated download progress steps.
pub const INSTALL_PROGRESS_STEPS: u8 = 10;

const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(100);

/// Result of an install call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub addon_id: String,
    pub script_url: String,
    /// Human-readable download size, e.g. `"41.3kb"`. Absent when the
    /// add-on was already installed and no download was simulated.
    pub file_size: Option<String>,
    /// `false` when the call was a no-op on set membership.
    pub newly_installed: bool,
}

/// Application service for the add-on installer.
pub struct AddonService<K, C, P> {
    store: K,
    source: Arc<C>,
    presentation: Arc<P>,
    step_delay: Duration,
}

impl<K: KvStore, C: CatalogSource, P: Presentation> AddonService<K, C, P> {
    /// Create a new service with the default progress-step delay.
    pub fn new(store: K, source: Arc<C>, presentation: Arc<P>) -> Self {
        Self {
            store,
            source,
            presentation,
            step_delay: DEFAULT_STEP_DELAY,
        }
    }

    /// Override the simulated download step delay (tests use zero).
    #[must_use]
    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    /// Load the installed set, substituting an empty set for corrupt data.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backing store fails.
    pub async fn installed(&self) -> Result<InstalledAddonSet, AlcoveError> {
        let Some(raw) = self.store.get(INSTALLED_ADDONS_KEY).await? else {
            return Ok(InstalledAddonSet::default());
        };
        match serde_json::from_str(&raw) {
            Ok(set) => Ok(set),
            Err(err) => {
                tracing::debug!(error = %err, "discarding corrupt installed-addon set");
                Ok(InstalledAddonSet::default())
            }
        }
    }

    async fn save_installed(&self, set: &InstalledAddonSet) -> Result<(), AlcoveError> {
        let raw =
            serde_json::to_string(set).map_err(|err| AlcoveError::Storage(Box::new(err)))?;
        self.store.set(INSTALLED_ADDONS_KEY, &raw).await
    }

    /// Install an add-on by catalog id.
    ///
    /// # Errors
    ///
    /// [`AlcoveError::NotFound`] for an unknown id, [`AlcoveError::Remote`]
    /// when the size probe fails, or a storage error from persisting the set.
    pub async fn install(
        &self,
        catalog: &AddonCatalog,
        addon_id: &str,
    ) -> Result<InstallOutcome, AlcoveError> {
        self.install_with_progress(catalog, addon_id, |_| {}).await
    }

    /// Install with a progress callback receiving percentages 10..=100.
    ///
    /// # Errors
    ///
    /// See [`AddonService::install`].
    pub async fn install_with_progress(
        &self,
        catalog: &AddonCatalog,
        addon_id: &str,
        mut on_progress: impl FnMut(u8) + Send,
    ) -> Result<InstallOutcome, AlcoveError> {
        let addon = catalog.resolve(addon_id).ok_or_else(|| NotFoundError {
            kind: "Addon",
            id: addon_id.to_string(),
        })?;

        let mut set = self.installed().await?;
        if set.contains(&addon.script_url) {
            return Ok(InstallOutcome {
                addon_id: addon.id.clone(),
                script_url: addon.script_url.clone(),
                file_size: None,
                newly_installed: false,
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let file_size = {
            let bytes = self.source.resource_size(&addon.script_url).await?;
            format!("{:.1}kb", bytes as f64 / 1024.0)
        };

        for step in 1..=INSTALL_PROGRESS_STEPS {
            tokio::time::sleep(self.step_delay).await;
            on_progress(step * (100 / INSTALL_PROGRESS_STEPS));
        }

        set.insert(&addon.script_url);
        self.save_installed(&set).await?;
        tracing::info!(addon = %addon.id, size = %file_size, "add-on installed");

        Ok(InstallOutcome {
            addon_id: addon.id.clone(),
            script_url: addon.script_url.clone(),
            file_size: Some(file_size),
            newly_installed: true,
        })
    }

    /// Uninstall an add-on, removing its script URL and injected container.
    ///
    /// Returns `false` when the add-on was not installed.
    ///
    /// # Errors
    ///
    /// [`AlcoveError::NotFound`] for an unknown id, or a storage error.
    pub async fn uninstall(
        &self,
        catalog: &AddonCatalog,
        addon_id: &str,
    ) -> Result<bool, AlcoveError> {
        let addon = catalog.resolve(addon_id).ok_or_else(|| NotFoundError {
            kind: "Addon",
            id: addon_id.to_string(),
        })?;

        let mut set = self.installed().await?;
        let removed = set.remove(&addon.script_url);
        if removed {
            self.save_installed(&set).await?;
        }
        self.presentation.remove_container(&addon.container_id());
        Ok(removed)
    }

    /// Forget every installed add-on (the clear-data action).
    ///
    /// # Errors
    ///
    /// Returns a storage error when the removal fails.
    pub async fn clear_installed(&self) -> Result<(), AlcoveError> {
        self.store.remove(INSTALLED_ADDONS_KEY).await
    }
}
