//! Catalog service — fetch-once caching of the remote JSON documents.
//!
//! Each document is fetched at most once per process lifetime; the cached
//! copy is served afterwards. A failed fetch is surfaced to the caller and
//! leaves the cell empty — the next request plays the role of the original
//! design's full page reload.

use std::sync::Arc;

use tokio::sync::OnceCell;

use alcove_domain::addon::AddonCatalog;
use alcove_domain::catalog::{self, AppEntry, UpdateEntry};
use alcove_domain::error::AlcoveError;
use alcove_domain::theme::ThemeCatalog;

use crate::ports::CatalogSource;

/// Application service caching the four remote catalogs.
pub struct CatalogService<C> {
    source: Arc<C>,
    themes: OnceCell<ThemeCatalog>,
    addons: OnceCell<AddonCatalog>,
    apps: OnceCell<Vec<AppEntry>>,
    updates: OnceCell<Vec<UpdateEntry>>,
}

impl<C: CatalogSource> CatalogService<C> {
    /// Create a new service over the given fetcher.
    pub fn new(source: Arc<C>) -> Self {
        Self {
            source,
            themes: OnceCell::new(),
            addons: OnceCell::new(),
            apps: OnceCell::new(),
            updates: OnceCell::new(),
        }
    }

    /// The themes catalog, fetched and validated on first use.
    ///
    /// # Errors
    ///
    /// Returns [`AlcoveError::Remote`] when the fetch fails, or a validation
    /// error when the published document violates its own invariants.
    pub async fn themes(&self) -> Result<&ThemeCatalog, AlcoveError> {
        self.themes
            .get_or_try_init(|| async {
                let catalog = self.source.fetch_themes().await?;
                catalog.validate()?;
                Ok(catalog)
            })
            .await
    }

    /// The add-ons catalog, fetched on first use.
    ///
    /// # Errors
    ///
    /// Returns [`AlcoveError::Remote`] when the fetch fails.
    pub async fn addons(&self) -> Result<&AddonCatalog, AlcoveError> {
        self.addons
            .get_or_try_init(|| self.source.fetch_addons())
            .await
    }

    /// The apps catalog, fetched on first use.
    ///
    /// # Errors
    ///
    /// Returns [`AlcoveError::Remote`] when the fetch fails.
    pub async fn apps(&self) -> Result<&[AppEntry], AlcoveError> {
        self.apps
            .get_or_try_init(|| self.source.fetch_apps())
            .await
            .map(Vec::as_slice)
    }

    /// The changelog feed, latest entry first.
    ///
    /// # Errors
    ///
    /// Returns [`AlcoveError::Remote`] when the fetch fails.
    pub async fn updates(&self) -> Result<&[UpdateEntry], AlcoveError> {
        self.updates
            .get_or_try_init(|| async {
                let mut updates = self.source.fetch_updates().await?;
                catalog::sort_latest_first(&mut updates);
                Ok(updates)
            })
            .await
            .map(Vec::as_slice)
    }
}
