//! Catalog source port — remote JSON document fetching.
//!
//! One method per data set; each maps to a single HTTPS GET of a
//! fixed-shape document. No retry, no backoff, no cache — caching policy
//! belongs to [`CatalogService`](crate::services::catalog_service::CatalogService).

use std::future::Future;

use alcove_domain::addon::AddonCatalog;
use alcove_domain::catalog::{AppEntry, UpdateEntry};
use alcove_domain::error::AlcoveError;
use alcove_domain::theme::ThemeCatalog;

/// Fetcher for the four published catalog documents.
pub trait CatalogSource {
    /// Fetch the themes catalog.
    fn fetch_themes(&self) -> impl Future<Output = Result<ThemeCatalog, AlcoveError>> + Send;

    /// Fetch the add-ons catalog.
    fn fetch_addons(&self) -> impl Future<Output = Result<AddonCatalog, AlcoveError>> + Send;

    /// Fetch the apps catalog.
    fn fetch_apps(&self) -> impl Future<Output = Result<Vec<AppEntry>, AlcoveError>> + Send;

    /// Fetch the changelog feed.
    fn fetch_updates(&self) -> impl Future<Output = Result<Vec<UpdateEntry>, AlcoveError>> + Send;

    /// Size in bytes of a published resource, used to report a real
    /// download size during add-on installation.
    fn resource_size(&self, url: &str) -> impl Future<Output = Result<u64, AlcoveError>> + Send;
}
