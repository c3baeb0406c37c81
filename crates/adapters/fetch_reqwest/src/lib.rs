//! # alcove-adapter-fetch-reqwest
//!
//! HTTP catalog fetcher using [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `CatalogSource` port defined in `alcove-app`
//! - Fetch the four published JSON documents over plain HTTPS GET
//! - Probe resource sizes for the add-on installer
//!
//! No retry, no backoff, no caching. Each call is one GET.
//!
//! ## Dependency rule
//! Depends on `alcove-app` (for the port trait) and `alcove-domain` (for
//! catalog types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod error;

use std::future::Future;

use serde::de::DeserializeOwned;

use alcove_app::ports::CatalogSource;
use alcove_domain::addon::AddonCatalog;
use alcove_domain::catalog::{AppEntry, UpdateEntry};
use alcove_domain::error::AlcoveError;
use alcove_domain::theme::ThemeCatalog;

use crate::error::FetchError;

/// URLs of the four published catalog documents.
#[derive(Debug, Clone)]
pub struct RemoteEndpoints {
    pub themes_url: String,
    pub addons_url: String,
    pub apps_url: String,
    pub updates_url: String,
}

impl Default for RemoteEndpoints {
    fn default() -> Self {
        Self {
            themes_url: "https://alcove-net.github.io/alcove-assets/themes/themes.json"
                .to_string(),
            addons_url: "https://alcove-net.github.io/alcove-assets/addons/addons.json"
                .to_string(),
            apps_url: "https://alcove-net.github.io/alcove-assets/data/apps.json".to_string(),
            updates_url: "https://alcove-net.github.io/alcove-assets/data/updates.json"
                .to_string(),
        }
    }
}

/// HTTP-backed catalog source.
pub struct HttpCatalogSource {
    client: reqwest::Client,
    endpoints: RemoteEndpoints,
}

impl HttpCatalogSource {
    /// Create a new source fetching from the given endpoints.
    #[must_use]
    pub fn new(endpoints: RemoteEndpoints) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AlcoveError> {
        let fetch = async {
            self.client
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .json::<T>()
                .await
                .map_err(FetchError::from)
        };
        Ok(fetch.await?)
    }
}

impl Default for HttpCatalogSource {
    fn default() -> Self {
        Self::new(RemoteEndpoints::default())
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch_themes(&self) -> impl Future<Output = Result<ThemeCatalog, AlcoveError>> + Send {
        self.get_json(&self.endpoints.themes_url)
    }

    fn fetch_addons(&self) -> impl Future<Output = Result<AddonCatalog, AlcoveError>> + Send {
        self.get_json(&self.endpoints.addons_url)
    }

    fn fetch_apps(&self) -> impl Future<Output = Result<Vec<AppEntry>, AlcoveError>> + Send {
        self.get_json(&self.endpoints.apps_url)
    }

    fn fetch_updates(&self) -> impl Future<Output = Result<Vec<UpdateEntry>, AlcoveError>> + Send {
        self.get_json(&self.endpoints.updates_url)
    }

    fn resource_size(&self, url: &str) -> impl Future<Output = Result<u64, AlcoveError>> + Send {
        let client = self.client.clone();
        let url = url.to_string();
        async move {
            let size = async {
                let response = client.get(&url).send().await?.error_for_status()?;
                // Published assets rarely send Content-Length through the
                // CDN, so fall back to downloading the body.
                match response.content_length() {
                    Some(len) => Ok::<_, reqwest::Error>(len),
                    None => Ok(response.bytes().await?.len() as u64),
                }
            };
            Ok(size.await.map_err(FetchError::from)?)
        }
    }
}
