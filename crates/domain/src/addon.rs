//! Add-on catalog and the locally persisted set of installed add-ons.

use serde::{Deserialize, Serialize};

/// A single add-on as published in the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Addon {
    pub id: String,
    pub name: String,
    pub author: String,
    pub version: String,
    pub description: String,
    pub icon_path: String,
    pub script_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
}

impl Addon {
    /// Case-insensitive search over name and description.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }

    /// Element id of the container this add-on injects when active.
    #[must_use]
    pub fn container_id(&self) -> String {
        format!("addon-{}", self.id)
    }
}

/// The remote add-on catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonCatalog {
    /// Base URL that `iconPath` values are resolved against.
    pub site: String,
    pub addons: Vec<Addon>,
}

impl AddonCatalog {
    /// Look up an add-on by id.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<&Addon> {
        self.addons.iter().find(|addon| addon.id == id)
    }

    /// Split the catalog into (installed, available) views.
    #[must_use]
    pub fn partition<'a>(
        &'a self,
        installed: &InstalledAddonSet,
    ) -> (Vec<&'a Addon>, Vec<&'a Addon>) {
        self.addons
            .iter()
            .partition(|addon| installed.contains(&addon.script_url))
    }
}

/// Persisted set of installed add-on script URLs.
///
/// Membership is exact URL equality. Serialized as a plain JSON array of
/// strings, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstalledAddonSet(Vec<String>);

impl InstalledAddonSet {
    /// Exact-equality membership test.
    #[must_use]
    pub fn contains(&self, script_url: &str) -> bool {
        self.0.iter().any(|url| url == script_url)
    }

    /// Idempotent insert. Returns `false` when the URL was already present.
    pub fn insert(&mut self, script_url: &str) -> bool {
        if self.contains(script_url) {
            return false;
        }
        self.0.push(script_url.to_string());
        true
    }

    /// Remove a URL. Returns `false` when it was not present.
    pub fn remove(&mut self, script_url: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|url| url != script_url);
        self.0.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
