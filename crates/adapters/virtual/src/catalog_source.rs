//! Canned implementation of [`CatalogSource`] — no network involved.

use std::future::Future;

use alcove_app::ports::CatalogSource;
use alcove_domain::addon::{Addon, AddonCatalog};
use alcove_domain::catalog::{AppEntry, UpdateEntry};
use alcove_domain::error::AlcoveError;
use alcove_domain::theme::{Theme, ThemeCatalog};

/// Catalog source serving fixed documents, for tests and demo deployments.
#[derive(Debug, Clone)]
pub struct StaticCatalogSource {
    pub themes: ThemeCatalog,
    pub addons: AddonCatalog,
    pub apps: Vec<AppEntry>,
    pub updates: Vec<UpdateEntry>,
    /// Size reported for every resource probe.
    pub resource_size_bytes: u64,
}

impl Default for StaticCatalogSource {
    fn default() -> Self {
        let site = "https://assets.alcove.example".to_string();
        Self {
            themes: ThemeCatalog {
                site: site.clone(),
                default_theme: "classic".to_string(),
                themes: vec![
                    Theme {
                        id: "classic".to_string(),
                        name: "Classic".to_string(),
                        theme_path: "/themes/classic.json".to_string(),
                    },
                    Theme {
                        id: "midnight".to_string(),
                        name: "Midnight".to_string(),
                        theme_path: "/themes/midnight.json".to_string(),
                    },
                ],
            },
            addons: AddonCatalog {
                site: site.clone(),
                addons: vec![Addon {
                    id: "sparkles".to_string(),
                    name: "Sparkles".to_string(),
                    author: "demo".to_string(),
                    version: "1.0.0".to_string(),
                    description: "Cursor sparkles on every page".to_string(),
                    icon_path: "/addons/sparkles.png".to_string(),
                    script_url: format!("{site}/addons/sparkles.js"),
                    rating: Some(4.5),
                    users: Some("1.2k".to_string()),
                    file_size: None,
                }],
            },
            apps: vec![AppEntry {
                id: 1,
                name: "Notes".to_string(),
                icon: "notes.png".to_string(),
                category: "productivity".to_string(),
                description: "A plain notepad".to_string(),
                link: format!("{site}/apps/notes"),
            }],
            updates: vec![UpdateEntry {
                update_number: 1,
                version: "1.0.0".to_string(),
                update_date: "2025-01-01".to_string(),
                changes: vec!["Initial release".to_string()],
            }],
            resource_size_bytes: 42_291,
        }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn fetch_themes(&self) -> impl Future<Output = Result<ThemeCatalog, AlcoveError>> + Send {
        let themes = self.themes.clone();
        async move { Ok(themes) }
    }

    fn fetch_addons(&self) -> impl Future<Output = Result<AddonCatalog, AlcoveError>> + Send {
        let addons = self.addons.clone();
        async move { Ok(addons) }
    }

    fn fetch_apps(&self) -> impl Future<Output = Result<Vec<AppEntry>, AlcoveError>> + Send {
        let apps = self.apps.clone();
        async move { Ok(apps) }
    }

    fn fetch_updates(&self) -> impl Future<Output = Result<Vec<UpdateEntry>, AlcoveError>> + Send {
        let updates = self.updates.clone();
        async move { Ok(updates) }
    }

    fn resource_size(&self, _url: &str) -> impl Future<Output = Result<u64, AlcoveError>> + Send {
        let size = self.resource_size_bytes;
        async move { Ok(size) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_serve_a_valid_default_theme_catalog() {
        let source = StaticCatalogSource::default();
        let catalog = source.fetch_themes().await.unwrap();
        catalog.validate().unwrap();
        assert!(catalog.resolve(&catalog.default_theme).is_some());
    }

    #[tokio::test]
    async fn should_report_the_configured_resource_size() {
        let source = StaticCatalogSource {
            resource_size_bytes: 1024,
            ..StaticCatalogSource::default()
        };
        assert_eq!(source.resource_size("anything").await.unwrap(), 1024);
    }
}
