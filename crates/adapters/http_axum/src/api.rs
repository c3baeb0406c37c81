//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod addons;
#[allow(clippy::missing_errors_doc)]
pub mod auth;
#[allow(clippy::missing_errors_doc)]
pub mod catalogs;
#[allow(clippy::missing_errors_doc)]
pub mod maintenance;
#[allow(clippy::missing_errors_doc)]
pub mod preferences;
#[allow(clippy::missing_errors_doc)]
pub mod themes;

use axum::Router;
use axum::routing::{delete, get, post};

use alcove_app::ports::{CatalogSource, KvStore, Presentation, UserRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R, K, S, C, P>() -> Router<AppState<R, K, S, C, P>>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    Router::new()
        // Auth
        .route("/auth/login", post(auth::login::<R, K, S, C, P>))
        .route("/auth/signup", post(auth::signup::<R, K, S, C, P>))
        .route("/auth/session", get(auth::session::<R, K, S, C, P>))
        .route("/auth/logout", post(auth::logout::<R, K, S, C, P>))
        .route(
            "/auth/account",
            delete(auth::delete_account::<R, K, S, C, P>),
        )
        // Catalogs
        .route("/catalogs/apps", get(catalogs::apps::<R, K, S, C, P>))
        .route("/catalogs/updates", get(catalogs::updates::<R, K, S, C, P>))
        .route("/catalogs/themes", get(catalogs::themes::<R, K, S, C, P>))
        // Add-ons
        .route("/addons", get(addons::list::<R, K, S, C, P>))
        .route(
            "/addons/{id}/install",
            post(addons::install::<R, K, S, C, P>),
        )
        .route("/addons/{id}", delete(addons::uninstall::<R, K, S, C, P>))
        // Preferences
        .route(
            "/preferences",
            get(preferences::get_preferences::<R, K, S, C, P>)
                .put(preferences::put_preferences::<R, K, S, C, P>),
        )
        .route(
            "/preferences/reset",
            post(preferences::reset::<R, K, S, C, P>),
        )
        // Themes
        .route("/themes/select", post(themes::select::<R, K, S, C, P>))
        // Maintenance
        .route(
            "/maintenance/cleanup",
            post(maintenance::cleanup::<R, K, S, C, P>),
        )
        .route(
            "/maintenance/clear-data",
            post(maintenance::clear_data::<R, K, S, C, P>),
        )
}
