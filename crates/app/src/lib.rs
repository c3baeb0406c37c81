//! # alcove-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `KvStore` — the local key-value persistence scope
//!   - `UserRepository` — account storage
//!   - `CatalogSource` — remote JSON catalog fetching
//!   - `Presentation` — the single side-effect boundary for global
//!     presentation state (root font size, classes, injected resources)
//! - Define **use-case services**:
//!   - `PreferenceService` — load/save/reset the preference record
//!   - `SettingsApplicator` — diff desired vs applied presentation state
//!   - `ThemeService` — the theme loader state machine
//!   - `AddonService` — install/uninstall with simulated download progress
//!   - `CatalogService` — fetch-once caching of remote catalogs
//!   - `AuthService` — login, signup, account and inactivity cleanup
//!   - `SessionService` — persistent vs session-scoped identity
//!
//! ## Dependency rule
//! Depends on `alcove-domain` only (plus `tokio::sync` / `tokio::time` for
//! in-process infrastructure). Never imports adapter crates. Adapters depend
//! on *this* crate, not the reverse.

pub mod applicator;
pub mod ports;
pub mod services;
