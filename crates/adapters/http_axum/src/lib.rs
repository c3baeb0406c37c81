//! # alcove-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the portal's JSON API (`/api/auth`, `/api/preferences`,
//!   `/api/themes`, `/api/addons`, `/api/catalogs`, `/api/maintenance`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! CORS is permissive: the original edge functions answered any origin and
//! the catalog documents are public anyway.
//!
//! ## Dependency rule
//! Depends on `alcove-app` (for port traits and services) and
//! `alcove-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
