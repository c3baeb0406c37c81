//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic
//! parameters (constructor injection), keeping this layer decoupled from
//! concrete adapters.

pub mod addon_service;
pub mod auth_service;
pub mod catalog_service;
pub mod preference_service;
pub mod session_service;
pub mod theme_service;
