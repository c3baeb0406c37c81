//! # alcove-domain
//!
//! Pure domain model for the alcove games/apps portal.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **PreferenceRecord** (user-facing settings) and its
//!   forward-compatible persistence contract
//! - Define the **PresentationState** (desired global presentation) as a
//!   pure function of preferences
//! - Define **ThemeCatalog**, **AddonCatalog**, app and changelog entries
//! - Define **Users** and credential validation/hashing rules
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod addon;
pub mod catalog;
pub mod preferences;
pub mod presentation;
pub mod theme;
pub mod user;
