//! # alcove-adapter-virtual
//!
//! Virtual/demo adapter — simulated implementations of the outbound ports.
//!
//! ## Responsibilities
//! - [`VirtualPresentation`]: records presentation commands into an
//!   inspectable [`Scene`] instead of driving a real surface
//! - [`InMemoryKvStore`]: process-lifetime key-value scope
//! - [`StaticCatalogSource`]: canned catalog documents, no network
//!
//! Used by integration tests and by deployments without a real
//! presentation surface attached.

pub mod catalog_source;
pub mod kv_store;
pub mod presentation;

pub use catalog_source::StaticCatalogSource;
pub use kv_store::InMemoryKvStore;
pub use presentation::{Scene, VirtualPresentation};
