//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the use-case layer
//! and the adapter layer can depend on them without creating circular
//! dependencies.

pub mod catalog_source;
pub mod kv_store;
pub mod presentation;
pub mod user_repo;

pub use catalog_source::CatalogSource;
pub use kv_store::KvStore;
pub use presentation::Presentation;
pub use user_repo::UserRepository;
