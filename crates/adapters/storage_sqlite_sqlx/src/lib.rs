//! # alcove-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `UserRepository` and `KvStore` ports defined in `alcove-app`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `alcove-app` (for port traits) and `alcove-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod kv_store;
pub mod pool;
pub mod user_repo;

pub use kv_store::SqliteKvStore;
pub use pool::{Config, Database};
pub use user_repo::SqliteUserRepository;
