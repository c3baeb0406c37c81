//! Key-value persistence port — one storage scope.
//!
//! Mirrors the original per-origin string store: a flat namespace of string
//! keys to string values, written last-write-wins with no versioning. The
//! portal uses one persistent scope and one session-only scope.

use std::future::Future;

use alcove_domain::error::AlcoveError;

/// A single key-value storage scope.
pub trait KvStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, AlcoveError>> + Send;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str)
    -> impl Future<Output = Result<(), AlcoveError>> + Send;

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), AlcoveError>> + Send;

    /// Remove every key in this scope.
    fn clear(&self) -> impl Future<Output = Result<(), AlcoveError>> + Send;
}
