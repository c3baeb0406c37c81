//! User repository port — account persistence.

use std::future::Future;

use alcove_domain::error::AlcoveError;
use alcove_domain::id::UserId;
use alcove_domain::time::Timestamp;
use alcove_domain::user::User;

/// Repository for persisting and querying accounts.
pub trait UserRepository {
    /// Insert a new account.
    fn create(&self, user: User) -> impl Future<Output = Result<User, AlcoveError>> + Send;

    /// Exact `(username, secret_key_hash)` lookup.
    ///
    /// Returns `None` for both "no such user" and "wrong key" — the caller
    /// must not be able to distinguish them.
    fn find_by_credentials(
        &self,
        username: &str,
        secret_key_hash: &str,
    ) -> impl Future<Output = Result<Option<User>, AlcoveError>> + Send;

    /// Whether an account with this username exists.
    fn username_exists(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<bool, AlcoveError>> + Send;

    /// Update the last-active timestamp.
    fn touch_last_active(
        &self,
        id: UserId,
        at: Timestamp,
    ) -> impl Future<Output = Result<(), AlcoveError>> + Send;

    /// Delete an account by id.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), AlcoveError>> + Send;

    /// Delete every account whose last-active timestamp is older than
    /// `cutoff`, returning the number of deleted records.
    fn delete_inactive_before(
        &self,
        cutoff: Timestamp,
    ) -> impl Future<Output = Result<u64, AlcoveError>> + Send;
}
