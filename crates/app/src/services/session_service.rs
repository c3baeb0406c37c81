//! Session service — remembering the logged-in user across restarts.
//!
//! "Remember me" picks the persistent scope; otherwise the session-lifetime
//! scope is used. The stored blob is a cache, never an authority: a corrupt
//! value simply means logged out.

use alcove_domain::error::AlcoveError;
use alcove_domain::user::{SessionUser, StorageScope};

use crate::ports::KvStore;

/// Fixed key the session user is persisted under, in either scope.
pub const SESSION_USER_KEY: &str = "alcove_user";

/// Application service holding the two session storage scopes.
pub struct SessionService<P, S> {
    persistent: P,
    session: S,
}

impl<P: KvStore, S: KvStore> SessionService<P, S> {
    /// Create a new service over the persistent and session-lifetime scopes.
    pub fn new(persistent: P, session: S) -> Self {
        Self {
            persistent,
            session,
        }
    }

    /// Store the user in the requested scope, clearing the other one so at
    /// most one scope holds a user at a time.
    ///
    /// # Errors
    ///
    /// Returns a storage error when either scope fails.
    pub async fn store(
        &self,
        user: &SessionUser,
        scope: StorageScope,
    ) -> Result<(), AlcoveError> {
        let raw =
            serde_json::to_string(user).map_err(|err| AlcoveError::Storage(Box::new(err)))?;

        match scope {
            StorageScope::Persistent => {
                self.session.remove(SESSION_USER_KEY).await?;
                self.persistent.set(SESSION_USER_KEY, &raw).await
            }
            StorageScope::Session => {
                self.persistent.remove(SESSION_USER_KEY).await?;
                self.session.set(SESSION_USER_KEY, &raw).await
            }
        }
    }

    /// The remembered user, checking the persistent scope first.
    ///
    /// A corrupt blob reads as `None`.
    ///
    /// # Errors
    ///
    /// Returns a storage error when a scope read fails.
    pub async fn current(&self) -> Result<Option<SessionUser>, AlcoveError> {
        for raw in [
            self.persistent.get(SESSION_USER_KEY).await?,
            self.session.get(SESSION_USER_KEY).await?,
        ]
        .into_iter()
        .flatten()
        {
            match serde_json::from_str(&raw) {
                Ok(user) => return Ok(Some(user)),
                Err(err) => {
                    tracing::debug!(error = %err, "discarding corrupt session blob");
                }
            }
        }
        Ok(None)
    }

    /// Forget the remembered user in both scopes.
    ///
    /// # Errors
    ///
    /// Returns a storage error when a removal fails.
    pub async fn logout(&self) -> Result<(), AlcoveError> {
        self.persistent.remove(SESSION_USER_KEY).await?;
        self.session.remove(SESSION_USER_KEY).await
    }
}
