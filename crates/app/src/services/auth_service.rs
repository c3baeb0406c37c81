//! Auth service — login, signup, account deletion, inactivity cleanup.
//!
//! Stateless request/response semantics: no session protocol, no token
//! issuance, no rate limiting. Login failures are deliberately generic so a
//! caller cannot enumerate usernames.

use chrono::Duration;

use alcove_domain::error::{AlcoveError, ValidationError};
use alcove_domain::id::UserId;
use alcove_domain::time::now;
use alcove_domain::user::{
    SessionUser, User, hash_secret_key, validate_secret_key, validate_username,
};

use crate::ports::UserRepository;

/// Accounts idle longer than this are removed by the cleanup job.
pub const INACTIVITY_WINDOW_DAYS: i64 = 14;

/// Application service for account operations.
pub struct AuthService<R> {
    repo: R,
}

impl<R: UserRepository> AuthService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Hash-compare login.
    ///
    /// The returned [`SessionUser`] echoes the plaintext secret key as
    /// received so the client can display it back to its owner. The hash is
    /// never returned.
    ///
    /// # Errors
    ///
    /// [`AlcoveError::Validation`] when either field is empty, otherwise
    /// [`AlcoveError::Unauthorized`] on any credential mismatch.
    pub async fn login(
        &self,
        username: &str,
        secret_key: &str,
    ) -> Result<SessionUser, AlcoveError> {
        if username.is_empty() || secret_key.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }

        let hash = hash_secret_key(secret_key);
        let Some(user) = self.repo.find_by_credentials(username, &hash).await? else {
            tracing::debug!(username, "login rejected");
            return Err(AlcoveError::Unauthorized);
        };

        self.repo.touch_last_active(user.id, now()).await?;
        tracing::info!(user_id = %user.id, "user logged in");

        Ok(SessionUser {
            id: user.id,
            username: user.username,
            secret_key: secret_key.to_string(),
        })
    }

    /// Insert-on-unique-username signup.
    ///
    /// # Errors
    ///
    /// [`AlcoveError::Validation`] for a bad username or secret key shape,
    /// [`AlcoveError::Conflict`] when the username is taken.
    pub async fn signup(&self, username: &str, secret_key: &str) -> Result<User, AlcoveError> {
        validate_username(username)?;
        validate_secret_key(secret_key)?;

        if self.repo.username_exists(username).await? {
            return Err(AlcoveError::Conflict);
        }

        let user = User::new(username, hash_secret_key(secret_key));
        let user = self.repo.create(user).await?;
        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// Permanently delete an account.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the repository.
    pub async fn delete_account(&self, id: UserId) -> Result<(), AlcoveError> {
        self.repo.delete(id).await?;
        tracing::info!(user_id = %id, "account deleted");
        Ok(())
    }

    /// Delete accounts idle longer than [`INACTIVITY_WINDOW_DAYS`],
    /// returning the number removed.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the repository.
    pub async fn delete_inactive(&self) -> Result<u64, AlcoveError> {
        let cutoff = now() - Duration::days(INACTIVITY_WINDOW_DAYS);
        let deleted = self.repo.delete_inactive_before(cutoff).await?;
        tracing::info!(deleted, "inactive account cleanup finished");
        Ok(deleted)
    }
}
