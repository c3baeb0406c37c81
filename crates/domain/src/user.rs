//! Users, session identity, and credential rules.
//!
//! Credentials are a username plus a secret key. Only the SHA-256 hex digest
//! of the key is ever stored; login compares digests for exact equality.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::ValidationError;
use crate::id::UserId;
use crate::time::{Timestamp, now};

/// Username length bounds, inclusive.
pub const USERNAME_MIN_LEN: usize = 3;
/// See [`USERNAME_MIN_LEN`].
pub const USERNAME_MAX_LEN: usize = 20;
/// Minimum secret key length.
pub const SECRET_KEY_MIN_LEN: usize = 8;

/// A stored account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub secret_key_hash: String,
    pub created_at: Timestamp,
    pub last_active: Timestamp,
}

impl User {
    /// Create a fresh account with the current time as both timestamps.
    #[must_use]
    pub fn new(username: impl Into<String>, secret_key_hash: impl Into<String>) -> Self {
        let ts = now();
        Self {
            id: UserId::new(),
            username: username.into(),
            secret_key_hash: secret_key_hash.into(),
            created_at: ts,
            last_active: ts,
        }
    }
}

/// The identity a client keeps after login.
///
/// Carries the plaintext secret key as received so the account page can show
/// it back to its owner. It is never persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: UserId,
    pub username: String,
    pub secret_key: String,
}

/// Where a session identity is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageScope {
    /// Survives restarts ("remember me").
    Persistent,
    /// Cleared when the process ends.
    Session,
}

/// Check the username allow-list pattern and length bound.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the violated rule.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::UsernameCharset);
    }
    if username.len() < USERNAME_MIN_LEN || username.len() > USERNAME_MAX_LEN {
        return Err(ValidationError::UsernameLength {
            min: USERNAME_MIN_LEN,
            max: USERNAME_MAX_LEN,
        });
    }
    Ok(())
}

/// Check the secret key minimum length.
///
/// # Errors
///
/// Returns a [`ValidationError`] when the key is missing or too short.
pub fn validate_secret_key(secret_key: &str) -> Result<(), ValidationError> {
    if secret_key.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    if secret_key.len() < SECRET_KEY_MIN_LEN {
        return Err(ValidationError::SecretKeyTooShort {
            min: SECRET_KEY_MIN_LEN,
        });
    }
    Ok(())
}

/// SHA-256 digest of the secret key, hex-encoded lowercase.
#[must_use]
pub fn hash_secret_key(secret_key: &str) -> String {
    let digest = Sha256::digest(secret_key.as_bytes());
    hex::encode(digest)
}
