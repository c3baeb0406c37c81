//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`AlcoveError`]
//! via `#[from]` or an explicit `From` impl. Nothing in this taxonomy is
//! fatal to the process: adapters map every variant to a degraded response.

/// Validation failures for user-supplied input.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Username or secret key missing from a credential pair.
    #[error("username and secret key are required")]
    MissingCredentials,

    /// Username contains characters outside the allow-list.
    #[error("username can only contain letters, numbers, hyphens, and underscores")]
    UsernameCharset,

    /// Username length outside the `[min, max]` bound.
    #[error("username must be between {min} and {max} characters")]
    UsernameLength { min: usize, max: usize },

    /// Secret key shorter than the minimum.
    #[error("secret key must be at least {min} characters")]
    SecretKeyTooShort { min: usize },

    /// An identifier failed to parse.
    #[error("invalid identifier")]
    InvalidId,

    /// A catalog document violates its own invariants.
    #[error("catalog contains duplicate id: {0}")]
    DuplicateCatalogId(String),
}

/// A referenced record does not exist.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} not found: {id}")]
pub struct NotFoundError {
    /// Kind of record, e.g. `"Theme"` or `"Addon"`.
    pub kind: &'static str,
    /// The identifier that failed to resolve.
    pub id: String,
}

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AlcoveError {
    /// Bad input shape, surfaced to the user as a form-level message.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// Credential mismatch. Deliberately generic: callers must not be able
    /// to tell "user not found" from "wrong key".
    #[error("invalid username or secret key")]
    Unauthorized,

    /// Duplicate username at signup.
    #[error("username already taken")]
    Conflict,

    /// A record or catalog entry does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A remote catalog fetch failed. The consuming view stays empty.
    #[error("remote catalog unavailable")]
    Remote(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The local persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
