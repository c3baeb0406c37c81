//! Fetch-specific error type wrapping reqwest errors.

use alcove_domain::error::AlcoveError;

/// Errors originating from the HTTP catalog fetcher.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request failed, returned a non-success status, or the body was
    /// not valid JSON of the expected shape.
    #[error("catalog fetch error")]
    Http(#[from] reqwest::Error),
}

impl From<FetchError> for AlcoveError {
    fn from(err: FetchError) -> Self {
        Self::Remote(Box::new(err))
    }
}
