//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `created_at`, `last_active`, and cleanup cutoffs.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
