//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use alcove_app::ports::UserRepository;
use alcove_domain::error::AlcoveError;
use alcove_domain::id::UserId;
use alcove_domain::time::Timestamp;
use alcove_domain::user::User;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

fn decode_timestamp(raw: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let username: String = row.try_get("username")?;
        let secret_key_hash: String = row.try_get("secret_key_hash")?;
        let created_at: String = row.try_get("created_at")?;
        let last_active: String = row.try_get("last_active")?;

        let id = UserId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(User {
            id,
            username,
            secret_key_hash,
            created_at: decode_timestamp(&created_at)?,
            last_active: decode_timestamp(&last_active)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (id, username, secret_key_hash, created_at, last_active) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_CREDENTIALS: &str =
    "SELECT * FROM users WHERE username = ? AND secret_key_hash = ?";
const COUNT_BY_USERNAME: &str = "SELECT COUNT(*) FROM users WHERE username = ?";
const TOUCH_LAST_ACTIVE: &str = "UPDATE users SET last_active = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = ?";
const DELETE_INACTIVE: &str = "DELETE FROM users WHERE last_active < ?";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: User) -> impl Future<Output = Result<User, AlcoveError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(user.id.to_string())
                .bind(&user.username)
                .bind(&user.secret_key_hash)
                .bind(user.created_at.to_rfc3339())
                .bind(user.last_active.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(|err| {
                    // The UNIQUE constraint on username doubles as the
                    // duplicate check under concurrent signups.
                    if err
                        .as_database_error()
                        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
                    {
                        AlcoveError::Conflict
                    } else {
                        StorageError::from(err).into()
                    }
                })?;

            Ok(user)
        }
    }

    fn find_by_credentials(
        &self,
        username: &str,
        secret_key_hash: &str,
    ) -> impl Future<Output = Result<Option<User>, AlcoveError>> + Send {
        let pool = self.pool.clone();
        let username = username.to_string();
        let secret_key_hash = secret_key_hash.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_CREDENTIALS)
                .bind(&username)
                .bind(&secret_key_hash)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn username_exists(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<bool, AlcoveError>> + Send {
        let pool = self.pool.clone();
        let username = username.to_string();
        async move {
            let (count,): (i64,) = sqlx::query_as(COUNT_BY_USERNAME)
                .bind(&username)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(count > 0)
        }
    }

    fn touch_last_active(
        &self,
        id: UserId,
        at: Timestamp,
    ) -> impl Future<Output = Result<(), AlcoveError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(TOUCH_LAST_ACTIVE)
                .bind(at.to_rfc3339())
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), AlcoveError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn delete_inactive_before(
        &self,
        cutoff: Timestamp,
    ) -> impl Future<Output = Result<u64, AlcoveError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_INACTIVE)
                .bind(cutoff.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }
}
