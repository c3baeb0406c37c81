//! `SQLite` implementation of [`KvStore`] — the persistent storage scope.

use std::future::Future;

use sqlx::SqlitePool;

use alcove_app::ports::KvStore;
use alcove_domain::error::AlcoveError;

use crate::error::StorageError;

const SELECT: &str = "SELECT value FROM local_store WHERE key = ?";
const UPSERT: &str =
    "INSERT INTO local_store (key, value) VALUES (?, ?) ON CONFLICT (key) DO UPDATE SET value = excluded.value";
const DELETE: &str = "DELETE FROM local_store WHERE key = ?";
const DELETE_ALL: &str = "DELETE FROM local_store";

/// `SQLite`-backed key-value store.
pub struct SqliteKvStore {
    pool: SqlitePool,
}

impl SqliteKvStore {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl KvStore for SqliteKvStore {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, AlcoveError>> + Send {
        let pool = self.pool.clone();
        let key = key.to_string();
        async move {
            let row: Option<(String,)> = sqlx::query_as(SELECT)
                .bind(&key)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|(value,)| value))
        }
    }

    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), AlcoveError>> + Send {
        let pool = self.pool.clone();
        let key = key.to_string();
        let value = value.to_string();
        async move {
            sqlx::query(UPSERT)
                .bind(&key)
                .bind(&value)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn remove(&self, key: &str) -> impl Future<Output = Result<(), AlcoveError>> + Send {
        let pool = self.pool.clone();
        let key = key.to_string();
        async move {
            sqlx::query(DELETE)
                .bind(&key)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn clear(&self) -> impl Future<Output = Result<(), AlcoveError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_ALL)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteKvStore {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteKvStore::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_return_none_for_missing_key() {
        let store = setup().await;
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_store_and_retrieve_value() {
        let store = setup().await;
        store.set("alcove_settings", r#"{"fontSize":"small"}"#).await.unwrap();

        let value = store.get("alcove_settings").await.unwrap();
        assert_eq!(value.as_deref(), Some(r#"{"fontSize":"small"}"#));
    }

    #[tokio::test]
    async fn should_overwrite_existing_value() {
        let store = setup().await;
        store.set("key", "first").await.unwrap();
        store.set("key", "second").await.unwrap();

        assert_eq!(store.get("key").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn should_remove_key_and_tolerate_absent_key() {
        let store = setup().await;
        store.set("key", "value").await.unwrap();
        store.remove("key").await.unwrap();
        assert!(store.get("key").await.unwrap().is_none());

        // Removing again is a no-op.
        store.remove("key").await.unwrap();
    }

    #[tokio::test]
    async fn should_clear_every_key() {
        let store = setup().await;
        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();
        store.clear().await.unwrap();

        assert!(store.get("a").await.unwrap().is_none());
        assert!(store.get("b").await.unwrap().is_none());
    }
}
