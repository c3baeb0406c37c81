//! In-memory implementation of [`KvStore`] — the session-lifetime scope.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use alcove_app::ports::KvStore;
use alcove_domain::error::AlcoveError;

/// Process-lifetime key-value store. Contents vanish on shutdown, which is
/// exactly what the session scope wants.
#[derive(Debug, Default)]
pub struct InMemoryKvStore {
    map: Mutex<HashMap<String, String>>,
}

impl InMemoryKvStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.map.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KvStore for InMemoryKvStore {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, AlcoveError>> + Send {
        let value = self.lock().get(key).cloned();
        async move { Ok(value) }
    }

    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), AlcoveError>> + Send {
        self.lock().insert(key.to_string(), value.to_string());
        async { Ok(()) }
    }

    fn remove(&self, key: &str) -> impl Future<Output = Result<(), AlcoveError>> + Send {
        self.lock().remove(key);
        async { Ok(()) }
    }

    fn clear(&self) -> impl Future<Output = Result<(), AlcoveError>> + Send {
        self.lock().clear();
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_store_and_forget_values() {
        let store = InMemoryKvStore::default();
        store.set("alcove_user", "{}").await.unwrap();
        assert_eq!(store.get("alcove_user").await.unwrap().as_deref(), Some("{}"));

        store.remove("alcove_user").await.unwrap();
        assert!(store.get("alcove_user").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_clear_all_keys() {
        let store = InMemoryKvStore::default();
        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();
        store.clear().await.unwrap();
        assert!(store.get("a").await.unwrap().is_none());
        assert!(store.get("b").await.unwrap().is_none());
    }
}
