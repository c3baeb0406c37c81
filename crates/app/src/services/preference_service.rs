//! Preference service — load/save the persisted settings blob.

use alcove_domain::error::AlcoveError;
use alcove_domain::preferences::PreferenceRecord;

use crate::ports::KvStore;

/// Fixed key the preference record is persisted under.
pub const PREFERENCES_KEY: &str = "alcove_settings";

/// Application service for the preference record.
pub struct PreferenceService<K> {
    store: K,
}

impl<K: KvStore> PreferenceService<K> {
    /// Create a new service backed by the given persistent scope.
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// Load the record, merging persisted data over hard-coded defaults.
    ///
    /// Malformed persisted JSON is discarded silently and replaced by the
    /// defaults; missing fields in a partial record take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backing store itself fails. A
    /// corrupt value is *not* an error.
    pub async fn load(&self) -> Result<PreferenceRecord, AlcoveError> {
        let Some(raw) = self.store.get(PREFERENCES_KEY).await? else {
            return Ok(PreferenceRecord::default());
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Ok(record),
            Err(err) => {
                tracing::debug!(error = %err, "discarding corrupt preference blob");
                Ok(PreferenceRecord::default())
            }
        }
    }

    /// Full-record overwrite, performed after every field change.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the write fails.
    pub async fn save(&self, record: &PreferenceRecord) -> Result<(), AlcoveError> {
        let raw = serde_json::to_string(record)
            .map_err(|err| AlcoveError::Storage(Box::new(err)))?;
        self.store.set(PREFERENCES_KEY, &raw).await
    }

    /// Load, mutate, save. Returns the saved record.
    ///
    /// # Errors
    ///
    /// Returns a storage error from either the read or the write.
    pub async fn update<F>(&self, mutate: F) -> Result<PreferenceRecord, AlcoveError>
    where
        F: FnOnce(&mut PreferenceRecord),
    {
        let mut record = self.load().await?;
        mutate(&mut record);
        self.save(&record).await?;
        Ok(record)
    }

    /// Restore defaults, selecting `default_theme` and carrying over the
    /// notification-permission flag (it mirrors a permission the portal
    /// cannot grant itself).
    ///
    /// # Errors
    ///
    /// Returns a storage error from either the read or the write.
    pub async fn reset(&self, default_theme: &str) -> Result<PreferenceRecord, AlcoveError> {
        let current = self.load().await?;
        let record = PreferenceRecord {
            notifications_enabled: current.notifications_enabled,
            selected_theme: default_theme.to_string(),
            ..PreferenceRecord::default()
        };
        self.save(&record).await?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alcove_domain::preferences::FontSize;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryStore {
        map: Mutex<HashMap<String, String>>,
    }

    impl KvStore for InMemoryStore {
        async fn get(&self, key: &str) -> Result<Option<String>, AlcoveError> {
            Ok(self.map.lock().unwrap().get(key).cloned())
        }
        async fn set(&self, key: &str, value: &str) -> Result<(), AlcoveError> {
            self.map
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
        async fn remove(&self, key: &str) -> Result<(), AlcoveError> {
            self.map.lock().unwrap().remove(key);
            Ok(())
        }
        async fn clear(&self) -> Result<(), AlcoveError> {
            self.map.lock().unwrap().clear();
            Ok(())
        }
    }

    #[tokio::test]
    async fn should_return_exact_defaults_when_nothing_persisted() {
        let service = PreferenceService::new(InMemoryStore::default());
        let record = service.load().await.unwrap();
        assert_eq!(record, PreferenceRecord::default());
    }

    #[tokio::test]
    async fn should_return_exact_defaults_when_blob_is_corrupt() {
        let store = InMemoryStore::default();
        store.set(PREFERENCES_KEY, "{not json!").await.unwrap();
        let service = PreferenceService::new(store);
        let record = service.load().await.unwrap();
        assert_eq!(record, PreferenceRecord::default());
    }

    #[tokio::test]
    async fn should_merge_partial_blob_over_defaults() {
        let store = InMemoryStore::default();
        store
            .set(PREFERENCES_KEY, r#"{"fontSize":"small"}"#)
            .await
            .unwrap();
        let service = PreferenceService::new(store);
        let record = service.load().await.unwrap();
        assert_eq!(record.font_size, FontSize::Small);
        assert!(record.general_notifications);
    }

    #[tokio::test]
    async fn should_roundtrip_through_save_and_load() {
        let service = PreferenceService::new(InMemoryStore::default());
        let record = service
            .update(|r| {
                r.reduced_motion = true;
                r.selected_theme = "midnight".to_string();
            })
            .await
            .unwrap();
        assert_eq!(service.load().await.unwrap(), record);
    }

    #[tokio::test]
    async fn should_reset_to_defaults_but_keep_notification_permission() {
        let service = PreferenceService::new(InMemoryStore::default());
        service
            .update(|r| {
                r.reduced_motion = true;
                r.notifications_enabled = true;
                r.selected_theme = "midnight".to_string();
            })
            .await
            .unwrap();

        let record = service.reset("classic").await.unwrap();
        assert!(!record.reduced_motion);
        assert!(record.notifications_enabled);
        assert_eq!(record.selected_theme, "classic");
    }
}
