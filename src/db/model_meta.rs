//! Model metadata persistence.
//!
//! Two fixed slots: the built-in model under `emotionModel`, the most recent
//! user-trained model under `customEmotionModel`. Each holds one JSON object.

use anyhow::Context;
use log::warn;

use super::{into_storage_error, kv_delete, kv_get, kv_set, Database};
use crate::error::StorageError;
use crate::models::ModelMetadata;

const BASE_MODEL_KEY: &str = "emotionModel";
const CUSTOM_MODEL_KEY: &str = "customEmotionModel";

/// Which persisted model slot to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSlot {
    /// The built-in classifier shipped with the app.
    Base,
    /// The most recent user-trained model.
    Custom,
}

impl ModelSlot {
    pub fn key(&self) -> &'static str {
        match self {
            ModelSlot::Base => BASE_MODEL_KEY,
            ModelSlot::Custom => CUSTOM_MODEL_KEY,
        }
    }
}

impl Database {
    pub async fn save_model_metadata(
        &self,
        slot: ModelSlot,
        metadata: &ModelMetadata,
    ) -> Result<(), StorageError> {
        let payload = serde_json::to_string(metadata)?;
        self.execute(move |conn| {
            kv_set(conn, slot.key(), &payload)
                .with_context(|| format!("failed to write model metadata to {}", slot.key()))?;
            Ok(())
        })
        .await
        .map_err(into_storage_error)
    }

    /// Load the metadata stored in `slot`. Missing or unreadable payloads both
    /// come back as `None`.
    pub async fn load_model_metadata(
        &self,
        slot: ModelSlot,
    ) -> Result<Option<ModelMetadata>, StorageError> {
        self.execute(move |conn| {
            let raw = match kv_get(conn, slot.key())? {
                Some(raw) => raw,
                None => return Ok(None),
            };

            match serde_json::from_str(&raw) {
                Ok(metadata) => Ok(Some(metadata)),
                Err(err) => {
                    warn!(
                        "Stored model metadata under {} is unreadable: {err}",
                        slot.key()
                    );
                    Ok(None)
                }
            }
        })
        .await
        .map_err(into_storage_error)
    }

    pub async fn clear_model_metadata(&self, slot: ModelSlot) -> Result<(), StorageError> {
        self.execute(move |conn| {
            kv_delete(conn, slot.key())
                .with_context(|| format!("failed to clear model metadata at {}", slot.key()))?;
            Ok(())
        })
        .await
        .map_err(into_storage_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::path::PathBuf;

    fn memory_db() -> Database {
        Database::new(PathBuf::from(":memory:")).expect("in-memory database")
    }

    fn sample_metadata() -> ModelMetadata {
        ModelMetadata {
            name: "custom-emotion-model-1700000000000".to_string(),
            dataset: "feelings.csv".to_string(),
            examples: 128,
            labels: vec!["joy".to_string(), "sadness".to_string()],
            created: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_metadata_roundtrip() {
        let db = memory_db();
        let metadata = sample_metadata();

        db.save_model_metadata(ModelSlot::Custom, &metadata)
            .await
            .unwrap();

        let loaded = db
            .load_model_metadata(ModelSlot::Custom)
            .await
            .unwrap()
            .expect("metadata should be present");
        assert_eq!(loaded.name, metadata.name);
        assert_eq!(loaded.examples, 128);
        assert_eq!(loaded.labels, metadata.labels);
    }

    #[tokio::test]
    async fn test_slots_are_independent() {
        let db = memory_db();

        db.save_model_metadata(ModelSlot::Custom, &sample_metadata())
            .await
            .unwrap();

        assert!(db
            .load_model_metadata(ModelSlot::Base)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_corrupt_metadata_loads_as_none() {
        let db = memory_db();

        db.execute(|conn| {
            kv_set(conn, CUSTOM_MODEL_KEY, "][")?;
            Ok(())
        })
        .await
        .unwrap();

        assert!(db
            .load_model_metadata(ModelSlot::Custom)
            .await
            .unwrap()
            .is_none());
    }
}
