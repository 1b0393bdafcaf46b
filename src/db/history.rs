//! History log persistence.
//!
//! The log lives as a single JSON array under the `emotionHistory` key,
//! capped to the most recent 20 records (oldest evicted first). Records are
//! immutable once appended and are only ever removed in bulk by `clear`.

use anyhow::Context;
use chrono::Utc;
use log::{debug, warn};
use rusqlite::Connection;

use super::{into_storage_error, kv_delete, kv_get, kv_set, Database};
use crate::error::StorageError;
use crate::models::{AnalysisRecord, EmotionResult};

pub const HISTORY_KEY: &str = "emotionHistory";
pub const MAX_HISTORY_ENTRIES: usize = 20;

/// Read the stored log, substituting an empty one for anything unreadable.
/// A corrupt payload must never crash a caller or block further appends.
fn read_history(conn: &Connection) -> Vec<AnalysisRecord> {
    let raw = match kv_get(conn, HISTORY_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("Failed to read history key, treating as empty: {err}");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(err) => {
            warn!("Stored history is unreadable, treating as empty: {err}");
            Vec::new()
        }
    }
}

impl Database {
    /// Append one analysis to the log and persist the bounded result.
    ///
    /// Ids are creation-time millis, bumped past the previous record's id when
    /// two analyses land in the same millisecond, so they stay strictly
    /// increasing. The write is all-or-nothing: on failure the stored log is
    /// whatever it was before.
    pub async fn append_history(
        &self,
        text: String,
        result: EmotionResult,
    ) -> Result<AnalysisRecord, StorageError> {
        self.execute(move |conn| {
            let mut history = read_history(conn);

            let now = Utc::now();
            let mut id = now.timestamp_millis();
            if let Some(last) = history.last() {
                if id <= last.id {
                    id = last.id + 1;
                }
            }

            let record = AnalysisRecord {
                id,
                text,
                result,
                timestamp: now,
            };
            history.push(record.clone());

            // FIFO eviction: keep only the newest MAX_HISTORY_ENTRIES.
            let start = history.len().saturating_sub(MAX_HISTORY_ENTRIES);
            let payload = serde_json::to_string(&history[start..])?;
            kv_set(conn, HISTORY_KEY, &payload).context("failed to write history")?;

            debug!(
                "Appended analysis record {} ({} entries stored)",
                record.id,
                history.len() - start
            );
            Ok(record)
        })
        .await
        .map_err(into_storage_error)
    }

    /// Load the full log in chronological order. Nothing persisted yet, or a
    /// corrupt payload, both come back as an empty vec.
    pub async fn load_history(&self) -> Result<Vec<AnalysisRecord>, StorageError> {
        self.execute(|conn| Ok(read_history(conn)))
            .await
            .map_err(into_storage_error)
    }

    /// Erase all records. Clearing an already-empty log succeeds silently.
    pub async fn clear_history(&self) -> Result<(), StorageError> {
        self.execute(|conn| {
            kv_delete(conn, HISTORY_KEY).context("failed to clear history")?;
            Ok(())
        })
        .await
        .map_err(into_storage_error)
    }
}
