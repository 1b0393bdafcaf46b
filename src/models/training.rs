//! Training run models.
//!
//! Training here is simulated: the metrics follow fixed curves with a little
//! jitter. The metadata shape is what gets persisted under the custom model
//! key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Simulated metrics for one epoch, rounded to 4 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    pub epoch: u32,
    pub loss: f64,
    pub accuracy: f64,
}

/// Per-epoch progress handed to the caller while a run is in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingProgress {
    pub percent: f64,
    pub stats: EpochStats,
}

/// Persisted description of a trained model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetadata {
    pub name: String,
    /// Name of the dataset the model was trained on.
    pub dataset: String,
    /// Number of examples in that dataset.
    pub examples: usize,
    pub labels: Vec<String>,
    pub created: DateTime<Utc>,
}

/// Outcome of a completed training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingReport {
    pub run_id: String,
    pub stats: Vec<EpochStats>,
    pub metadata: ModelMetadata,
}
