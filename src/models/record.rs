//! Analysis result and history record models.
//!
//! The serialized shapes here are the persisted shapes: `AnalysisRecord`
//! lists stored under the history key are arrays of these objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One `(emotion, probability)` pair from a classification result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub emotion: String,
    pub probability: f64,
}

/// A validated classification result.
///
/// `probabilities` is sorted descending by probability with unique emotion
/// labels; `prediction`/`confidence` mirror its first entry. The probabilities
/// are reported as the classifier produced them; their sum is expected to be
/// close to 1.0 but is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    pub prediction: String,
    pub confidence: f64,
    pub probabilities: Vec<EmotionScore>,
}

impl EmotionResult {
    /// Confidence as a display percentage.
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }
}

/// One completed analysis, as appended to the history log.
///
/// Immutable once created. `id` is strictly increasing across the process
/// lifetime (timestamp millis, bumped past the previous id when two analyses
/// land in the same millisecond).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: i64,
    pub text: String,
    pub result: EmotionResult,
    pub timestamp: DateTime<Utc>,
}
