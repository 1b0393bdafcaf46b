//! Chart-ready aggregation over the history log.
//!
//! Pure functions over `&[AnalysisRecord]`: recomputed on every call,
//! reflecting exactly the records passed in. Nothing here caches or persists.

mod types;

pub use types::{EmotionCount, TrendEntry, TrendPoint};

use crate::models::AnalysisRecord;

pub const DEFAULT_TREND_WINDOW: usize = 7;

/// Count predictions across the log. Each record contributes exactly one
/// count, to its top-ranked emotion. Output order is first occurrence, which
/// keeps it stable for a given input.
pub fn counts_by_emotion(history: &[AnalysisRecord]) -> Vec<EmotionCount> {
    let mut counts: Vec<EmotionCount> = Vec::new();

    for record in history {
        let emotion = record.result.prediction.as_str();
        match counts.iter_mut().find(|count| count.name == emotion) {
            Some(count) => count.value += 1,
            None => counts.push(EmotionCount {
                name: emotion.to_string(),
                value: 1,
            }),
        }
    }

    counts
}

/// Project the most recent `window` records into positional chart entries, in
/// chronological order.
///
/// Each entry carries only the emotions present in that record's own
/// probabilities: an emotion the record never scored is absent from the entry,
/// not zeroed. Stacked-chart consumers must treat missing keys as zero.
pub fn trend_series(history: &[AnalysisRecord], window: usize) -> Vec<TrendEntry> {
    let start = history.len().saturating_sub(window);

    history[start..]
        .iter()
        .enumerate()
        .map(|(index, record)| TrendEntry {
            name: format!("Entry {}", index + 1),
            points: record
                .result
                .probabilities
                .iter()
                .map(|score| TrendPoint {
                    emotion: score.emotion.clone(),
                    value: score.probability * 100.0,
                })
                .collect(),
        })
        .collect()
}
