use serde::{Deserialize, Serialize};

/// One distribution-chart slice: how many analyses landed on this emotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionCount {
    pub name: String,
    pub value: u64,
}

/// One `(emotion, scaled probability)` pair inside a trend entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub emotion: String,
    /// Probability scaled to 0-100 for charting.
    pub value: f64,
}

/// One positional entry in the trend series ("Entry 1", "Entry 2", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEntry {
    pub name: String,
    pub points: Vec<TrendPoint>,
}
