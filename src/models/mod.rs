mod dataset;
mod record;
mod training;

pub use dataset::{DatasetExample, ParsedDataset};
pub use record::{AnalysisRecord, EmotionResult, EmotionScore};
pub use training::{EpochStats, ModelMetadata, TrainingProgress, TrainingReport};
