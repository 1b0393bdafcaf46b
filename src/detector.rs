//! Detection controller: one user-initiated analysis at a time.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use log::info;
use tokio::sync::Mutex;

use crate::classifier::{resolve_result, EmotionClassifier};
use crate::db::{Database, ModelSlot};
use crate::models::{AnalysisRecord, ModelMetadata};

#[derive(Clone)]
pub struct DetectionController {
    classifier: Arc<dyn EmotionClassifier>,
    db: Database,
    busy: Arc<Mutex<bool>>,
}

impl DetectionController {
    pub fn new(classifier: Arc<dyn EmotionClassifier>, db: Database) -> Self {
        Self {
            classifier,
            db,
            busy: Arc::new(Mutex::new(false)),
        }
    }

    /// Ready the classifier and record its metadata under the base model key.
    pub async fn initialize(&self) -> Result<()> {
        self.classifier
            .initialize()
            .context("failed to load classifier")?;

        let metadata = ModelMetadata {
            name: self.classifier.model_name().to_string(),
            dataset: "built-in".to_string(),
            examples: 0,
            labels: self.classifier.labels(),
            created: Utc::now(),
        };
        self.db
            .save_model_metadata(ModelSlot::Base, &metadata)
            .await?;

        info!("Classifier {} ready", self.classifier.model_name());
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.classifier.is_ready()
    }

    /// Run one detection over `text` and append the outcome to history.
    ///
    /// At most one detection may be outstanding: re-entrant calls are rejected
    /// rather than queued. There is no timeout on the classifier call; a hung
    /// backend keeps the busy flag set. On classification failure nothing is
    /// written to history, so the caller's pending text stays re-submittable.
    pub async fn detect(&self, text: &str) -> Result<AnalysisRecord> {
        if text.trim().is_empty() {
            return Err(anyhow!("nothing to analyze: text is empty"));
        }

        {
            let mut busy = self.busy.lock().await;
            if *busy {
                return Err(anyhow!("detection already in progress"));
            }
            *busy = true;
        }

        let outcome = self.run_detection(text).await;

        *self.busy.lock().await = false;

        outcome
    }

    async fn run_detection(&self, text: &str) -> Result<AnalysisRecord> {
        let classifier = Arc::clone(&self.classifier);
        let input = text.to_string();

        let raw = tokio::task::spawn_blocking(move || classifier.classify(&input))
            .await
            .context("classifier task panicked")??;

        let result = resolve_result(raw)?;
        let record = self.db.append_history(text.to_string(), result).await?;

        info!(
            "Analyzed {} chars: {} ({:.1}%)",
            record.text.len(),
            record.result.prediction,
            record.result.confidence_percent()
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::RawScore;
    use crate::error::ClassificationError;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    fn memory_db() -> Database {
        Database::new(PathBuf::from(":memory:")).expect("in-memory database")
    }

    /// Fixed-output classifier for deterministic controller tests.
    struct FakeClassifier {
        ready: AtomicBool,
        scores: Vec<(&'static str, f64)>,
        delay: Option<Duration>,
    }

    impl FakeClassifier {
        fn with_scores(scores: Vec<(&'static str, f64)>) -> Self {
            Self {
                ready: AtomicBool::new(false),
                scores,
                delay: None,
            }
        }

        fn slow(scores: Vec<(&'static str, f64)>, delay: Duration) -> Self {
            Self {
                ready: AtomicBool::new(false),
                scores,
                delay: Some(delay),
            }
        }
    }

    impl EmotionClassifier for FakeClassifier {
        fn initialize(&self) -> Result<(), ClassificationError> {
            self.ready.store(true, Ordering::SeqCst);
            Ok(())
        }

        fn is_ready(&self) -> bool {
            self.ready.load(Ordering::SeqCst)
        }

        fn classify(&self, _text: &str) -> Result<Vec<RawScore>, ClassificationError> {
            if !self.is_ready() {
                return Err(ClassificationError::NotReady);
            }
            if let Some(delay) = self.delay {
                std::thread::sleep(delay);
            }
            Ok(self
                .scores
                .iter()
                .map(|(label, score)| RawScore {
                    label: label.to_string(),
                    score: *score,
                })
                .collect())
        }

        fn model_name(&self) -> &str {
            "fake-classifier"
        }

        fn labels(&self) -> Vec<String> {
            self.scores.iter().map(|(label, _)| label.to_string()).collect()
        }
    }

    struct FailingClassifier;

    impl EmotionClassifier for FailingClassifier {
        fn initialize(&self) -> Result<(), ClassificationError> {
            Ok(())
        }

        fn is_ready(&self) -> bool {
            true
        }

        fn classify(&self, _text: &str) -> Result<Vec<RawScore>, ClassificationError> {
            Err(ClassificationError::Backend("model exploded".to_string()))
        }

        fn model_name(&self) -> &str {
            "failing-classifier"
        }

        fn labels(&self) -> Vec<String> {
            Vec::new()
        }
    }

    #[tokio::test]
    async fn test_detect_appends_record_to_history() {
        let db = memory_db();
        let controller = DetectionController::new(
            Arc::new(FakeClassifier::with_scores(vec![
                ("sadness", 0.2),
                ("joy", 0.8),
            ])),
            db.clone(),
        );
        controller.initialize().await.unwrap();

        let record = controller.detect("what a lovely morning").await.unwrap();
        assert_eq!(record.result.prediction, "joy");
        assert_eq!(record.result.confidence, 0.8);

        let history = db.load_history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].text, "what a lovely morning");
    }

    #[tokio::test]
    async fn test_initialize_records_base_model_metadata() {
        let db = memory_db();
        let controller = DetectionController::new(
            Arc::new(FakeClassifier::with_scores(vec![("joy", 1.0)])),
            db.clone(),
        );
        controller.initialize().await.unwrap();

        let metadata = db
            .load_model_metadata(ModelSlot::Base)
            .await
            .unwrap()
            .expect("base model metadata should be recorded");
        assert_eq!(metadata.name, "fake-classifier");
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected_without_touching_history() {
        let db = memory_db();
        let controller = DetectionController::new(
            Arc::new(FakeClassifier::with_scores(vec![("joy", 1.0)])),
            db.clone(),
        );
        controller.initialize().await.unwrap();

        assert!(controller.detect("   \n\t ").await.is_err());
        assert!(db.load_history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_classifier_failure_leaves_history_untouched() {
        let db = memory_db();
        let controller = DetectionController::new(Arc::new(FailingClassifier), db.clone());
        controller.initialize().await.unwrap();

        assert!(controller.detect("does not matter").await.is_err());
        assert!(db.load_history().await.unwrap().is_empty());

        // The controller stays usable for a retry with a new classifier run.
        assert!(controller.detect("try again").await.is_err());
    }

    #[tokio::test]
    async fn test_reentrant_detection_is_rejected() {
        let db = memory_db();
        let controller = DetectionController::new(
            Arc::new(FakeClassifier::slow(
                vec![("joy", 1.0)],
                Duration::from_millis(500),
            )),
            db,
        );
        controller.initialize().await.unwrap();

        let background = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.detect("slow one").await })
        };

        // Give the first detection time to take the busy flag.
        tokio::time::sleep(Duration::from_millis(100)).await;

        let err = controller.detect("second one").await.unwrap_err();
        assert!(err.to_string().contains("already in progress"));

        let first = background.await.unwrap();
        assert!(first.is_ok());
    }

    #[tokio::test]
    async fn test_busy_flag_clears_after_completion() {
        let db = memory_db();
        let controller = DetectionController::new(
            Arc::new(FakeClassifier::with_scores(vec![("joy", 1.0)])),
            db,
        );
        controller.initialize().await.unwrap();

        controller.detect("first").await.unwrap();
        controller.detect("second").await.unwrap();
    }
}
