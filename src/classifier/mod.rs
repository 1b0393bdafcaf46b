//! Classifier seam.
//!
//! The model is an explicit service object rather than a lazily-built global:
//! callers initialize it, can ask whether it is ready, and tests substitute a
//! fake through the trait object.

mod keyword;

pub use keyword::KeywordClassifier;

use crate::error::ClassificationError;
use crate::models::{EmotionResult, EmotionScore};

/// One unvalidated `(label, score)` pair straight from a model backend.
#[derive(Debug, Clone)]
pub struct RawScore {
    pub label: String,
    pub score: f64,
}

pub trait EmotionClassifier: Send + Sync {
    /// Load whatever the backend needs. Idempotent; callable more than once.
    fn initialize(&self) -> Result<(), ClassificationError>;

    fn is_ready(&self) -> bool;

    /// Score `text` against every label the model knows. The output is
    /// unordered and unvalidated; callers pass it through [`resolve_result`].
    fn classify(&self, text: &str) -> Result<Vec<RawScore>, ClassificationError>;

    /// Model identifier, recorded in the persisted metadata.
    fn model_name(&self) -> &str;

    /// Labels this model can emit.
    fn labels(&self) -> Vec<String>;
}

/// Validate raw backend output into a typed result.
///
/// Labels are lowercased, non-finite or negative scores rejected, duplicate
/// labels collapsed to their highest-scored occurrence, and the remainder
/// sorted descending by score; the top entry becomes prediction/confidence.
/// The scores themselves are passed through unrenormalized: a backend whose
/// probabilities do not sum to 1.0 is tolerated.
pub fn resolve_result(raw: Vec<RawScore>) -> Result<EmotionResult, ClassificationError> {
    if raw.is_empty() {
        return Err(ClassificationError::NoResults);
    }

    let mut probabilities = Vec::with_capacity(raw.len());
    for score in raw {
        if !score.score.is_finite() || score.score < 0.0 {
            return Err(ClassificationError::MalformedScore { label: score.label });
        }
        probabilities.push(EmotionScore {
            emotion: score.label.to_lowercase(),
            probability: score.score,
        });
    }

    probabilities.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut unique: Vec<EmotionScore> = Vec::with_capacity(probabilities.len());
    for score in probabilities {
        if !unique.iter().any(|existing| existing.emotion == score.emotion) {
            unique.push(score);
        }
    }

    let top = match unique.first() {
        Some(top) => top.clone(),
        None => return Err(ClassificationError::NoResults),
    };

    Ok(EmotionResult {
        prediction: top.emotion,
        confidence: top.probability,
        probabilities: unique,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(label: &str, score: f64) -> RawScore {
        RawScore {
            label: label.to_string(),
            score,
        }
    }

    #[test]
    fn test_resolve_sorts_descending_and_picks_top() {
        let result =
            resolve_result(vec![raw("sadness", 0.2), raw("joy", 0.7), raw("fear", 0.1)]).unwrap();

        assert_eq!(result.prediction, "joy");
        assert_eq!(result.confidence, 0.7);
        let order: Vec<&str> = result
            .probabilities
            .iter()
            .map(|p| p.emotion.as_str())
            .collect();
        assert_eq!(order, vec!["joy", "sadness", "fear"]);
    }

    #[test]
    fn test_resolve_lowercases_labels() {
        let result = resolve_result(vec![raw("Joy", 0.9)]).unwrap();
        assert_eq!(result.prediction, "joy");
    }

    #[test]
    fn test_resolve_collapses_duplicate_labels() {
        let result = resolve_result(vec![raw("joy", 0.4), raw("JOY", 0.6)]).unwrap();
        assert_eq!(result.probabilities.len(), 1);
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn test_resolve_empty_is_no_results() {
        let err = resolve_result(Vec::new()).unwrap_err();
        assert!(matches!(err, ClassificationError::NoResults));
    }

    #[test]
    fn test_resolve_rejects_non_finite_scores() {
        let err = resolve_result(vec![raw("joy", f64::NAN)]).unwrap_err();
        assert!(matches!(
            err,
            ClassificationError::MalformedScore { label } if label == "joy"
        ));
    }

    #[test]
    fn test_resolve_rejects_negative_scores() {
        let err = resolve_result(vec![raw("anger", -0.2)]).unwrap_err();
        assert!(matches!(err, ClassificationError::MalformedScore { .. }));
    }

    #[test]
    fn test_resolve_does_not_renormalize() {
        // Sum is 1.5; the values must come through untouched.
        let result = resolve_result(vec![raw("joy", 0.9), raw("anger", 0.6)]).unwrap();
        assert_eq!(result.probabilities[0].probability, 0.9);
        assert_eq!(result.probabilities[1].probability, 0.6);
    }
}
