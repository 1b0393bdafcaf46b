//! Keyword-lexicon emotion classifier.
//!
//! Stands in for a hosted transformer pipeline: per-emotion word lists,
//! tokenize, count hits, turn the counts into a probability distribution with
//! a neutral floor. Deterministic, so tests can assert exact predictions.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::Lazy;

use super::{EmotionClassifier, RawScore};
use crate::error::ClassificationError;

static JOY_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "happy", "happiness", "joy", "joyful", "delighted", "delightful", "glad", "cheerful",
        "thrilled", "excited", "wonderful", "great", "love", "loved", "loving", "amazing",
        "fantastic", "excellent", "smile", "smiling", "grateful", "proud",
    ]
    .into_iter()
    .collect()
});

static SADNESS_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "sad", "sadness", "unhappy", "miserable", "depressed", "depressing", "gloomy", "lonely",
        "heartbroken", "grief", "grieving", "crying", "cried", "tears", "hopeless", "down",
        "sorrow", "loss", "missing",
    ]
    .into_iter()
    .collect()
});

static ANGER_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "angry", "anger", "furious", "fury", "mad", "rage", "enraged", "irritated", "annoyed",
        "annoying", "outraged", "hate", "hated", "hateful", "hostile", "resent", "frustrated",
        "frustrating",
    ]
    .into_iter()
    .collect()
});

static FEAR_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "afraid", "fear", "fearful", "scared", "scary", "terrified", "terrifying", "panic",
        "panicked", "anxious", "anxiety", "worried", "worry", "nervous", "dread", "horror",
        "frightened",
    ]
    .into_iter()
    .collect()
});

static SURPRISE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "surprised", "surprise", "surprising", "astonished", "astonishing", "amazed", "stunned",
        "shocked", "shocking", "unexpected", "unbelievable", "wow", "sudden", "suddenly",
    ]
    .into_iter()
    .collect()
});

static DISGUST_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "disgust", "disgusted", "disgusting", "gross", "revolting", "repulsive", "nasty", "vile",
        "sickening", "awful", "foul", "horrible", "yuck",
    ]
    .into_iter()
    .collect()
});

const MODEL_NAME: &str = "keyword-lexicon-v1";

/// Weight of the neutral floor relative to one keyword hit. Keeps texts with
/// no emotional vocabulary from dividing by zero and lets them land on
/// "neutral".
const NEUTRAL_WEIGHT: f64 = 1.0;

fn lexicons() -> [(&'static str, &'static HashSet<&'static str>); 6] {
    [
        ("joy", &*JOY_WORDS),
        ("sadness", &*SADNESS_WORDS),
        ("anger", &*ANGER_WORDS),
        ("fear", &*FEAR_WORDS),
        ("surprise", &*SURPRISE_WORDS),
        ("disgust", &*DISGUST_WORDS),
    ]
}

pub struct KeywordClassifier {
    ready: AtomicBool,
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionClassifier for KeywordClassifier {
    fn initialize(&self) -> Result<(), ClassificationError> {
        // Pay the lexicon construction cost up front.
        for (_, lexicon) in lexicons() {
            let _ = lexicon.len();
        }
        self.ready.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    fn classify(&self, text: &str) -> Result<Vec<RawScore>, ClassificationError> {
        if !self.is_ready() {
            return Err(ClassificationError::NotReady);
        }

        let lowercase = text.to_lowercase();
        let words: Vec<&str> = lowercase
            .split(|c: char| !c.is_alphabetic())
            .filter(|word| word.len() > 1)
            .collect();

        let mut weights: Vec<(&'static str, f64)> = lexicons()
            .iter()
            .map(|(emotion, lexicon)| {
                let hits = words.iter().filter(|word| lexicon.contains(*word)).count();
                (*emotion, hits as f64)
            })
            .collect();
        weights.push(("neutral", NEUTRAL_WEIGHT));

        let total: f64 = weights.iter().map(|(_, weight)| weight).sum();

        Ok(weights
            .into_iter()
            .map(|(emotion, weight)| RawScore {
                label: emotion.to_string(),
                score: weight / total,
            })
            .collect())
    }

    fn model_name(&self) -> &str {
        MODEL_NAME
    }

    fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = lexicons()
            .iter()
            .map(|(emotion, _)| emotion.to_string())
            .collect();
        labels.push("neutral".to_string());
        labels
    }
}
