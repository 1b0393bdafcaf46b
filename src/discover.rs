//! Curated discovery catalog: famous quotes, movie lines, and song lyrics,
//! each tagged with the emotion it carries and a score for that emotion.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QuoteCategory {
    Quotes,
    Movies,
    Songs,
}

/// One curated item. `attribution` is the author, film, or artist.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedQuote {
    pub text: &'static str,
    pub attribution: &'static str,
    pub emotion: &'static str,
    pub emotion_score: f64,
}

const QUOTES: &[CuratedQuote] = &[
    CuratedQuote {
        text: "The purpose of our lives is to be happy.",
        attribution: "Dalai Lama",
        emotion: "joy",
        emotion_score: 0.85,
    },
    CuratedQuote {
        text: "Not how long, but how well you have lived is the main thing.",
        attribution: "Seneca",
        emotion: "neutral",
        emotion_score: 0.72,
    },
    CuratedQuote {
        text: "Life is what happens when you're busy making other plans.",
        attribution: "John Lennon",
        emotion: "surprise",
        emotion_score: 0.68,
    },
    CuratedQuote {
        text: "I fear not the man who has practiced 10,000 kicks once, but I fear the man who has practiced one kick 10,000 times.",
        attribution: "Bruce Lee",
        emotion: "fear",
        emotion_score: 0.64,
    },
    CuratedQuote {
        text: "The greatest glory in living lies not in never falling, but in rising every time we fall.",
        attribution: "Nelson Mandela",
        emotion: "joy",
        emotion_score: 0.78,
    },
    CuratedQuote {
        text: "The way to get started is to quit talking and begin doing.",
        attribution: "Walt Disney",
        emotion: "neutral",
        emotion_score: 0.62,
    },
    CuratedQuote {
        text: "Your time is limited, so don't waste it living someone else's life.",
        attribution: "Steve Jobs",
        emotion: "sadness",
        emotion_score: 0.59,
    },
    CuratedQuote {
        text: "The future belongs to those who believe in the beauty of their dreams.",
        attribution: "Eleanor Roosevelt",
        emotion: "joy",
        emotion_score: 0.88,
    },
    CuratedQuote {
        text: "It is during our darkest moments that we must focus to see the light.",
        attribution: "Aristotle",
        emotion: "sadness",
        emotion_score: 0.75,
    },
    CuratedQuote {
        text: "I have not failed. I've just found 10,000 ways that won't work.",
        attribution: "Thomas Edison",
        emotion: "surprise",
        emotion_score: 0.73,
    },
    CuratedQuote {
        text: "The only way to do great work is to love what you do.",
        attribution: "Steve Jobs",
        emotion: "joy",
        emotion_score: 0.91,
    },
    CuratedQuote {
        text: "In the end, it's not the years in your life that count. It's the life in your years.",
        attribution: "Abraham Lincoln",
        emotion: "neutral",
        emotion_score: 0.67,
    },
];

const MOVIE_QUOTES: &[CuratedQuote] = &[
    CuratedQuote {
        text: "May the Force be with you.",
        attribution: "Star Wars",
        emotion: "neutral",
        emotion_score: 0.65,
    },
    CuratedQuote {
        text: "There's no place like home.",
        attribution: "The Wizard of Oz",
        emotion: "joy",
        emotion_score: 0.78,
    },
    CuratedQuote {
        text: "I'm going to make him an offer he can't refuse.",
        attribution: "The Godfather",
        emotion: "anger",
        emotion_score: 0.82,
    },
    CuratedQuote {
        text: "You're gonna need a bigger boat.",
        attribution: "Jaws",
        emotion: "fear",
        emotion_score: 0.88,
    },
    CuratedQuote {
        text: "Life is like a box of chocolates, you never know what you're gonna get.",
        attribution: "Forrest Gump",
        emotion: "surprise",
        emotion_score: 0.72,
    },
    CuratedQuote {
        text: "I feel the need... the need for speed!",
        attribution: "Top Gun",
        emotion: "joy",
        emotion_score: 0.85,
    },
    CuratedQuote {
        text: "Houston, we have a problem.",
        attribution: "Apollo 13",
        emotion: "fear",
        emotion_score: 0.79,
    },
    CuratedQuote {
        text: "I'll be back.",
        attribution: "The Terminator",
        emotion: "neutral",
        emotion_score: 0.62,
    },
];

const SONG_LYRICS: &[CuratedQuote] = &[
    CuratedQuote {
        text: "Don't stop believin', hold on to that feelin'",
        attribution: "Journey",
        emotion: "joy",
        emotion_score: 0.86,
    },
    CuratedQuote {
        text: "Hello, it's me. I was wondering if after all these years you'd like to meet.",
        attribution: "Adele",
        emotion: "sadness",
        emotion_score: 0.82,
    },
    CuratedQuote {
        text: "I will always love you.",
        attribution: "Whitney Houston",
        emotion: "joy",
        emotion_score: 0.91,
    },
    CuratedQuote {
        text: "Wake me up when September ends.",
        attribution: "Green Day",
        emotion: "sadness",
        emotion_score: 0.84,
    },
    CuratedQuote {
        text: "I can't get no satisfaction.",
        attribution: "The Rolling Stones",
        emotion: "anger",
        emotion_score: 0.77,
    },
    CuratedQuote {
        text: "Every little thing is gonna be alright.",
        attribution: "Bob Marley",
        emotion: "joy",
        emotion_score: 0.89,
    },
];

pub fn catalog(category: QuoteCategory) -> &'static [CuratedQuote] {
    match category {
        QuoteCategory::Quotes => QUOTES,
        QuoteCategory::Movies => MOVIE_QUOTES,
        QuoteCategory::Songs => SONG_LYRICS,
    }
}

/// How many items each category shows per shuffle.
fn display_count(category: QuoteCategory) -> usize {
    match category {
        QuoteCategory::Quotes => 4,
        QuoteCategory::Movies => 3,
        QuoteCategory::Songs => 3,
    }
}

/// Items in `category`, optionally narrowed to one emotion.
pub fn filtered(category: QuoteCategory, emotion: Option<&str>) -> Vec<&'static CuratedQuote> {
    catalog(category)
        .iter()
        .filter(|quote| emotion.map_or(true, |wanted| quote.emotion == wanted))
        .collect()
}

/// A fresh shuffled selection, sized to what the screen shows per category.
pub fn shuffled_selection<R: Rng + ?Sized>(
    category: QuoteCategory,
    emotion: Option<&str>,
    rng: &mut R,
) -> Vec<&'static CuratedQuote> {
    let mut items = filtered(category, emotion);
    items.shuffle(rng);
    items.truncate(display_count(category));
    items
}
