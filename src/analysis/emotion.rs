//! Keyword-based emotion detection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::tokenize;

/// Closed emotion set. Declaration order is the fixed tie-break priority:
/// joy > gratitude > anger > disappointment > frustration > neutral.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Joy,
    Gratitude,
    Anger,
    Disappointment,
    Frustration,
    Neutral,
}

impl Emotion {
    /// Scored categories in priority order (`Neutral` is the no-match
    /// fallback, not a keyword category).
    pub const CATEGORIES: [Emotion; 5] = [
        Emotion::Joy,
        Emotion::Gratitude,
        Emotion::Anger,
        Emotion::Disappointment,
        Emotion::Frustration,
    ];

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Joy => &[
                "happy",
                "great",
                "excellent",
                "amazing",
                "wonderful",
                "love",
                "loved",
                "best",
                "delicious",
                "fantastic",
                "awesome",
            ],
            Self::Gratitude => &["thank", "thanks", "appreciate", "grateful"],
            Self::Anger => &[
                "angry",
                "terrible",
                "worst",
                "horrible",
                "hate",
                "awful",
                "disgusting",
                "unacceptable",
            ],
            Self::Disappointment => &[
                "disappointed",
                "disappointing",
                "expected",
                "unfortunately",
                "mediocre",
            ],
            Self::Frustration => &["slow", "wait", "waiting", "long", "never", "still", "forever"],
            Self::Neutral => &[],
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Joy => write!(f, "joy"),
            Self::Gratitude => write!(f, "gratitude"),
            Self::Anger => write!(f, "anger"),
            Self::Disappointment => write!(f, "disappointment"),
            Self::Frustration => write!(f, "frustration"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionResult {
    pub primary_emotion: Emotion,
    pub confidence: f64,
    /// Distinct-keyword match count per category; zero-count categories
    /// omitted. Counts are independent (multi-label), not normalized.
    pub all_emotions: BTreeMap<Emotion, u32>,
}

/// Detect emotions by keyword membership.
///
/// Primary emotion is the highest-count category; ties break toward the
/// earlier entry in the fixed priority order. No match at all yields
/// `Neutral` at confidence 0.5.
pub fn emotion(text: &str) -> EmotionResult {
    let tokens: std::collections::HashSet<String> = tokenize(text).into_iter().collect();

    let mut all_emotions = BTreeMap::new();
    let mut primary = Emotion::Neutral;
    let mut best_count = 0u32;
    for category in Emotion::CATEGORIES {
        let count = category
            .keywords()
            .iter()
            .filter(|kw| tokens.contains(**kw))
            .count() as u32;
        if count > 0 {
            all_emotions.insert(category, count);
            // Strict greater-than: earlier categories win ties.
            if count > best_count {
                best_count = count;
                primary = category;
            }
        }
    }

    let confidence = if primary == Emotion::Neutral {
        0.5
    } else {
        (0.5 + 0.1 * f64::from(best_count)).min(0.95)
    };

    EmotionResult {
        primary_emotion: primary,
        confidence,
        all_emotions,
    }
}
