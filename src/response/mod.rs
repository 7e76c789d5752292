//! ResponseGenerator: template-based reply drafting.
//!
//! Pure and deterministic like the analyzer: the same analysis plus the
//! same business name always drafts the same reply.

mod templates;

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::review::model::Sentiment;

/// Voice of the drafted reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Grateful,
    Apologetic,
    Professional,
}

impl Tone {
    /// Default tone for a sentiment label.
    pub fn for_sentiment(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => Self::Grateful,
            Sentiment::Negative => Self::Apologetic,
            Sentiment::Neutral => Self::Professional,
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grateful => write!(f, "grateful"),
            Self::Apologetic => write!(f, "apologetic"),
            Self::Professional => write!(f, "professional"),
        }
    }
}

/// A drafted reply plus the metadata the approval flow needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseResult {
    pub response: String,
    pub tone: Tone,
    /// Draft quality estimate in [0.75, 0.95].
    pub confidence: f64,
}

/// Draft a reply from the review's analysis.
///
/// Tone defaults from the sentiment label; pass `tone_override` to force
/// one. The reply is assembled from four slots (opening, aspect
/// acknowledgment, personalization, closing) and always mentions the
/// business by name.
pub fn generate(
    analysis: &AnalysisResult,
    business_name: &str,
    tone_override: Option<Tone>,
) -> ResponseResult {
    let tone = tone_override.unwrap_or_else(|| Tone::for_sentiment(analysis.sentiment.label));

    let mut parts = vec![templates::opening(tone, analysis.emotions.primary_emotion).to_string()];
    parts.push(templates::acknowledgment(tone, &analysis.aspects));
    parts.push(templates::personalization(tone, business_name));
    parts.push(templates::closing(tone).to_string());
    let response = parts.join(" ");

    // More polarized, aspect-rich reviews get more confident drafts.
    let aspect_bonus = 0.03 * analysis.aspects.len().min(2) as f64;
    let confidence = (0.6 + 0.3 * analysis.sentiment.score + aspect_bonus).min(0.95);

    ResponseResult {
        response,
        tone,
        confidence,
    }
}
