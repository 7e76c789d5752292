//! TextAnalyzer: pure, deterministic review text analysis.
//!
//! All keyword tables live in [`lexicon`] as process-wide immutable
//! statics; nothing here mutates shared state or touches the network,
//! so `analyze` may run inline during review creation.

pub mod aspect;
pub mod emotion;
pub mod lexicon;
pub mod sentiment;

pub use aspect::{Aspect, AspectMention};
pub use emotion::{Emotion, EmotionResult};
pub use sentiment::SentimentResult;

/// Combined analysis output for one review text.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    pub sentiment: SentimentResult,
    pub emotions: EmotionResult,
    pub aspects: Vec<AspectMention>,
}

/// Run the full analysis pipeline over a review text.
///
/// Deterministic: identical input yields identical label, score,
/// emotion map, and aspect list.
pub fn analyze(text: &str) -> AnalysisResult {
    let sentiment = sentiment::sentiment(text);
    let emotions = emotion::emotion(text);
    let aspects = aspect::aspects(text);
    AnalysisResult {
        sentiment,
        emotions,
        aspects,
    }
}
