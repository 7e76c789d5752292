//! Core entities: reviews, businesses, and their status enums.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{AnalysisResult, AspectMention, Emotion};
use crate::error::ValidationError;
use crate::response::{ResponseResult, Tone};

/// Overall review sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "POSITIVE"),
            Self::Neutral => write!(f, "NEUTRAL"),
            Self::Negative => write!(f, "NEGATIVE"),
        }
    }
}

/// Human verdict on review authenticity. Forward-only: once a review
/// leaves `Pending` it never re-enters it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewApprovalStatus {
    /// Awaiting a human decision.
    Pending,
    /// Judged genuine.
    Approved,
    /// Judged fake, excluded from analytics by default.
    Rejected,
}

impl std::fmt::Display for ReviewApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// Lifecycle of the AI-drafted reply. Forward-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    /// Draft produced by the generator, not yet surfaced.
    Generated,
    /// Surfaced for human review.
    PendingApproval,
    /// Approved (possibly with edits), ready to post.
    Approved,
    /// Posted to the review platform.
    Posted,
    /// Rejected; will never be posted.
    Rejected,
}

impl ResponseStatus {
    /// Whether a human decision may still be taken from this state.
    pub fn is_decidable(&self) -> bool {
        matches!(self, Self::Generated | Self::PendingApproval)
    }
}

impl std::fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generated => write!(f, "generated"),
            Self::PendingApproval => write!(f, "pending_approval"),
            Self::Approved => write!(f, "approved"),
            Self::Posted => write!(f, "posted"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// A business that owns reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Business {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            created_at: Utc::now(),
        }
    }
}

/// Raw incoming review, validated before any analysis runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewInput {
    /// Source platform: "google", "yelp", "manual", etc.
    pub platform: String,
    /// Platform-native review ID, unique per (platform, business).
    pub platform_review_id: String,
    pub author: String,
    /// Star rating, 1..=5.
    pub rating: u8,
    pub text: String,
    pub review_date: DateTime<Utc>,
}

impl ReviewInput {
    /// Validate the input. Violations terminate the operation before any
    /// analysis runs and leave no side effects.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=5).contains(&self.rating) {
            return Err(ValidationError::RatingOutOfRange {
                rating: self.rating,
            });
        }
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        Ok(())
    }
}

/// A fully analyzed customer review.
///
/// Created already carrying its analysis and drafted reply; analysis is
/// synchronous at creation time, never deferred. After creation the record
/// is mutated only through the two approval state machines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub platform: String,
    pub platform_review_id: String,
    pub business_id: Uuid,
    pub author: String,
    pub rating: u8,
    pub text: String,
    pub review_date: DateTime<Utc>,

    // Analysis results
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    pub polarity: f64,
    pub subjectivity: f64,
    pub primary_emotion: Emotion,
    pub emotion_confidence: f64,
    /// Matched-keyword counts per emotion; zero-count categories omitted.
    pub emotions: BTreeMap<Emotion, u32>,
    pub aspects: Vec<AspectMention>,

    // Drafted reply
    pub ai_response: String,
    pub response_tone: Tone,
    pub response_confidence: f64,

    // Review authenticity machine
    pub review_approval_status: ReviewApprovalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_genuine: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,

    // Response approval machine
    pub response_status: ResponseStatus,
    /// May differ from `ai_response` when edited before approval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Assemble a new review from validated input plus its analysis.
    ///
    /// The drafted reply starts in `PendingApproval`: it is surfaced for
    /// human review as soon as it exists.
    pub fn from_analysis(
        business_id: Uuid,
        input: ReviewInput,
        analysis: AnalysisResult,
        reply: ResponseResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            platform: input.platform,
            platform_review_id: input.platform_review_id,
            business_id,
            author: input.author,
            rating: input.rating,
            text: input.text,
            review_date: input.review_date,
            sentiment: analysis.sentiment.label,
            sentiment_score: analysis.sentiment.score,
            polarity: analysis.sentiment.polarity,
            subjectivity: analysis.sentiment.subjectivity,
            primary_emotion: analysis.emotions.primary_emotion,
            emotion_confidence: analysis.emotions.confidence,
            emotions: analysis.emotions.all_emotions,
            aspects: analysis.aspects,
            ai_response: reply.response,
            response_tone: reply.tone,
            response_confidence: reply.confidence,
            review_approval_status: ReviewApprovalStatus::Pending,
            is_genuine: None,
            approval_notes: None,
            approved_by: None,
            approved_at: None,
            response_status: ResponseStatus::PendingApproval,
            final_response: None,
            posted_at: None,
            created_at: Utc::now(),
        }
    }

    /// The reply text that would actually be posted.
    pub fn effective_response(&self) -> &str {
        self.final_response.as_deref().unwrap_or(&self.ai_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(rating: u8, text: &str) -> ReviewInput {
        ReviewInput {
            platform: "google".into(),
            platform_review_id: "g-1".into(),
            author: "Alice".into(),
            rating,
            text: text.into(),
            review_date: Utc::now(),
        }
    }

    #[test]
    fn validates_rating_range() {
        assert!(input(1, "ok").validate().is_ok());
        assert!(input(5, "ok").validate().is_ok());
        assert!(matches!(
            input(0, "ok").validate(),
            Err(ValidationError::RatingOutOfRange { rating: 0 })
        ));
        assert!(matches!(
            input(6, "ok").validate(),
            Err(ValidationError::RatingOutOfRange { rating: 6 })
        ));
    }

    #[test]
    fn rejects_empty_text() {
        assert!(matches!(
            input(4, "   ").validate(),
            Err(ValidationError::EmptyText)
        ));
    }

    #[test]
    fn sentiment_serializes_uppercase() {
        let json = serde_json::to_string(&Sentiment::Positive).unwrap();
        assert_eq!(json, "\"POSITIVE\"");
    }

    #[test]
    fn status_display_matches_serde() {
        let json = serde_json::to_string(&ResponseStatus::PendingApproval).unwrap();
        assert_eq!(json, format!("\"{}\"", ResponseStatus::PendingApproval));
    }

    #[test]
    fn decidable_states() {
        assert!(ResponseStatus::Generated.is_decidable());
        assert!(ResponseStatus::PendingApproval.is_decidable());
        assert!(!ResponseStatus::Approved.is_decidable());
        assert!(!ResponseStatus::Posted.is_decidable());
        assert!(!ResponseStatus::Rejected.is_decidable());
    }
}
