//! AnalyticsAggregator: pure snapshot aggregation.
//!
//! Operates on a slice of reviews the caller already fetched, so
//! aggregation never holds the store lock.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::review::model::{ResponseStatus, Review, ReviewApprovalStatus, Sentiment};

const TOP_N: usize = 5;

/// Aggregation parameters.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsQuery {
    /// Window length; reviews dated within `[now - days, now]` count.
    pub window_days: i64,
    pub business_id: Option<Uuid>,
    /// When false (the default view) rejected reviews are excluded.
    pub include_rejected: bool,
}

/// Label plus its review count, for the top-N distributions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Sentiment counts, always carrying all three labels.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SentimentDistribution {
    #[serde(rename = "POSITIVE")]
    pub positive: usize,
    #[serde(rename = "NEUTRAL")]
    pub neutral: usize,
    #[serde(rename = "NEGATIVE")]
    pub negative: usize,
}

/// Review counts per star rating.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RatingDistribution {
    #[serde(rename = "1_star")]
    pub one_star: usize,
    #[serde(rename = "2_star")]
    pub two_star: usize,
    #[serde(rename = "3_star")]
    pub three_star: usize,
    #[serde(rename = "4_star")]
    pub four_star: usize,
    #[serde(rename = "5_star")]
    pub five_star: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsResult {
    pub total_reviews: usize,
    /// Mean star rating rounded to 1 decimal; 0.0 on an empty window.
    pub average_rating: f64,
    pub sentiment_distribution: SentimentDistribution,
    /// Top-5 primary emotions by review count, ties in first-seen order.
    pub emotion_distribution: Vec<LabelCount>,
    /// Top-5 mentioned aspects by review count, ties in first-seen order.
    pub aspect_distribution: Vec<LabelCount>,
    pub rating_distribution: RatingDistribution,
    /// Percentage of replies approved or posted, over reviews carrying
    /// a reply; 0.0 when none do.
    pub approval_rate: f64,
    /// Percentage of replies actually posted, same denominator.
    pub post_rate: f64,
}

/// Aggregate with `now = Utc::now()`.
pub fn compute(reviews: &[Review], query: AnalyticsQuery) -> AnalyticsResult {
    compute_at(reviews, query, Utc::now())
}

/// Aggregate against an explicit clock.
pub fn compute_at(reviews: &[Review], query: AnalyticsQuery, now: DateTime<Utc>) -> AnalyticsResult {
    let window_start = now - Duration::days(query.window_days);
    let selected: Vec<&Review> = reviews
        .iter()
        .filter(|r| r.review_date >= window_start && r.review_date <= now)
        .filter(|r| query.business_id.is_none_or(|id| r.business_id == id))
        .filter(|r| {
            query.include_rejected
                || r.review_approval_status != ReviewApprovalStatus::Rejected
        })
        .collect();

    let total_reviews = selected.len();

    let average_rating = if total_reviews == 0 {
        0.0
    } else {
        let sum: u32 = selected.iter().map(|r| u32::from(r.rating)).sum();
        round1(f64::from(sum) / total_reviews as f64)
    };

    let mut sentiment_distribution = SentimentDistribution::default();
    let mut rating_distribution = RatingDistribution::default();
    for review in &selected {
        match review.sentiment {
            Sentiment::Positive => sentiment_distribution.positive += 1,
            Sentiment::Neutral => sentiment_distribution.neutral += 1,
            Sentiment::Negative => sentiment_distribution.negative += 1,
        }
        match review.rating {
            1 => rating_distribution.one_star += 1,
            2 => rating_distribution.two_star += 1,
            3 => rating_distribution.three_star += 1,
            4 => rating_distribution.four_star += 1,
            _ => rating_distribution.five_star += 1,
        }
    }

    let emotion_distribution = top_counts(
        selected
            .iter()
            .map(|r| r.primary_emotion.to_string())
            .collect(),
    );
    // One count per review per aspect, regardless of mention count.
    let aspect_distribution = top_counts(
        selected
            .iter()
            .flat_map(|r| r.aspects.iter().map(|m| m.aspect.to_string()))
            .collect(),
    );

    let with_response: Vec<&&Review> = selected
        .iter()
        .filter(|r| !r.ai_response.is_empty())
        .collect();
    let (approval_rate, post_rate) = if with_response.is_empty() {
        (0.0, 0.0)
    } else {
        let approved = with_response
            .iter()
            .filter(|r| {
                matches!(
                    r.response_status,
                    ResponseStatus::Approved | ResponseStatus::Posted
                )
            })
            .count();
        let posted = with_response
            .iter()
            .filter(|r| r.response_status == ResponseStatus::Posted)
            .count();
        let denominator = with_response.len() as f64;
        (
            round1(approved as f64 / denominator * 100.0),
            round1(posted as f64 / denominator * 100.0),
        )
    };

    AnalyticsResult {
        total_reviews,
        average_rating,
        sentiment_distribution,
        emotion_distribution,
        aspect_distribution,
        rating_distribution,
        approval_rate,
        post_rate,
    }
}

/// Count labels preserving first-seen order, then keep the top five by
/// count. The sort is stable, so ties stay in encounter order.
fn top_counts(labels: Vec<String>) -> Vec<LabelCount> {
    let mut counts: Vec<LabelCount> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|c| c.label == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(LabelCount { label, count: 1 }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_N);
    counts
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
