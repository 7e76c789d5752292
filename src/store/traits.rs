//! Storage abstraction for reviews and businesses.

use async_trait::async_trait;
use uuid::Uuid;

use crate::approval::{PostOutcome, ResponseDecision, ReviewDecision};
use crate::error::Result;
use crate::review::model::{Business, Review};

/// Outcome of an insert attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Created,
    /// A review with the same (business, platform, platform review id)
    /// already exists; the incoming record was dropped.
    DuplicateSkipped,
}

/// Store of businesses and their analyzed reviews.
///
/// Approval transitions go through the store rather than through bare
/// record mutation so the state check and the write happen under one
/// lock.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn insert_business(&self, business: Business) -> Result<Business>;
    async fn get_business(&self, id: Uuid) -> Result<Business>;
    async fn list_businesses(&self) -> Result<Vec<Business>>;

    async fn insert_review(&self, review: Review) -> Result<InsertOutcome>;
    async fn get_review(&self, id: Uuid) -> Result<Review>;
    /// All reviews, optionally scoped to one business.
    async fn list_reviews(&self, business_id: Option<Uuid>) -> Result<Vec<Review>>;
    /// Reviews still awaiting an authenticity decision.
    async fn pending_reviews(&self, business_id: Option<Uuid>) -> Result<Vec<Review>>;

    /// Apply an authenticity verdict atomically; returns the updated review.
    async fn decide_review(&self, id: Uuid, decision: ReviewDecision) -> Result<Review>;
    /// Apply a reply verdict atomically; returns the updated review.
    async fn decide_response(&self, id: Uuid, decision: ResponseDecision) -> Result<Review>;
    /// Mark an approved reply posted; idempotent for already-posted replies.
    async fn post_response(&self, id: Uuid) -> Result<(Review, PostOutcome)>;
}
