//! In-memory store backed by a `tokio::sync::RwLock`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::approval::{self, PostOutcome, ResponseDecision, ReviewDecision};
use crate::error::{Error, Result};
use crate::review::model::{Business, Review, ReviewApprovalStatus};
use crate::store::traits::{InsertOutcome, ReviewStore};

#[derive(Default)]
struct Inner {
    businesses: HashMap<Uuid, Business>,
    reviews: HashMap<Uuid, Review>,
}

/// Process-local store. All mutation happens under the write lock, so
/// every approval transition is atomic with its state check.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    fn is_duplicate(&self, candidate: &Review) -> bool {
        self.reviews.values().any(|existing| {
            existing.business_id == candidate.business_id
                && existing.platform == candidate.platform
                && existing.platform_review_id == candidate.platform_review_id
        })
    }

    /// Stable listing order for an unordered map.
    fn sorted(&self, mut reviews: Vec<Review>) -> Vec<Review> {
        reviews.sort_by(|a, b| b.review_date.cmp(&a.review_date).then(a.id.cmp(&b.id)));
        reviews
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn insert_business(&self, business: Business) -> Result<Business> {
        let mut inner = self.inner.write().await;
        inner.businesses.insert(business.id, business.clone());
        Ok(business)
    }

    async fn get_business(&self, id: Uuid) -> Result<Business> {
        let inner = self.inner.read().await;
        inner
            .businesses
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::business_not_found(id))
    }

    async fn list_businesses(&self) -> Result<Vec<Business>> {
        let inner = self.inner.read().await;
        let mut businesses: Vec<Business> = inner.businesses.values().cloned().collect();
        businesses.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(businesses)
    }

    async fn insert_review(&self, review: Review) -> Result<InsertOutcome> {
        let mut inner = self.inner.write().await;
        if inner.is_duplicate(&review) {
            return Ok(InsertOutcome::DuplicateSkipped);
        }
        inner.reviews.insert(review.id, review);
        Ok(InsertOutcome::Created)
    }

    async fn get_review(&self, id: Uuid) -> Result<Review> {
        let inner = self.inner.read().await;
        inner
            .reviews
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::review_not_found(id))
    }

    async fn list_reviews(&self, business_id: Option<Uuid>) -> Result<Vec<Review>> {
        let inner = self.inner.read().await;
        let reviews = inner
            .reviews
            .values()
            .filter(|r| business_id.is_none_or(|id| r.business_id == id))
            .cloned()
            .collect();
        Ok(inner.sorted(reviews))
    }

    async fn pending_reviews(&self, business_id: Option<Uuid>) -> Result<Vec<Review>> {
        let inner = self.inner.read().await;
        let reviews = inner
            .reviews
            .values()
            .filter(|r| r.review_approval_status == ReviewApprovalStatus::Pending)
            .filter(|r| business_id.is_none_or(|id| r.business_id == id))
            .cloned()
            .collect();
        Ok(inner.sorted(reviews))
    }

    async fn decide_review(&self, id: Uuid, decision: ReviewDecision) -> Result<Review> {
        let mut inner = self.inner.write().await;
        let review = inner
            .reviews
            .get_mut(&id)
            .ok_or_else(|| Error::review_not_found(id))?;
        approval::decide_review(review, decision)?;
        Ok(review.clone())
    }

    async fn decide_response(&self, id: Uuid, decision: ResponseDecision) -> Result<Review> {
        let mut inner = self.inner.write().await;
        let review = inner
            .reviews
            .get_mut(&id)
            .ok_or_else(|| Error::review_not_found(id))?;
        approval::decide_response(review, decision)?;
        Ok(review.clone())
    }

    async fn post_response(&self, id: Uuid) -> Result<(Review, PostOutcome)> {
        let mut inner = self.inner.write().await;
        let review = inner
            .reviews
            .get_mut(&id)
            .ok_or_else(|| Error::review_not_found(id))?;
        let outcome = approval::post_response(review)?;
        Ok((review.clone(), outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::response::generate;
    use crate::review::model::ReviewInput;
    use chrono::Utc;

    fn review_for(business_id: Uuid, platform_review_id: &str) -> Review {
        let input = ReviewInput {
            platform: "google".into(),
            platform_review_id: platform_review_id.into(),
            author: "Alice".into(),
            rating: 5,
            text: "Amazing food and service!".into(),
            review_date: Utc::now(),
        };
        let analysis = analyze(&input.text);
        let reply = generate(&analysis, "Luigi's", None);
        Review::from_analysis(business_id, input, analysis, reply)
    }

    #[tokio::test]
    async fn insert_and_fetch_review() {
        let store = MemoryStore::new();
        let business = store
            .insert_business(Business::new("Luigi's", "restaurant"))
            .await
            .unwrap();
        let review = review_for(business.id, "g-1");
        let id = review.id;
        assert_eq!(
            store.insert_review(review).await.unwrap(),
            InsertOutcome::Created
        );
        let fetched = store.get_review(id).await.unwrap();
        assert_eq!(fetched.id, id);
    }

    #[tokio::test]
    async fn duplicate_platform_review_is_skipped() {
        let store = MemoryStore::new();
        let business_id = Uuid::new_v4();
        store
            .insert_review(review_for(business_id, "g-1"))
            .await
            .unwrap();
        assert_eq!(
            store
                .insert_review(review_for(business_id, "g-1"))
                .await
                .unwrap(),
            InsertOutcome::DuplicateSkipped
        );
        // Same platform id under another business is a distinct review.
        assert_eq!(
            store
                .insert_review(review_for(Uuid::new_v4(), "g-1"))
                .await
                .unwrap(),
            InsertOutcome::Created
        );
    }

    #[tokio::test]
    async fn pending_listing_drops_decided_reviews() {
        let store = MemoryStore::new();
        let business_id = Uuid::new_v4();
        let decided = review_for(business_id, "g-1");
        let decided_id = decided.id;
        store.insert_review(decided).await.unwrap();
        store.insert_review(review_for(business_id, "g-2")).await.unwrap();

        store
            .decide_review(
                decided_id,
                ReviewDecision {
                    is_genuine: true,
                    notes: None,
                    approver: None,
                },
            )
            .await
            .unwrap();

        let pending = store.pending_reviews(Some(business_id)).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_ne!(pending[0].id, decided_id);
    }

    #[tokio::test]
    async fn missing_review_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get_review(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { entity: "review", .. }));
    }

    #[tokio::test]
    async fn conflict_surfaces_through_store() {
        let store = MemoryStore::new();
        let review = review_for(Uuid::new_v4(), "g-1");
        let id = review.id;
        store.insert_review(review).await.unwrap();
        let err = store.post_response(id).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }
}
