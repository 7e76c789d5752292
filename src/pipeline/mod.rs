//! Ingestion pipeline: validate, analyze, draft, persist.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::analysis;
use crate::error::Result;
use crate::response;
use crate::review::model::{Review, ReviewInput};
use crate::store::{InsertOutcome, ReviewStore};

/// Result of a bulk import.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BulkImportReport {
    pub created: usize,
    pub skipped: usize,
}

/// Drives reviews from raw input to stored, analyzed records.
#[derive(Clone)]
pub struct ReviewPipeline {
    store: Arc<dyn ReviewStore>,
}

impl ReviewPipeline {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    /// Ingest one review for a business.
    ///
    /// Validation failures abort before analysis with no side effects.
    /// Analysis and reply drafting run synchronously; the review lands
    /// in the store already carrying both. A duplicate of an existing
    /// (platform, platform review id) pair returns the stored original.
    pub async fn ingest(&self, business_id: Uuid, input: ReviewInput) -> Result<Review> {
        input.validate()?;
        let business = self.store.get_business(business_id).await?;

        let analysis = analysis::analyze(&input.text);
        let reply = response::generate(&analysis, &business.name, None);
        debug!(
            sentiment = %analysis.sentiment.label,
            emotion = %analysis.emotions.primary_emotion,
            aspects = analysis.aspects.len(),
            tone = %reply.tone,
            "analyzed review"
        );

        let review = Review::from_analysis(business_id, input, analysis, reply);
        let id = review.id;
        let platform = review.platform.clone();
        let platform_review_id = review.platform_review_id.clone();
        match self.store.insert_review(review).await? {
            InsertOutcome::Created => {
                info!(review_id = %id, business_id = %business_id, "review ingested");
                self.store.get_review(id).await
            }
            InsertOutcome::DuplicateSkipped => {
                warn!(
                    business_id = %business_id,
                    platform = %platform,
                    "duplicate review skipped"
                );
                self.find_existing(business_id, &platform, &platform_review_id)
                    .await
            }
        }
    }

    /// Ingest a batch; duplicates are counted, not errors. A validation
    /// failure on any record still fails the whole call.
    pub async fn ingest_bulk(
        &self,
        business_id: Uuid,
        inputs: Vec<ReviewInput>,
    ) -> Result<BulkImportReport> {
        for input in &inputs {
            input.validate()?;
        }
        let business = self.store.get_business(business_id).await?;

        let mut report = BulkImportReport::default();
        for input in inputs {
            let analysis = analysis::analyze(&input.text);
            let reply = response::generate(&analysis, &business.name, None);
            let review = Review::from_analysis(business_id, input, analysis, reply);
            match self.store.insert_review(review).await? {
                InsertOutcome::Created => report.created += 1,
                InsertOutcome::DuplicateSkipped => report.skipped += 1,
            }
        }
        info!(
            business_id = %business_id,
            created = report.created,
            skipped = report.skipped,
            "bulk import finished"
        );
        Ok(report)
    }

    // The insert dropped our candidate, so the id we generated does not
    // exist; look the original up by its platform identity instead.
    async fn find_existing(
        &self,
        business_id: Uuid,
        platform: &str,
        platform_review_id: &str,
    ) -> Result<Review> {
        let reviews = self.store.list_reviews(Some(business_id)).await?;
        reviews
            .into_iter()
            .find(|r| r.platform == platform && r.platform_review_id == platform_review_id)
            .ok_or_else(|| {
                crate::error::Error::Internal("duplicate review vanished during ingest".into())
            })
    }
}
