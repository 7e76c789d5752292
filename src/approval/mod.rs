//! The two approval state machines.
//!
//! Pure transition functions over a [`Review`]; the store applies them
//! under its write lock so a transition is atomic with the state check
//! that guards it. Both machines are forward-only.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ConflictError;
use crate::review::model::{ResponseStatus, Review, ReviewApprovalStatus};

/// Human verdict on whether a review is genuine.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewDecision {
    pub is_genuine: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub approver: Option<String>,
}

/// Human verdict on a drafted reply.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseDecision {
    pub approved: bool,
    /// Edited reply text; when set on approval it supersedes the draft.
    #[serde(default)]
    pub final_response: Option<String>,
    #[serde(default)]
    pub approver: Option<String>,
}

/// Outcome of a posting attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostOutcome {
    Posted,
    /// Already posted; the original `posted_at` is preserved.
    AlreadyPosted,
}

/// Apply an authenticity verdict. Only a `Pending` review may be
/// decided; anything else is a conflict reporting the current state.
pub fn decide_review(review: &mut Review, decision: ReviewDecision) -> Result<(), ConflictError> {
    if review.review_approval_status != ReviewApprovalStatus::Pending {
        return Err(ConflictError::ReviewAlreadyDecided {
            current: review.review_approval_status,
        });
    }
    review.review_approval_status = if decision.is_genuine {
        ReviewApprovalStatus::Approved
    } else {
        ReviewApprovalStatus::Rejected
    };
    review.is_genuine = Some(decision.is_genuine);
    review.approval_notes = decision.notes;
    review.approved_by = decision.approver;
    review.approved_at = Some(Utc::now());
    Ok(())
}

/// Apply a reply verdict. Valid only from a decidable state
/// (`Generated` or `PendingApproval`).
pub fn decide_response(
    review: &mut Review,
    decision: ResponseDecision,
) -> Result<(), ConflictError> {
    if !review.response_status.is_decidable() {
        return Err(ConflictError::ResponseAlreadyDecided {
            current: review.response_status,
        });
    }
    if decision.approved {
        review.response_status = ResponseStatus::Approved;
        if decision.final_response.is_some() {
            review.final_response = decision.final_response;
        }
    } else {
        review.response_status = ResponseStatus::Rejected;
    }
    Ok(())
}

/// Mark an approved reply as posted.
///
/// Idempotent: posting an already-`Posted` reply succeeds without
/// touching `posted_at`. Any other non-`Approved` state is a conflict.
pub fn post_response(review: &mut Review) -> Result<PostOutcome, ConflictError> {
    match review.response_status {
        ResponseStatus::Posted => Ok(PostOutcome::AlreadyPosted),
        ResponseStatus::Approved => {
            review.response_status = ResponseStatus::Posted;
            review.posted_at = Some(Utc::now());
            Ok(PostOutcome::Posted)
        }
        current => Err(ConflictError::ResponseNotApproved { current }),
    }
}
