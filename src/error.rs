//! Error types for the review intelligence core.

use uuid::Uuid;

use crate::review::model::{ResponseStatus, ReviewApprovalStatus};

/// Top-level error type for the core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Conflict: {0}")]
    Conflict(#[from] ConflictError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Shorthand for a missing review.
    pub fn review_not_found(id: Uuid) -> Self {
        Self::NotFound {
            entity: "review",
            id,
        }
    }

    /// Shorthand for a missing business.
    pub fn business_not_found(id: Uuid) -> Self {
        Self::NotFound {
            entity: "business",
            id,
        }
    }
}

/// Input validation errors, rejected before any analysis runs.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("rating {rating} outside allowed range 1..=5")]
    RatingOutOfRange { rating: u8 },

    #[error("review text must not be empty")]
    EmptyText,

    #[error("business name must not be empty")]
    EmptyBusinessName,
}

/// Approval transition attempted from a non-eligible state.
///
/// Always carries the record's current state so the caller can
/// resynchronize its view. A prior human decision is never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("review already decided: approval status is {current}")]
    ReviewAlreadyDecided { current: ReviewApprovalStatus },

    #[error("response already decided: response status is {current}")]
    ResponseAlreadyDecided { current: ResponseStatus },

    #[error("response cannot be posted from status {current}")]
    ResponseNotApproved { current: ResponseStatus },
}

impl ConflictError {
    /// The record's current state, for conflict response bodies.
    pub fn current_state(&self) -> String {
        match self {
            Self::ReviewAlreadyDecided { current } => current.to_string(),
            Self::ResponseAlreadyDecided { current } | Self::ResponseNotApproved { current } => {
                current.to_string()
            }
        }
    }
}

/// Result type alias for the core.
pub type Result<T> = std::result::Result<T, Error>;
