//! Review and business data model.

pub mod model;

pub use model::{
    Business, ResponseStatus, Review, ReviewApprovalStatus, ReviewInput, Sentiment,
};
