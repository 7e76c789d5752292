//! RevuIQ review intelligence core: text analysis, reply drafting,
//! approval workflows, and analytics over customer reviews.

pub mod analysis;
pub mod analytics;
pub mod approval;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod response;
pub mod review;
pub mod server;
pub mod store;
