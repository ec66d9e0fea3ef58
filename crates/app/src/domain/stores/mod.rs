//! Stores

pub mod data;
pub mod errors;
pub mod rating;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::StoresServiceError;
pub use rating::{PgRatingAggregator, RatingSummary};
pub use service::*;
