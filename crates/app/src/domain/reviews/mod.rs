//! Offer and shop reviews.

pub mod data;
pub mod errors;
pub mod events;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::ReviewsServiceError;
pub use events::{ShopReviewEvents, ShopReviewsObserver};
pub use service::*;
