//! Subscriptions

pub mod errors;
pub mod gate;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::SubscriptionsServiceError;
pub use gate::{AutoApprove, OfferScreening, ScreeningDecision, ScreeningError};
pub use service::*;
