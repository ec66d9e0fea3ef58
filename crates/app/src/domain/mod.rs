//! Offora Domain Concerns

pub mod accounts;
pub mod favorites;
pub mod moderation;
pub mod offers;
pub mod reviews;
pub mod stores;
pub mod subscriptions;
