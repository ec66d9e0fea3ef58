//! Operator approval of stores and offers.

pub mod errors;
pub mod service;

pub use errors::ModerationServiceError;
pub use service::*;
