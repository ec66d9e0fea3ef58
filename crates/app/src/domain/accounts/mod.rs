//! Accounts

pub mod data;
pub mod errors;
pub mod identity;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::AccountsServiceError;
pub use service::*;
