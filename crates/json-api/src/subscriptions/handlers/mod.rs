//! Subscription Handlers

pub(crate) mod checkout;
pub(crate) mod get;
pub(crate) mod verify;
