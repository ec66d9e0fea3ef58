//! Account Handlers

pub(crate) mod register;
pub(crate) mod register_vendor;
