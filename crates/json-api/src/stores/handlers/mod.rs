//! Store Handlers

pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod my_store;
pub(crate) mod update_my_store;
