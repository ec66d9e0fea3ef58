//! Favorite Handlers

pub(crate) mod offers;
pub(crate) mod stores;
pub(crate) mod toggle_offer;
pub(crate) mod toggle_store;
