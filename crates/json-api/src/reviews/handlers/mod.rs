//! Review Handlers

pub(crate) mod create_offer_review;
pub(crate) mod create_shop_review;
pub(crate) mod delete_shop_review;
pub(crate) mod offer_reviews;
pub(crate) mod shop_reviews;
pub(crate) mod update_shop_review;
pub(crate) mod vendor_offer_reviews;
pub(crate) mod vendor_shop_reviews;
