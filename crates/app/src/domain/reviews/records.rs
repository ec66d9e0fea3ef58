//! Review Records

use jiff::Timestamp;

use crate::{
    domain::{
        accounts::records::UserUuid, offers::records::OfferUuid, stores::records::StoreUuid,
    },
    uuids::typed_uuid,
};

typed_uuid!(
    /// Offer Review UUID
    OfferReviewUuid
);

typed_uuid!(
    /// Shop Review UUID
    ShopReviewUuid
);

/// Offer Review Record
#[derive(Debug, Clone)]
pub struct OfferReviewRecord {
    pub uuid: OfferReviewUuid,
    pub offer_uuid: OfferUuid,
    pub offer_title: String,
    pub user_uuid: UserUuid,
    pub username: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: Timestamp,
}

/// Shop Review Record
#[derive(Debug, Clone)]
pub struct ShopReviewRecord {
    pub uuid: ShopReviewUuid,
    pub store_uuid: StoreUuid,
    pub user_uuid: UserUuid,
    pub username: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
