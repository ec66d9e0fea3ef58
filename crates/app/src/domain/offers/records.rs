//! Offer Records

use jiff::Timestamp;

use crate::{
    domain::stores::records::StoreUuid,
    geo::{GeoPoint, Locatable},
    uuids::typed_uuid,
};

typed_uuid!(
    /// Offer UUID
    OfferUuid
);

/// Offer Record
#[derive(Debug, Clone)]
pub struct OfferRecord {
    pub uuid: OfferUuid,
    pub store_uuid: StoreUuid,
    pub title: String,
    pub description: String,
    pub original_price: Option<u64>,
    pub discounted_price: Option<u64>,
    pub discount_percentage: Option<u8>,
    pub image_url: Option<String>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub is_active: bool,
    pub is_approved: bool,
    pub views: u64,
    pub likes: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An offer joined with the store details shown alongside it.
#[derive(Debug, Clone)]
pub struct OfferListing {
    pub offer: OfferRecord,
    pub store_name: String,
    pub store_address: String,
    pub store_phone_number: String,
    pub store_rating: f64,
    pub store_review_count: u32,
    pub store_location: Option<GeoPoint>,
    pub is_favorited: bool,
}

impl Locatable for OfferListing {
    fn location(&self) -> Option<GeoPoint> {
        self.store_location
    }
}
