//! Offer Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use offora_app::domain::offers::records::{OfferListing, OfferRecord};

/// An offer as its vendor sees it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OfferResponse {
    pub uuid: Uuid,
    pub store_uuid: Uuid,
    pub title: String,
    pub description: String,

    /// Prices are in paise
    pub original_price: Option<u64>,
    pub discounted_price: Option<u64>,
    pub discount_percentage: Option<u8>,
    pub image_url: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub is_active: bool,

    /// Set by the subscription gate or an operator, never by the vendor.
    pub is_approved: bool,
    pub views: u64,
    pub likes: u64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OfferRecord> for OfferResponse {
    fn from(offer: OfferRecord) -> Self {
        OfferResponse {
            uuid: offer.uuid.into(),
            store_uuid: offer.store_uuid.into(),
            title: offer.title,
            description: offer.description,
            original_price: offer.original_price,
            discounted_price: offer.discounted_price,
            discount_percentage: offer.discount_percentage,
            image_url: offer.image_url,
            start_time: offer.start_time.to_string(),
            end_time: offer.end_time.to_string(),
            is_active: offer.is_active,
            is_approved: offer.is_approved,
            views: offer.views,
            likes: offer.likes,
            created_at: offer.created_at.to_string(),
            updated_at: offer.updated_at.to_string(),
        }
    }
}

/// A visible offer with the store details customers browse by.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OfferListingResponse {
    pub offer: OfferResponse,
    pub store_name: String,
    pub store_address: String,
    pub store_phone_number: String,
    pub store_rating: f64,
    pub store_review_count: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Whether the caller has favorited this offer.
    pub is_favorited: bool,
}

impl From<OfferListing> for OfferListingResponse {
    fn from(listing: OfferListing) -> Self {
        OfferListingResponse {
            offer: listing.offer.into(),
            store_name: listing.store_name,
            store_address: listing.store_address,
            store_phone_number: listing.store_phone_number,
            store_rating: listing.store_rating,
            store_review_count: listing.store_review_count,
            latitude: listing.store_location.map(|point| point.latitude),
            longitude: listing.store_location.map(|point| point.longitude),
            is_favorited: listing.is_favorited,
        }
    }
}

/// Offer List Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OffersResponse {
    pub offers: Vec<OfferListingResponse>,
}

impl FromIterator<OfferListing> for OffersResponse {
    fn from_iter<I: IntoIterator<Item = OfferListing>>(listings: I) -> Self {
        OffersResponse {
            offers: listings.into_iter().map(Into::into).collect(),
        }
    }
}
