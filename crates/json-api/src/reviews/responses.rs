//! Review Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use offora_app::domain::reviews::records::{OfferReviewRecord, ShopReviewRecord};

/// Offer Review Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OfferReviewResponse {
    pub uuid: Uuid,
    pub offer_uuid: Uuid,
    pub offer_title: String,
    pub user_username: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: String,
}

impl From<OfferReviewRecord> for OfferReviewResponse {
    fn from(review: OfferReviewRecord) -> Self {
        OfferReviewResponse {
            uuid: review.uuid.into(),
            offer_uuid: review.offer_uuid.into(),
            offer_title: review.offer_title,
            user_username: review.username,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at.to_string(),
        }
    }
}

/// Offer Review List Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OfferReviewsResponse {
    pub reviews: Vec<OfferReviewResponse>,
}

impl FromIterator<OfferReviewRecord> for OfferReviewsResponse {
    fn from_iter<I: IntoIterator<Item = OfferReviewRecord>>(reviews: I) -> Self {
        OfferReviewsResponse {
            reviews: reviews.into_iter().map(Into::into).collect(),
        }
    }
}

/// Shop Review Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShopReviewResponse {
    pub uuid: Uuid,
    pub store_uuid: Uuid,
    pub user_username: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ShopReviewRecord> for ShopReviewResponse {
    fn from(review: ShopReviewRecord) -> Self {
        ShopReviewResponse {
            uuid: review.uuid.into(),
            store_uuid: review.store_uuid.into(),
            user_username: review.username,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at.to_string(),
            updated_at: review.updated_at.to_string(),
        }
    }
}

/// Shop Review List Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShopReviewsResponse {
    pub reviews: Vec<ShopReviewResponse>,
}

impl FromIterator<ShopReviewRecord> for ShopReviewsResponse {
    fn from_iter<I: IntoIterator<Item = ShopReviewRecord>>(reviews: I) -> Self {
        ShopReviewsResponse {
            reviews: reviews.into_iter().map(Into::into).collect(),
        }
    }
}
