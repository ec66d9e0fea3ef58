//! Store Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use offora_app::domain::stores::records::{StoreListing, StoreRecord, VendorStore};

use crate::{offers::OfferResponse, subscriptions::SubscriptionResponse};

/// Store Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StoreResponse {
    pub uuid: Uuid,
    pub name: String,
    pub category: String,
    pub category_label: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone_number: String,
    pub is_approved: bool,

    /// Mean of the store's review ratings, two decimals
    pub rating: f64,
    pub review_count: u32,

    /// Whether the caller has favorited this store
    pub is_favorited: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<StoreRecord> for StoreResponse {
    fn from(store: StoreRecord) -> Self {
        StoreResponse {
            uuid: store.uuid.into(),
            name: store.name,
            category: store.category.as_str().to_string(),
            category_label: store.category.label().to_string(),
            address: store.address,
            latitude: store.location.map(|point| point.latitude),
            longitude: store.location.map(|point| point.longitude),
            phone_number: store.phone_number,
            is_approved: store.is_approved,
            rating: store.rating,
            review_count: store.review_count,
            is_favorited: false,
            created_at: store.created_at.to_string(),
            updated_at: store.updated_at.to_string(),
        }
    }
}

impl From<StoreListing> for StoreResponse {
    fn from(listing: StoreListing) -> Self {
        StoreResponse {
            is_favorited: listing.is_favorited,
            ..listing.store.into()
        }
    }
}

/// Store List Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StoresResponse {
    pub stores: Vec<StoreResponse>,
}

impl FromIterator<StoreListing> for StoresResponse {
    fn from_iter<I: IntoIterator<Item = StoreListing>>(listings: I) -> Self {
        StoresResponse {
            stores: listings.into_iter().map(Into::into).collect(),
        }
    }
}

/// The vendor's own store, every offer it has and its subscription status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VendorStoreResponse {
    pub store: StoreResponse,
    pub offers: Vec<OfferResponse>,
    pub subscription: Option<SubscriptionResponse>,
}

impl From<VendorStore> for VendorStoreResponse {
    fn from(view: VendorStore) -> Self {
        VendorStoreResponse {
            store: view.store.into(),
            offers: view.offers.into_iter().map(Into::into).collect(),
            subscription: view.subscription.map(Into::into),
        }
    }
}
