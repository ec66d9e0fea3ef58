//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use offora_app::{
    auth::{ApiTokenMetadata, IssuedApiToken, MockAuthService},
    context::AppContext,
    domain::{
        accounts::{
            MockAccountsService,
            identity::{Caller, Vendor},
            records::{UserRecord, UserUuid},
        },
        favorites::MockFavoritesService,
        offers::{
            MockOffersService,
            records::{OfferListing, OfferRecord, OfferUuid},
        },
        reviews::{
            MockReviewsService,
            records::{OfferReviewRecord, OfferReviewUuid, ShopReviewRecord, ShopReviewUuid},
        },
        stores::{
            MockStoresService,
            records::{StoreCategory, StoreListing, StoreRecord, StoreUuid},
        },
        subscriptions::MockSubscriptionsService,
    },
    geo::GeoPoint,
};

use crate::state::State;

pub(crate) const TEST_CUSTOMER: Caller = Caller {
    user: UserUuid::from_uuid(Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0001)),
    is_vendor: false,
};

pub(crate) const TEST_VENDOR: Vendor = Vendor {
    user: UserUuid::from_uuid(Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0002)),
    store: StoreUuid::from_uuid(Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0003)),
};

/// One mock per service. Any call without a matching expectation panics the test.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) auth: MockAuthService,
    pub(crate) accounts: MockAccountsService,
    pub(crate) stores: MockStoresService,
    pub(crate) offers: MockOffersService,
    pub(crate) subscriptions: MockSubscriptionsService,
    pub(crate) reviews: MockReviewsService,
    pub(crate) favorites: MockFavoritesService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            auth: Arc::new(self.auth),
            accounts: Arc::new(self.accounts),
            stores: Arc::new(self.stores),
            offers: Arc::new(self.offers),
            subscriptions: Arc::new(self.subscriptions),
            reviews: Arc::new(self.reviews),
            favorites: Arc::new(self.favorites),
        })
    }
}

/// Routes reachable without a token.
pub(crate) fn public_service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(mocks.into_state())).push(route))
}

/// Routes called by an authenticated customer.
pub(crate) fn customer_service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject(TEST_CUSTOMER))
            .push(route),
    )
}

/// Routes called by an authenticated vendor whose store has been resolved.
pub(crate) fn vendor_service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject(TEST_VENDOR.as_caller()))
            .hoop(inject(TEST_VENDOR))
            .push(route),
    )
}

pub(crate) fn storage_error() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}

pub(crate) fn make_user(uuid: UserUuid, username: &str, is_vendor: bool) -> UserRecord {
    UserRecord {
        uuid,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        phone_number: None,
        is_vendor,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_issued_token(user: UserUuid) -> IssuedApiToken {
    IssuedApiToken {
        token: "of_token".to_string(),
        metadata: ApiTokenMetadata {
            uuid: Uuid::now_v7(),
            user_uuid: user,
            created_at: Timestamp::UNIX_EPOCH,
            revoked_at: None,
        },
    }
}

pub(crate) fn make_store(uuid: StoreUuid) -> StoreRecord {
    StoreRecord {
        uuid,
        owner_uuid: TEST_VENDOR.user,
        name: "Chai Point".to_string(),
        category: StoreCategory::Food,
        address: "Connaught Place, New Delhi".to_string(),
        location: Some(GeoPoint::new(28.6315, 77.2167)),
        phone_number: "+911100000000".to_string(),
        is_approved: true,
        rating: 4.5,
        review_count: 2,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_store_listing(uuid: StoreUuid) -> StoreListing {
    StoreListing {
        store: make_store(uuid),
        is_favorited: false,
    }
}

pub(crate) fn make_offer(uuid: OfferUuid) -> OfferRecord {
    OfferRecord {
        uuid,
        store_uuid: TEST_VENDOR.store,
        title: "Half price chai".to_string(),
        description: "All day".to_string(),
        original_price: Some(4_000),
        discounted_price: Some(2_000),
        discount_percentage: Some(50),
        image_url: None,
        start_time: Timestamp::UNIX_EPOCH,
        end_time: Timestamp::MAX,
        is_active: true,
        is_approved: true,
        views: 0,
        likes: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_offer_listing(uuid: OfferUuid) -> OfferListing {
    let store = make_store(TEST_VENDOR.store);

    OfferListing {
        offer: make_offer(uuid),
        store_name: store.name,
        store_address: store.address,
        store_phone_number: store.phone_number,
        store_rating: store.rating,
        store_review_count: store.review_count,
        store_location: store.location,
        is_favorited: false,
    }
}

pub(crate) fn make_offer_review(offer: OfferUuid, rating: u8) -> OfferReviewRecord {
    OfferReviewRecord {
        uuid: OfferReviewUuid::new(),
        offer_uuid: offer,
        offer_title: "Half price chai".to_string(),
        user_uuid: TEST_CUSTOMER.user,
        username: "asha".to_string(),
        rating,
        comment: "Worth it".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_shop_review(uuid: ShopReviewUuid, store: StoreUuid, rating: u8) -> ShopReviewRecord {
    ShopReviewRecord {
        uuid,
        store_uuid: store,
        user_uuid: TEST_CUSTOMER.user,
        username: "asha".to_string(),
        rating,
        comment: "Friendly staff".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
