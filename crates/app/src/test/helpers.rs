//! Test Helpers

use jiff::{SignedDuration, Timestamp};

use crate::{
    domain::{
        accounts::{
            AccountsService, AccountsServiceError,
            data::{NewCustomer, NewVendor},
            identity::{Caller, Vendor},
            records::UserUuid,
        },
        offers::{
            OffersService, OffersServiceError,
            data::NewOffer,
            records::{OfferRecord, OfferUuid},
        },
        stores::{
            data::NewStoreProfile,
            records::{StoreCategory, StoreUuid},
        },
        subscriptions::{SubscriptionsService, SubscriptionsServiceError, records::Activation},
    },
    geo::GeoPoint,
    payments::PaymentConfirmation,
    test::TestContext,
};

pub(crate) fn new_customer(name: &str) -> NewCustomer {
    NewCustomer {
        uuid: UserUuid::new(),
        username: name.to_string(),
        email: format!("{name}@example.com"),
        phone_number: None,
    }
}

pub(crate) fn new_offer(title: &str) -> NewOffer {
    let start_time = Timestamp::now();

    NewOffer {
        uuid: OfferUuid::new(),
        title: title.to_string(),
        description: String::new(),
        original_price: Some(40_000),
        discounted_price: Some(30_000),
        discount_percentage: Some(25),
        image_url: None,
        start_time,
        end_time: start_time + SignedDuration::from_hours(7 * 24),
    }
}

/// Register a customer, returning their id and bearer token.
pub(crate) async fn register_customer(
    ctx: &TestContext,
    name: &str,
) -> Result<(UserUuid, String), AccountsServiceError> {
    let registration = ctx.accounts.register_customer(new_customer(name)).await?;

    Ok((registration.user.uuid, registration.token.token))
}

/// Register a customer and return them as a request caller.
pub(crate) async fn customer(ctx: &TestContext, name: &str) -> Result<Caller, AccountsServiceError> {
    let (user, _token) = register_customer(ctx, name).await?;

    Ok(Caller {
        user,
        is_vendor: false,
    })
}

async fn register(
    ctx: &TestContext,
    name: &str,
    category: StoreCategory,
    location: Option<GeoPoint>,
) -> Result<Vendor, AccountsServiceError> {
    let registration = ctx
        .accounts
        .register_vendor(NewVendor {
            user: new_customer(name),
            store: NewStoreProfile {
                uuid: StoreUuid::new(),
                name: name.to_string(),
                category,
                address: "Connaught Place, New Delhi".to_string(),
                location,
                phone_number: String::new(),
            },
        })
        .await?;

    Ok(Vendor {
        user: registration.user.uuid,
        store: registration.store.uuid,
    })
}

/// Register a vendor whose store is named after them.
pub(crate) async fn register_vendor(
    ctx: &TestContext,
    name: &str,
    location: Option<GeoPoint>,
) -> Result<Vendor, AccountsServiceError> {
    register(ctx, name, StoreCategory::Other, location).await
}

/// Register a vendor whose store has the given category.
pub(crate) async fn register_vendor_in(
    ctx: &TestContext,
    name: &str,
    category: StoreCategory,
) -> Result<Vendor, AccountsServiceError> {
    register(ctx, name, category, None).await
}

pub(crate) async fn create_offer(
    ctx: &TestContext,
    vendor: Vendor,
    title: &str,
) -> Result<OfferRecord, OffersServiceError> {
    ctx.offers.create_offer(vendor, new_offer(title)).await
}

/// A confirmation carrying a valid signature from the test gateway.
pub(crate) fn confirmation_for(
    ctx: &TestContext,
    order_id: &str,
    payment_id: &str,
) -> PaymentConfirmation {
    PaymentConfirmation {
        order_id: order_id.to_string(),
        payment_id: payment_id.to_string(),
        signature: ctx.payments.sign(order_id, payment_id),
    }
}

/// Pay for and activate the vendor's subscription.
pub(crate) async fn activate(
    ctx: &TestContext,
    vendor: Vendor,
) -> Result<Activation, SubscriptionsServiceError> {
    let order_id = format!("order_{}", vendor.store.into_uuid().simple());
    let payment_id = format!("pay_{}", vendor.user.into_uuid().simple());

    ctx.subscriptions
        .confirm_payment(vendor, confirmation_for(ctx, &order_id, &payment_id))
        .await
}
