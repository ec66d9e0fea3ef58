//! Verify Subscription Payment Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    observability,
    stores::VendorStoreResponse,
    subscriptions::{errors::into_status_error, requests::VerifyPaymentRequest},
    state::State,
};

/// Verify Subscription Payment Handler
///
/// Checks the payment signature, then starts a fresh 30 day subscription window and
/// approves every pending offer of the vendor's store. Returns the updated store view.
#[endpoint(
    tags("vendor"),
    summary = "Verify Subscription Payment",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Subscription activated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Payment verification failed"),
        (status_code = StatusCode::FORBIDDEN, description = "Vendor account required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "subscriptions.verify",
    skip(json, depot),
    fields(
        store_uuid = tracing::field::Empty,
        approved_offers = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<VerifyPaymentRequest>,
    depot: &mut Depot,
) -> Result<Json<VendorStoreResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let vendor = depot.vendor_or_403()?;

    let span = tracing::Span::current();

    span.record("store_uuid", tracing::field::display(vendor.store));

    let activation = state
        .app
        .subscriptions
        .confirm_payment(vendor, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    span.record("approved_offers", activation.approved_offers);
    observability::record_subscription_activation(activation.approved_offers);

    let view = state
        .app
        .stores
        .get_vendor_store(vendor)
        .await
        .or_500("failed to load store after activation")?;

    Ok(Json(view.into()))
}
