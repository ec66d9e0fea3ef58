//! Subscription Checkout Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    subscriptions::{errors::into_status_error, responses::CheckoutResponse},
    state::State,
};

/// Subscription Checkout Handler
///
/// Creates a payment order for the monthly plan and returns the checkout parameters.
#[endpoint(
    tags("vendor"),
    summary = "Start Subscription Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Checkout parameters"),
        (status_code = StatusCode::FORBIDDEN, description = "Vendor account required"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Payment provider unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "subscriptions.checkout",
    skip(depot),
    fields(order_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let vendor = depot.vendor_or_403()?;

    let checkout = state
        .app
        .subscriptions
        .start_checkout(vendor)
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("order_id", checkout.order_id.as_str());

    Ok(Json(checkout.into()))
}
