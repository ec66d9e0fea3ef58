//! Get Subscription Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    subscriptions::{errors::into_status_error, responses::SubscriptionResponse},
    state::State,
};

/// Get Subscription Handler
///
/// Answers 404 when the vendor has never subscribed.
#[endpoint(
    tags("vendor"),
    summary = "Get My Subscription",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Subscription found"),
        (status_code = StatusCode::NOT_FOUND, description = "Never subscribed"),
        (status_code = StatusCode::FORBIDDEN, description = "Vendor account required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SubscriptionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let vendor = depot.vendor_or_403()?;

    let subscription = state
        .app
        .subscriptions
        .get_subscription(vendor)
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| StatusError::not_found().brief("Subscription not found"))?;

    Ok(Json(subscription.into()))
}
