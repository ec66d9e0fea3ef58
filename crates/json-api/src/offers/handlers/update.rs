//! Update Offer Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    offers::{errors::into_status_error, requests::OfferRequest, responses::OfferResponse},
    state::State,
};

/// Update Offer Handler
///
/// Replaces the editable fields of one of the vendor's own offers. Approval is unchanged.
#[endpoint(
    tags("vendor"),
    summary = "Update Offer",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Offer updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Offer not found in the vendor's store"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "offers.update",
    skip(offer, json, depot),
    fields(store_uuid = tracing::field::Empty, offer_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    offer: PathParam<Uuid>,
    json: JsonBody<OfferRequest>,
    depot: &mut Depot,
) -> Result<Json<OfferResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let vendor = depot.vendor_or_403()?;
    let offer = offer.into_inner();
    let update = json.into_inner().into_update()?;

    let span = tracing::Span::current();

    span.record("store_uuid", tracing::field::display(vendor.store));
    span.record("offer_uuid", tracing::field::display(offer));

    let offer = state
        .app
        .offers
        .update_offer(vendor, offer.into(), update)
        .await
        .map_err(into_status_error)?;

    tracing::info!(offer_uuid = %offer.uuid, "updated offer");

    Ok(Json(offer.into()))
}
