//! Offer Reviews Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, responses::OfferReviewsResponse},
    state::State,
};

/// Offer Reviews Handler
///
/// Reviews of an offer, newest first.
#[endpoint(
    tags("reviews"),
    summary = "List Offer Reviews",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Offer reviews"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    offer: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OfferReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let reviews = state
        .app
        .reviews
        .list_offer_reviews(offer.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(reviews.into_iter().collect()))
}
