//! Create Offer Review Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    observability::{self, ReviewTarget},
    reviews::{
        errors::into_status_error, requests::ReviewRequest, responses::OfferReviewResponse,
    },
    state::State,
};

/// Create Offer Review Handler
///
/// A user may review a given offer once.
#[endpoint(
    tags("reviews"),
    summary = "Review Offer",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Review created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Already reviewed or invalid rating"),
        (status_code = StatusCode::NOT_FOUND, description = "Offer not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "reviews.create_offer_review",
    skip(offer, json, depot, res),
    fields(offer_uuid = tracing::field::Empty, rating = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    offer: PathParam<Uuid>,
    json: JsonBody<ReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OfferReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller_or_401()?;
    let offer = offer.into_inner();
    let review = json.into_inner();

    let span = tracing::Span::current();

    span.record("offer_uuid", tracing::field::display(offer));
    span.record("rating", review.rating);

    let review = state
        .app
        .reviews
        .create_offer_review(caller, offer.into(), review.into())
        .await
        .map_err(into_status_error)?;

    observability::record_review_created(ReviewTarget::Offer);

    res.status_code(StatusCode::CREATED);

    Ok(Json(review.into()))
}
