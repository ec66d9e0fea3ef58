//! Create Shop Review Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    observability::{self, ReviewTarget},
    reviews::{errors::into_status_error, requests::ReviewRequest, responses::ShopReviewResponse},
    state::State,
};

/// Create Shop Review Handler
///
/// A user may review a given store once. The store's rating and review count are
/// recomputed from its reviews.
#[endpoint(
    tags("reviews"),
    summary = "Review Shop",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Review created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Already reviewed or invalid rating"),
        (status_code = StatusCode::NOT_FOUND, description = "Store not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "reviews.create_shop_review",
    skip(store, json, depot, res),
    fields(store_uuid = tracing::field::Empty, rating = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    store: PathParam<Uuid>,
    json: JsonBody<ReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ShopReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller_or_401()?;
    let store = store.into_inner();
    let review = json.into_inner();

    let span = tracing::Span::current();

    span.record("store_uuid", tracing::field::display(store));
    span.record("rating", review.rating);

    let review = state
        .app
        .reviews
        .create_shop_review(caller, store.into(), review.into())
        .await
        .map_err(into_status_error)?;

    observability::record_review_created(ReviewTarget::Shop);

    res.status_code(StatusCode::CREATED);

    Ok(Json(review.into()))
}
