//! Update Shop Review Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, requests::ReviewRequest, responses::ShopReviewResponse},
    state::State,
};

/// Update Shop Review Handler
///
/// Only the author may edit a review; anyone else gets 404.
#[endpoint(
    tags("reviews"),
    summary = "Edit Shop Review",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Review updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid rating"),
        (status_code = StatusCode::NOT_FOUND, description = "Review not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    store: PathParam<Uuid>,
    review: PathParam<Uuid>,
    json: JsonBody<ReviewRequest>,
    depot: &mut Depot,
) -> Result<Json<ShopReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller_or_401()?;

    let review = state
        .app
        .reviews
        .update_shop_review(
            caller,
            store.into_inner().into(),
            review.into_inner().into(),
            json.into_inner().into(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(review.into()))
}
