//! Shop Reviews Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, responses::ShopReviewsResponse},
    state::State,
};

/// Shop Reviews Handler
#[endpoint(
    tags("reviews"),
    summary = "List Shop Reviews",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Shop reviews, newest first"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    store: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ShopReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let reviews = state
        .app
        .reviews
        .list_shop_reviews(store.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(reviews.into_iter().collect()))
}
