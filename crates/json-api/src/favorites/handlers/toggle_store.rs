//! Toggle Store Favorite Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    favorites::{
        errors::into_status_error,
        responses::{FavoriteStatusResponse, toggle_status_code},
    },
    state::State,
};

/// Toggle Store Favorite Handler
#[endpoint(
    tags("favorites"),
    summary = "Toggle Store Favorite",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Favorited"),
        (status_code = StatusCode::OK, description = "Unfavorited"),
        (status_code = StatusCode::NOT_FOUND, description = "Store not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    store: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<FavoriteStatusResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller_or_401()?;

    let toggle = state
        .app
        .favorites
        .toggle_store_favorite(caller, store.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(toggle_status_code(toggle));

    Ok(Json(toggle.into()))
}
