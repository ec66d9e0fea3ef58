//! Favorite Stores Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*, favorites::errors::into_status_error, state::State, stores::StoresResponse,
};

/// Favorite Stores Handler
#[endpoint(
    tags("favorites"),
    summary = "List Favorite Shops",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Favorite stores, most recent first"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StoresResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller_or_401()?;

    let stores = state
        .app
        .favorites
        .list_favorite_stores(caller)
        .await
        .map_err(into_status_error)?;

    Ok(Json(stores.into_iter().collect()))
}
