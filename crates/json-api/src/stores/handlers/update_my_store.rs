//! Update Vendor Store Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    stores::{
        errors::into_status_error, requests::StoreProfileRequest, responses::StoreResponse,
    },
    state::State,
};

/// Update Vendor Store Handler
///
/// Replaces the vendor's store profile. Approval, rating and review count are unchanged.
#[endpoint(
    tags("vendor"),
    summary = "Update My Store",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Store updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Vendor account required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "stores.update",
    skip(json, depot),
    fields(store_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<StoreProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<StoreResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let vendor = depot.vendor_or_403()?;
    let update = json.into_inner().into_update()?;

    tracing::Span::current().record("store_uuid", tracing::field::display(vendor.store));

    let store = state
        .app
        .stores
        .update_vendor_store(vendor, update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(store.into()))
}
