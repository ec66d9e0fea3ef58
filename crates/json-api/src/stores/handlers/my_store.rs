//! Vendor Store Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    stores::{errors::into_status_error, responses::VendorStoreResponse},
    state::State,
};

/// Vendor Store Handler
///
/// Returns the vendor's store with every offer, pending ones included, and the
/// subscription status.
#[endpoint(
    tags("vendor"),
    summary = "Get My Store",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Vendor store"),
        (status_code = StatusCode::FORBIDDEN, description = "Vendor account required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<VendorStoreResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let vendor = depot.vendor_or_403()?;

    let view = state
        .app
        .stores
        .get_vendor_store(vendor)
        .await
        .map_err(into_status_error)?;

    Ok(Json(view.into()))
}
