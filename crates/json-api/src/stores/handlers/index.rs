//! Store Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use offora_app::domain::stores::data::StoreQuery;

use crate::{
    extensions::*,
    listing::ListingFilters,
    stores::{errors::into_status_error, responses::StoresResponse},
    state::State,
};

/// Store Index Handler
///
/// Lists approved stores of subscribed vendors by name. `lat`/`lon` narrow to stores
/// within 10 km; a malformed location yields an empty list.
#[endpoint(
    tags("stores"),
    summary = "List Stores",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Visible stores"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown category"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    lat: QueryParam<String, false>,
    lon: QueryParam<String, false>,
    search: QueryParam<String, false>,
    category: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<StoresResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller_or_401()?;

    let filters = ListingFilters::parse(
        lat.into_inner(),
        lon.into_inner(),
        search.into_inner(),
        category.into_inner(),
    )?;

    let stores = state
        .app
        .stores
        .list_visible_stores(
            caller,
            StoreQuery {
                location: filters.location,
                search: filters.search,
                category: filters.category,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(stores.into_iter().collect()))
}
