//! Get Store Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    stores::{errors::into_status_error, responses::StoreResponse},
    state::State,
};

/// Get Store Handler
#[endpoint(
    tags("stores"),
    summary = "Get Store",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Store found"),
        (status_code = StatusCode::NOT_FOUND, description = "Store not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    store: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<StoreResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller_or_401()?;

    let store = state
        .app
        .stores
        .get_store(caller, store.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(store.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use offora_app::domain::stores::{MockStoresService, StoresServiceError, records::StoreUuid};

    use crate::test_helpers::{Mocks, customer_service, make_store_listing};

    use super::*;

    fn make_service(stores: MockStoresService) -> Service {
        customer_service(
            Mocks {
                stores,
                ..Mocks::default()
            },
            Router::with_path("stores/{store}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_store_with_aggregate() -> TestResult {
        let uuid = StoreUuid::new();
        let mut listing = make_store_listing(uuid);

        listing.is_favorited = true;

        let mut stores = MockStoresService::new();

        stores
            .expect_get_store()
            .once()
            .withf(move |_, store| *store == uuid)
            .return_once(move |_, _| Ok(listing));

        let body: StoreResponse = TestClient::get(format!("http://example.com/stores/{uuid}"))
            .send(&make_service(stores))
            .await
            .take_json()
            .await?;

        assert_eq!(body.uuid, uuid.into_uuid());
        assert!((body.rating - 4.5).abs() < f64::EPSILON, "rating passes through");
        assert_eq!(body.review_count, 2);
        assert!(body.is_favorited, "favorite flag passes through");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_store_returns_404() {
        let mut stores = MockStoresService::new();

        stores
            .expect_get_store()
            .once()
            .return_once(|_, _| Err(StoresServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/stores/{}", StoreUuid::new()))
            .send(&make_service(stores))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
