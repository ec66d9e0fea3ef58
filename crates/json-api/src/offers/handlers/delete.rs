//! Delete Offer Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, offers::errors::into_status_error, state::State};

/// Delete Offer Handler
#[endpoint(
    tags("vendor"),
    summary = "Delete Offer",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Offer deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Offer not found in the vendor's store"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    offer: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let vendor = depot.vendor_or_403()?;
    let offer = offer.into_inner();

    state
        .app
        .offers
        .delete_offer(vendor, offer.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(offer_uuid = %offer, store_uuid = %vendor.store, "deleted offer");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;

    use offora_app::domain::offers::{MockOffersService, OffersServiceError, records::OfferUuid};

    use crate::test_helpers::{Mocks, TEST_VENDOR, vendor_service};

    use super::*;

    fn make_service(offers: MockOffersService) -> Service {
        vendor_service(
            Mocks {
                offers,
                ..Mocks::default()
            },
            Router::with_path("vendor/offers/{offer}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_returns_204() {
        let uuid = OfferUuid::new();
        let mut offers = MockOffersService::new();

        offers
            .expect_delete_offer()
            .once()
            .withf(move |vendor, offer| *vendor == TEST_VENDOR && *offer == uuid)
            .return_once(|_, _| Ok(()));

        let res = TestClient::delete(format!("http://example.com/vendor/offers/{uuid}"))
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
    }

    #[tokio::test]
    async fn test_missing_offer_returns_404() {
        let uuid = OfferUuid::new();
        let mut offers = MockOffersService::new();

        offers
            .expect_delete_offer()
            .once()
            .return_once(|_, _| Err(OffersServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/vendor/offers/{uuid}"))
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
