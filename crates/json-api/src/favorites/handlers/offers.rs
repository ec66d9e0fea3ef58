//! Favorite Offers Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*, favorites::errors::into_status_error, offers::OffersResponse, state::State,
};

/// Favorite Offers Handler
///
/// The caller's favorite offers, most recently favorited first.
#[endpoint(
    tags("favorites"),
    summary = "List Favorite Offers",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Favorite offers"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OffersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller_or_401()?;

    let offers = state
        .app
        .favorites
        .list_favorite_offers(caller)
        .await
        .map_err(into_status_error)?;

    Ok(Json(offers.into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use offora_app::domain::{favorites::MockFavoritesService, offers::records::OfferUuid};

    use crate::test_helpers::{Mocks, TEST_CUSTOMER, customer_service, make_offer_listing};

    use super::*;

    #[tokio::test]
    async fn test_lists_callers_favorites() -> TestResult {
        let offer = OfferUuid::new();
        let mut favorites = MockFavoritesService::new();

        favorites
            .expect_list_favorite_offers()
            .once()
            .withf(|caller| *caller == TEST_CUSTOMER)
            .return_once(move |_| {
                let mut listing = make_offer_listing(offer);

                listing.is_favorited = true;

                Ok(vec![listing])
            });

        let body: OffersResponse = TestClient::get("http://example.com/favorites")
            .send(&customer_service(
                Mocks {
                    favorites,
                    ..Mocks::default()
                },
                Router::with_path("favorites").get(handler),
            ))
            .await
            .take_json()
            .await?;

        assert_eq!(body.offers.len(), 1);
        assert!(body.offers.iter().all(|listing| listing.is_favorited));
        assert_eq!(
            body.offers.first().map(|listing| listing.offer.uuid),
            Some(offer.into_uuid())
        );

        Ok(())
    }
}
