//! Offer Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use uuid::Uuid;

use offora_app::domain::offers::data::OfferQuery;

use crate::{
    extensions::*, listing::ListingFilters, offers::errors::into_status_error,
    offers::responses::OffersResponse, state::State,
};

const STORE_CATEGORY_ALIAS: &str = "store__category";

/// Offer Index Handler
///
/// Lists approved, active offers of approved stores whose vendor is subscribed, newest
/// first. `store` narrows to one store and takes precedence over `lat`/`lon`, which
/// narrow to offers within 10 km. A malformed location yields an empty list.
/// `store__category` is read as an alias of `category` for older web clients.
#[endpoint(
    tags("offers"),
    summary = "List Offers",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Visible offers"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown category"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "offers.index",
    skip(store, lat, lon, search, category, req, depot),
    fields(user_uuid = tracing::field::Empty, returned = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    store: QueryParam<Uuid, false>,
    lat: QueryParam<String, false>,
    lon: QueryParam<String, false>,
    search: QueryParam<String, false>,
    category: QueryParam<String, false>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OffersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller_or_401()?;

    let filters = ListingFilters::parse(
        lat.into_inner(),
        lon.into_inner(),
        search.into_inner(),
        category
            .into_inner()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| req.query::<String>(STORE_CATEGORY_ALIAS)),
    )?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(caller.user));

    let offers = state
        .app
        .offers
        .list_visible_offers(
            caller,
            OfferQuery {
                store: store.into_inner().map(Into::into),
                location: filters.location,
                search: filters.search,
                category: filters.category,
            },
        )
        .await
        .map_err(into_status_error)?;

    span.record("returned", offers.len());

    Ok(Json(offers.into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use offora_app::{
        domain::{
            offers::{MockOffersService, OffersServiceError, records::OfferUuid},
            stores::records::StoreCategory,
        },
        geo::{GeoPoint, LocationFilter},
    };

    use crate::test_helpers::{
        Mocks, TEST_CUSTOMER, TEST_VENDOR, customer_service, make_offer_listing, storage_error,
    };

    use super::*;

    fn make_service(offers: MockOffersService) -> Service {
        customer_service(
            Mocks {
                offers,
                ..Mocks::default()
            },
            Router::with_path("offers").get(handler),
        )
    }

    #[tokio::test]
    async fn test_index_returns_offers_in_service_order() -> TestResult {
        let newest = OfferUuid::new();
        let oldest = OfferUuid::new();

        let mut offers = MockOffersService::new();

        offers
            .expect_list_visible_offers()
            .once()
            .withf(|caller, query| *caller == TEST_CUSTOMER && *query == OfferQuery::default())
            .return_once(move |_, _| {
                Ok(vec![make_offer_listing(newest), make_offer_listing(oldest)])
            });

        let response: OffersResponse = TestClient::get("http://example.com/offers")
            .send(&make_service(offers))
            .await
            .take_json()
            .await?;

        let uuids: Vec<Uuid> = response.offers.iter().map(|o| o.offer.uuid).collect();

        assert_eq!(uuids, vec![newest.into_uuid(), oldest.into_uuid()]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_filters() -> TestResult {
        let mut offers = MockOffersService::new();

        offers
            .expect_list_visible_offers()
            .once()
            .withf(|_, query| {
                *query
                    == OfferQuery {
                        store: Some(TEST_VENDOR.store),
                        location: LocationFilter::Near(GeoPoint::new(28.6, 77.2)),
                        search: Some("chai".to_string()),
                        category: Some(StoreCategory::Food),
                    }
            })
            .return_once(|_, _| Ok(vec![]));

        let res = TestClient::get(format!(
            "http://example.com/offers?store={}&lat=28.6&lon=77.2&search=chai&category=FOOD",
            TEST_VENDOR.store
        ))
        .send(&make_service(offers))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_store_category_alias_filters_by_category() -> TestResult {
        let mut offers = MockOffersService::new();

        offers
            .expect_list_visible_offers()
            .once()
            .withf(|_, query| query.category == Some(StoreCategory::Salon))
            .return_once(|_, _| Ok(vec![]));

        let res = TestClient::get("http://example.com/offers?store__category=SALON")
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_category_wins_over_store_category_alias() -> TestResult {
        let mut offers = MockOffersService::new();

        offers
            .expect_list_visible_offers()
            .once()
            .withf(|_, query| query.category == Some(StoreCategory::Food))
            .return_once(|_, _| Ok(vec![]));

        let res = TestClient::get("http://example.com/offers?category=FOOD&store__category=SALON")
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_location_is_forwarded_as_unresolvable() -> TestResult {
        let mut offers = MockOffersService::new();

        offers
            .expect_list_visible_offers()
            .once()
            .withf(|_, query| query.location == LocationFilter::Unresolvable)
            .return_once(|_, _| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/offers?lat=abc&lon=77.2")
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let response: OffersResponse = res.take_json().await?;

        assert!(response.offers.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_category_returns_400() {
        let mut offers = MockOffersService::new();

        offers.expect_list_visible_offers().never();

        let res = TestClient::get("http://example.com/offers?category=BAKERY")
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_storage_error_returns_500() {
        let mut offers = MockOffersService::new();

        offers
            .expect_list_visible_offers()
            .once()
            .return_once(|_, _| Err(OffersServiceError::Sql(storage_error())));

        let res = TestClient::get("http://example.com/offers")
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
