//! Create Offer Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    observability,
    offers::{errors::into_status_error, requests::OfferRequest, responses::OfferResponse},
    state::State,
};

/// Create Offer Handler
///
/// Creates an offer in the vendor's store. It is approved straight away only while the
/// vendor's subscription is current; otherwise it waits for approval.
#[endpoint(
    tags("vendor"),
    summary = "Create Offer",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Offer created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Vendor account required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "offers.create",
    skip(json, depot, res),
    fields(
        store_uuid = tracing::field::Empty,
        offer_uuid = tracing::field::Empty,
        is_approved = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<OfferRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OfferResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let vendor = depot.vendor_or_403()?;
    let offer = json.into_inner().into_new_offer()?;

    let span = tracing::Span::current();

    span.record("store_uuid", tracing::field::display(vendor.store));
    span.record("offer_uuid", tracing::field::display(offer.uuid));

    let offer = state
        .app
        .offers
        .create_offer(vendor, offer)
        .await
        .map_err(into_status_error)?;

    span.record("is_approved", offer.is_approved);
    observability::record_offer_created(offer.is_approved);

    res.add_header(LOCATION, format!("/offers/{}", offer.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(offer.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use offora_app::domain::offers::{MockOffersService, OffersServiceError, data::InvalidOffer};

    use crate::test_helpers::{Mocks, TEST_VENDOR, make_offer, vendor_service};

    use super::*;

    fn make_service(offers: MockOffersService) -> Service {
        vendor_service(
            Mocks {
                offers,
                ..Mocks::default()
            },
            Router::with_path("vendor/offers").post(handler),
        )
    }

    fn payload() -> serde_json::Value {
        json!({
            "title": "Half price chai",
            "description": "All day",
            "discount_percentage": 50,
            "start_time": "2026-03-01T09:00:00Z",
            "end_time": "2026-03-08T09:00:00Z",
            "is_approved": true,
        })
    }

    #[tokio::test]
    async fn test_create_returns_201_and_gate_decision() -> TestResult {
        let mut offers = MockOffersService::new();

        offers
            .expect_create_offer()
            .once()
            .withf(|vendor, offer| {
                *vendor == TEST_VENDOR
                    && offer.title == "Half price chai"
                    && offer.discount_percentage == Some(50)
            })
            .return_once(|_, offer| {
                let mut record = make_offer(offer.uuid);

                record.is_approved = false;

                Ok(record)
            });

        let mut res = TestClient::post("http://example.com/vendor/offers")
            .json(&payload())
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: OfferResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(location, Some(format!("/offers/{}", body.uuid).as_str()));
        assert!(
            !body.is_approved,
            "the client cannot approve its own offer"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_offer_returns_400() {
        let mut offers = MockOffersService::new();

        offers
            .expect_create_offer()
            .once()
            .return_once(|_, _| Err(OffersServiceError::InvalidOffer(InvalidOffer::EndsBeforeStart)));

        let res = TestClient::post("http://example.com/vendor/offers")
            .json(&payload())
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_unparseable_time_returns_400_without_calling_service() {
        let mut offers = MockOffersService::new();

        offers.expect_create_offer().never();

        let res = TestClient::post("http://example.com/vendor/offers")
            .json(&json!({
                "title": "Chai",
                "start_time": "soon",
                "end_time": "2026-03-08T09:00:00Z",
            }))
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
