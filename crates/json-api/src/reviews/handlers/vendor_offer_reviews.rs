//! Vendor Offer Reviews Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, responses::OfferReviewsResponse},
    state::State,
};

/// Vendor Offer Reviews Handler
///
/// Reviews left on any offer of the vendor's store, each tagged with the offer title.
#[endpoint(
    tags("vendor"),
    summary = "List My Offer Reviews",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Offer reviews"),
        (status_code = StatusCode::FORBIDDEN, description = "Vendor account required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OfferReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let vendor = depot.vendor_or_403()?;

    let reviews = state
        .app
        .reviews
        .list_vendor_offer_reviews(vendor)
        .await
        .map_err(into_status_error)?;

    Ok(Json(reviews.into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use offora_app::domain::{
        offers::records::OfferUuid,
        reviews::{MockReviewsService, ReviewsServiceError},
    };

    use crate::test_helpers::{Mocks, TEST_VENDOR, make_offer_review, storage_error, vendor_service};

    use super::*;

    fn make_service(reviews: MockReviewsService) -> Service {
        vendor_service(
            Mocks {
                reviews,
                ..Mocks::default()
            },
            Router::with_path("vendor/offer-reviews").get(handler),
        )
    }

    #[tokio::test]
    async fn test_reviews_carry_offer_title() -> TestResult {
        let mut reviews = MockReviewsService::new();

        reviews
            .expect_list_vendor_offer_reviews()
            .once()
            .withf(|vendor| *vendor == TEST_VENDOR)
            .return_once(|_| Ok(vec![make_offer_review(OfferUuid::new(), 4)]));

        let body: OfferReviewsResponse = TestClient::get("http://example.com/vendor/offer-reviews")
            .send(&make_service(reviews))
            .await
            .take_json()
            .await?;

        assert_eq!(
            body.reviews.first().map(|review| review.offer_title.as_str()),
            Some("Half price chai")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_error_returns_500() {
        let mut reviews = MockReviewsService::new();

        reviews
            .expect_list_vendor_offer_reviews()
            .once()
            .return_once(|_| Err(ReviewsServiceError::Sql(storage_error())));

        let res = TestClient::get("http://example.com/vendor/offer-reviews")
            .send(&make_service(reviews))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
