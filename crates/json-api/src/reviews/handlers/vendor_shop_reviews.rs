//! Vendor Shop Reviews Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, responses::ShopReviewsResponse},
    state::State,
};

/// Vendor Shop Reviews Handler
///
/// Reviews left on the vendor's own store.
#[endpoint(
    tags("vendor"),
    summary = "List My Shop Reviews",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Shop reviews"),
        (status_code = StatusCode::FORBIDDEN, description = "Vendor account required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ShopReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let vendor = depot.vendor_or_403()?;

    let reviews = state
        .app
        .reviews
        .list_vendor_shop_reviews(vendor)
        .await
        .map_err(into_status_error)?;

    Ok(Json(reviews.into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use offora_app::domain::reviews::{MockReviewsService, records::ShopReviewUuid};

    use crate::test_helpers::{Mocks, TEST_VENDOR, make_shop_review, vendor_service};

    use super::*;

    #[tokio::test]
    async fn test_lists_reviews_of_vendor_store() -> TestResult {
        let mut reviews = MockReviewsService::new();

        reviews
            .expect_list_vendor_shop_reviews()
            .once()
            .withf(|vendor| *vendor == TEST_VENDOR)
            .return_once(|vendor| {
                Ok(vec![
                    make_shop_review(ShopReviewUuid::new(), vendor.store, 5),
                    make_shop_review(ShopReviewUuid::new(), vendor.store, 3),
                ])
            });

        let body: ShopReviewsResponse = TestClient::get("http://example.com/vendor/shop-reviews")
            .send(&vendor_service(
                Mocks {
                    reviews,
                    ..Mocks::default()
                },
                Router::with_path("vendor/shop-reviews").get(handler),
            ))
            .await
            .take_json()
            .await?;

        assert_eq!(body.reviews.len(), 2);
        assert!(
            body.reviews
                .iter()
                .all(|review| review.store_uuid == TEST_VENDOR.store.into_uuid())
        );

        Ok(())
    }
}
