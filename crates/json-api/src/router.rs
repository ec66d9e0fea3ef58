//! App Router

use salvo::Router;

use crate::{accounts, auth, favorites, offers, reviews, stores, subscriptions};

/// Every API route. Registration is public; everything else needs a bearer token, and
/// `/vendor/**` additionally needs a vendor account with a store.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("register").post(accounts::register::handler))
        .push(Router::with_path("vendor/register").post(accounts::register_vendor::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(offer_routes())
                .push(store_routes())
                .push(Router::with_path("favorites").get(favorites::offers::handler))
                .push(Router::with_path("favorite-shops").get(favorites::stores::handler))
                .push(vendor_routes()),
        )
}

fn offer_routes() -> Router {
    Router::with_path("offers")
        .get(offers::index::handler)
        .push(
            Router::with_path("{offer}")
                .get(offers::get::handler)
                .push(
                    Router::with_path("reviews")
                        .get(reviews::offer_reviews::handler)
                        .post(reviews::create_offer_review::handler),
                )
                .push(Router::with_path("favorite").post(favorites::toggle_offer::handler)),
        )
}

fn store_routes() -> Router {
    Router::with_path("stores")
        .get(stores::index::handler)
        .push(
            Router::with_path("{store}")
                .get(stores::get::handler)
                .push(
                    Router::with_path("reviews")
                        .get(reviews::shop_reviews::handler)
                        .post(reviews::create_shop_review::handler)
                        .push(
                            Router::with_path("{review}")
                                .put(reviews::update_shop_review::handler)
                                .delete(reviews::delete_shop_review::handler),
                        ),
                )
                .push(Router::with_path("favorite").post(favorites::toggle_store::handler)),
        )
}

fn vendor_routes() -> Router {
    Router::with_path("vendor")
        .hoop(auth::vendor::handler)
        .push(
            Router::with_path("my-store")
                .get(stores::my_store::handler)
                .put(stores::update_my_store::handler),
        )
        .push(
            Router::with_path("offers").post(offers::create::handler).push(
                Router::with_path("{offer}")
                    .put(offers::update::handler)
                    .delete(offers::delete::handler),
            ),
        )
        .push(Router::with_path("shop-reviews").get(reviews::vendor_shop_reviews::handler))
        .push(Router::with_path("offer-reviews").get(reviews::vendor_offer_reviews::handler))
        .push(
            Router::with_path("subscription")
                .get(subscriptions::get::handler)
                .push(Router::with_path("create").post(subscriptions::checkout::handler))
                .push(Router::with_path("verify").post(subscriptions::verify::handler)),
        )
}
