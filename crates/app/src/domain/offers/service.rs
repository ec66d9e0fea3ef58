//! Offers service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        accounts::identity::{Caller, Vendor},
        offers::{
            data::{NewOffer, OfferQuery, OfferUpdate},
            errors::OffersServiceError,
            records::{OfferListing, OfferRecord, OfferUuid},
            repository::PgOffersRepository,
        },
        subscriptions::{gate, gate::OfferScreening, repository::PgSubscriptionsRepository},
    },
    geo::LocationFilter,
};

#[derive(Clone)]
pub struct PgOffersService {
    db: Db,
    repository: PgOffersRepository,
    subscriptions: PgSubscriptionsRepository,
    screening: Arc<dyn OfferScreening>,
}

impl PgOffersService {
    #[must_use]
    pub fn new(db: Db, screening: Arc<dyn OfferScreening>) -> Self {
        Self {
            db,
            repository: PgOffersRepository::new(),
            subscriptions: PgSubscriptionsRepository::new(),
            screening,
        }
    }
}

impl fmt::Debug for PgOffersService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgOffersService")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl OffersService for PgOffersService {
    async fn list_visible_offers(
        &self,
        caller: Caller,
        query: OfferQuery,
    ) -> Result<Vec<OfferListing>, OffersServiceError> {
        // A store filter takes precedence over any location.
        let location = if query.store.is_some() {
            LocationFilter::Anywhere
        } else {
            query.location
        };

        if location == LocationFilter::Unresolvable {
            return Ok(Vec::new());
        }

        let mut tx = self.db.begin_snapshot().await?;

        let offers = self
            .repository
            .list_visible_offers(&mut tx, caller.user, &query)
            .await?;

        tx.commit().await?;

        Ok(location.retain(offers))
    }

    async fn get_offer(
        &self,
        caller: Caller,
        offer: OfferUuid,
    ) -> Result<OfferListing, OffersServiceError> {
        let mut tx = self.db.begin().await?;

        let offer = self
            .repository
            .get_visible_offer(&mut tx, caller.user, offer)
            .await?;

        tx.commit().await?;

        Ok(offer)
    }

    async fn create_offer(
        &self,
        vendor: Vendor,
        offer: NewOffer,
    ) -> Result<OfferRecord, OffersServiceError> {
        offer.validate()?;

        let mut tx = self.db.begin().await?;

        let subscription = self
            .subscriptions
            .find_subscription_for_share(&mut tx, vendor.user)
            .await?;

        let approved = gate::initial_approval(
            subscription.as_ref(),
            Timestamp::now(),
            self.screening.as_ref(),
            &offer,
        )
        .await?;

        let created = self
            .repository
            .create_offer(&mut tx, vendor.store, &offer, approved)
            .await?;

        tx.commit().await?;

        tracing::info!(
            store = %vendor.store,
            offer = %created.uuid,
            approved,
            "offer created"
        );

        Ok(created)
    }

    async fn update_offer(
        &self,
        vendor: Vendor,
        offer: OfferUuid,
        update: OfferUpdate,
    ) -> Result<OfferRecord, OffersServiceError> {
        update.validate()?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_offer(&mut tx, vendor.store, offer, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_offer(&self, vendor: Vendor, offer: OfferUuid) -> Result<(), OffersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .delete_offer(&mut tx, vendor.store, offer)
            .await?;

        if rows_affected == 0 {
            return Err(OffersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OffersService: Send + Sync {
    /// Offers a customer may see, optionally narrowed to one store or to a location.
    async fn list_visible_offers(
        &self,
        caller: Caller,
        query: OfferQuery,
    ) -> Result<Vec<OfferListing>, OffersServiceError>;

    /// Retrieve a single approved, active offer.
    async fn get_offer(
        &self,
        caller: Caller,
        offer: OfferUuid,
    ) -> Result<OfferListing, OffersServiceError>;

    /// Creates an offer in the vendor's store, approved only if the subscription gate allows.
    async fn create_offer(
        &self,
        vendor: Vendor,
        offer: NewOffer,
    ) -> Result<OfferRecord, OffersServiceError>;

    /// Updates one of the vendor's own offers.
    async fn update_offer(
        &self,
        vendor: Vendor,
        offer: OfferUuid,
        update: OfferUpdate,
    ) -> Result<OfferRecord, OffersServiceError>;

    /// Deletes one of the vendor's own offers.
    async fn delete_offer(&self, vendor: Vendor, offer: OfferUuid) -> Result<(), OffersServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use testresult::TestResult;

    use crate::{
        domain::{
            favorites::FavoritesService,
            moderation::ModerationService,
            stores::{StoresService, records::StoreCategory},
            subscriptions::{ScreeningError, gate::MockOfferScreening},
        },
        geo::GeoPoint,
        test::{
            TestContext,
            helpers::{
                activate, create_offer, customer, new_offer, register_vendor,
                register_vendor_in,
            },
        },
    };

    use super::*;

    const ORIGIN: GeoPoint = GeoPoint::new(28.6315, 77.2167);

    fn titles(offers: &[OfferListing]) -> Vec<&str> {
        offers.iter().map(|listing| listing.offer.title.as_str()).collect()
    }

    #[tokio::test]
    async fn unsubscribed_vendor_offer_starts_pending() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = register_vendor(&ctx, "pending_shop", None).await?;

        let offer = create_offer(&ctx, vendor, "Wait for admin").await?;

        assert!(!offer.is_approved);
        assert_eq!(offer.store_uuid, vendor.store);

        Ok(())
    }

    #[tokio::test]
    async fn subscribed_vendor_offer_is_approved() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = register_vendor(&ctx, "paid_shop", None).await?;

        activate(&ctx, vendor).await?;

        let offer = create_offer(&ctx, vendor, "Straight to customers").await?;

        assert!(offer.is_approved);

        Ok(())
    }

    #[tokio::test]
    async fn screening_failure_writes_nothing() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = register_vendor(&ctx, "screened", None).await?;

        activate(&ctx, vendor).await?;

        let mut screening = MockOfferScreening::new();
        screening
            .expect_screen()
            .once()
            .return_once(|_| Err(ScreeningError("screening offline".to_string())));

        let service = PgOffersService::new(Db::new(ctx.db.pool().clone()), Arc::new(screening));

        let result = service.create_offer(vendor, new_offer("Never stored")).await;

        assert!(
            matches!(result, Err(OffersServiceError::Screening(_))),
            "expected Screening, got {result:?}"
        );

        assert!(ctx.stores.get_vendor_store(vendor).await?.offers.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_offer_rejects_invalid_payload() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = register_vendor(&ctx, "sloppy", None).await?;

        let mut offer = new_offer("Backwards");
        offer.end_time = offer.start_time - SignedDuration::from_hours(1);

        let result = ctx.offers.create_offer(vendor, offer).await;

        assert!(
            matches!(result, Err(OffersServiceError::InvalidOffer(_))),
            "expected InvalidOffer, got {result:?}"
        );

        assert!(ctx.stores.get_vendor_store(vendor).await?.offers.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn listing_requires_every_approval_gate() -> TestResult {
        let ctx = TestContext::new().await;
        let viewer = customer(&ctx, "viewer").await?;

        let live = register_vendor(&ctx, "live", None).await?;
        activate(&ctx, live).await?;
        create_offer(&ctx, live, "Visible").await?;

        let pending = create_offer(&ctx, live, "Unapproved").await?;
        ctx.moderation.set_offer_approval(pending.uuid, false).await?;

        let paused = create_offer(&ctx, live, "Inactive").await?;
        let mut update = OfferUpdate::from(new_offer("Inactive"));
        update.is_active = false;
        ctx.offers.update_offer(live, paused.uuid, update).await?;

        let unsubscribed = register_vendor(&ctx, "unsubscribed", None).await?;
        let manual = create_offer(&ctx, unsubscribed, "Admin approved only").await?;
        ctx.moderation.set_offer_approval(manual.uuid, true).await?;

        let hidden_store = register_vendor(&ctx, "hidden", None).await?;
        activate(&ctx, hidden_store).await?;
        create_offer(&ctx, hidden_store, "Store unapproved").await?;
        ctx.moderation
            .set_store_approval(hidden_store.store, false)
            .await?;

        let offers = ctx
            .offers
            .list_visible_offers(viewer, OfferQuery::default())
            .await?;

        assert_eq!(titles(&offers), vec!["Visible"]);

        Ok(())
    }

    #[tokio::test]
    async fn listing_is_newest_first() -> TestResult {
        let ctx = TestContext::new().await;
        let viewer = customer(&ctx, "viewer").await?;
        let vendor = register_vendor(&ctx, "busy", None).await?;

        activate(&ctx, vendor).await?;

        create_offer(&ctx, vendor, "First").await?;
        create_offer(&ctx, vendor, "Second").await?;
        create_offer(&ctx, vendor, "Third").await?;

        let offers = ctx
            .offers
            .list_visible_offers(viewer, OfferQuery::default())
            .await?;

        assert_eq!(titles(&offers), vec!["Third", "Second", "First"]);

        Ok(())
    }

    #[tokio::test]
    async fn geo_listing_keeps_stores_within_ten_km() -> TestResult {
        let ctx = TestContext::new().await;
        let viewer = customer(&ctx, "viewer").await?;

        let near = register_vendor(
            &ctx,
            "near",
            Some(GeoPoint::new(ORIGIN.latitude + 0.08, ORIGIN.longitude)),
        )
        .await?;
        let far = register_vendor(
            &ctx,
            "far",
            Some(GeoPoint::new(ORIGIN.latitude + 0.1, ORIGIN.longitude)),
        )
        .await?;
        let nowhere = register_vendor(&ctx, "nowhere", None).await?;

        for (vendor, title) in [(near, "Near"), (far, "Far"), (nowhere, "Nowhere")] {
            activate(&ctx, vendor).await?;
            create_offer(&ctx, vendor, title).await?;
        }

        let offers = ctx
            .offers
            .list_visible_offers(
                viewer,
                OfferQuery {
                    location: LocationFilter::Near(ORIGIN),
                    ..OfferQuery::default()
                },
            )
            .await?;

        assert_eq!(titles(&offers), vec!["Near"]);

        Ok(())
    }

    #[tokio::test]
    async fn malformed_location_yields_empty_listing() -> TestResult {
        let ctx = TestContext::new().await;
        let viewer = customer(&ctx, "viewer").await?;
        let vendor = register_vendor(&ctx, "shop", Some(ORIGIN)).await?;

        activate(&ctx, vendor).await?;
        create_offer(&ctx, vendor, "Somewhere").await?;

        let offers = ctx
            .offers
            .list_visible_offers(
                viewer,
                OfferQuery {
                    location: LocationFilter::from_query(Some("abc"), Some("10.0")),
                    ..OfferQuery::default()
                },
            )
            .await?;

        assert!(offers.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn store_filter_takes_precedence_over_location() -> TestResult {
        let ctx = TestContext::new().await;
        let viewer = customer(&ctx, "viewer").await?;

        let mine = register_vendor(&ctx, "mine", None).await?;
        let other = register_vendor(&ctx, "other", Some(ORIGIN)).await?;

        for (vendor, title) in [(mine, "Mine"), (other, "Other")] {
            activate(&ctx, vendor).await?;
            create_offer(&ctx, vendor, title).await?;
        }

        let offers = ctx
            .offers
            .list_visible_offers(
                viewer,
                OfferQuery {
                    store: Some(mine.store),
                    location: LocationFilter::Unresolvable,
                    ..OfferQuery::default()
                },
            )
            .await?;

        assert_eq!(titles(&offers), vec!["Mine"]);

        Ok(())
    }

    #[tokio::test]
    async fn listing_filters_by_search_and_category() -> TestResult {
        let ctx = TestContext::new().await;
        let viewer = customer(&ctx, "viewer").await?;

        let salon = register_vendor_in(&ctx, "glow", StoreCategory::Salon).await?;
        let food = register_vendor_in(&ctx, "dhaba", StoreCategory::Food).await?;

        for vendor in [salon, food] {
            activate(&ctx, vendor).await?;
        }

        create_offer(&ctx, salon, "Haircut 50% off").await?;
        create_offer(&ctx, food, "Free naan").await?;

        let by_search = ctx
            .offers
            .list_visible_offers(
                viewer,
                OfferQuery {
                    search: Some("NAAN".to_string()),
                    ..OfferQuery::default()
                },
            )
            .await?;

        assert_eq!(titles(&by_search), vec!["Free naan"]);

        let by_store_name = ctx
            .offers
            .list_visible_offers(
                viewer,
                OfferQuery {
                    search: Some("glow".to_string()),
                    ..OfferQuery::default()
                },
            )
            .await?;

        assert_eq!(titles(&by_store_name), vec!["Haircut 50% off"]);

        let by_category = ctx
            .offers
            .list_visible_offers(
                viewer,
                OfferQuery {
                    category: Some(StoreCategory::Salon),
                    ..OfferQuery::default()
                },
            )
            .await?;

        assert_eq!(titles(&by_category), vec!["Haircut 50% off"]);

        let literal_percent = ctx
            .offers
            .list_visible_offers(
                viewer,
                OfferQuery {
                    search: Some("0%".to_string()),
                    ..OfferQuery::default()
                },
            )
            .await?;

        assert_eq!(titles(&literal_percent), vec!["Haircut 50% off"]);

        Ok(())
    }

    #[tokio::test]
    async fn listing_marks_callers_favorites() -> TestResult {
        let ctx = TestContext::new().await;
        let viewer = customer(&ctx, "viewer").await?;
        let someone_else = customer(&ctx, "someone_else").await?;
        let vendor = register_vendor(&ctx, "fav_shop", None).await?;

        activate(&ctx, vendor).await?;
        let offer = create_offer(&ctx, vendor, "Loved").await?;

        ctx.favorites.toggle_offer_favorite(viewer, offer.uuid).await?;

        let mine = ctx
            .offers
            .list_visible_offers(viewer, OfferQuery::default())
            .await?;
        let theirs = ctx
            .offers
            .list_visible_offers(someone_else, OfferQuery::default())
            .await?;

        assert!(mine.iter().all(|listing| listing.is_favorited));
        assert!(theirs.iter().all(|listing| !listing.is_favorited));

        Ok(())
    }

    #[tokio::test]
    async fn get_offer_hides_pending_offers() -> TestResult {
        let ctx = TestContext::new().await;
        let viewer = customer(&ctx, "viewer").await?;
        let vendor = register_vendor(&ctx, "draft", None).await?;

        let offer = create_offer(&ctx, vendor, "Not yet").await?;

        let result = ctx.offers.get_offer(viewer, offer.uuid).await;

        assert!(
            matches!(result, Err(OffersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        ctx.moderation.set_offer_approval(offer.uuid, true).await?;

        let listing = ctx.offers.get_offer(viewer, offer.uuid).await?;

        assert_eq!(listing.offer.uuid, offer.uuid);
        assert_eq!(listing.store_name, "draft");

        Ok(())
    }

    #[tokio::test]
    async fn update_offer_keeps_approval_and_applies_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = register_vendor(&ctx, "editor", None).await?;

        let offer = create_offer(&ctx, vendor, "Old title").await?;

        let updated = ctx
            .offers
            .update_offer(vendor, offer.uuid, OfferUpdate::from(new_offer("New title")))
            .await?;

        assert_eq!(updated.title, "New title");
        assert!(!updated.is_approved, "updates never approve");

        Ok(())
    }

    #[tokio::test]
    async fn vendors_cannot_touch_other_vendors_offers() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = register_vendor(&ctx, "owner", None).await?;
        let intruder = register_vendor(&ctx, "intruder", None).await?;

        let offer = create_offer(&ctx, owner, "Mine").await?;

        let update = ctx
            .offers
            .update_offer(intruder, offer.uuid, OfferUpdate::from(new_offer("Stolen")))
            .await;

        assert!(
            matches!(update, Err(OffersServiceError::NotFound)),
            "expected NotFound, got {update:?}"
        );

        let delete = ctx.offers.delete_offer(intruder, offer.uuid).await;

        assert!(
            matches!(delete, Err(OffersServiceError::NotFound)),
            "expected NotFound, got {delete:?}"
        );

        let offers = ctx.stores.get_vendor_store(owner).await?.offers;

        assert_eq!(offers.len(), 1);
        assert_eq!(offers.first().map(|o| o.title.as_str()), Some("Mine"));

        Ok(())
    }

    #[tokio::test]
    async fn delete_offer_removes_it() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = register_vendor(&ctx, "cleaner", None).await?;

        let offer = create_offer(&ctx, vendor, "Short lived").await?;

        ctx.offers.delete_offer(vendor, offer.uuid).await?;

        assert!(ctx.stores.get_vendor_store(vendor).await?.offers.is_empty());

        let again = ctx.offers.delete_offer(vendor, offer.uuid).await;

        assert!(
            matches!(again, Err(OffersServiceError::NotFound)),
            "expected NotFound, got {again:?}"
        );

        Ok(())
    }
}
