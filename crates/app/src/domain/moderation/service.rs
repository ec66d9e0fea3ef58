//! Moderation service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        moderation::errors::ModerationServiceError,
        offers::{
            records::{OfferRecord, OfferUuid},
            repository::PgOffersRepository,
        },
        stores::{
            records::{StoreRecord, StoreUuid},
            repository::PgStoresRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgModerationService {
    db: Db,
    stores: PgStoresRepository,
    offers: PgOffersRepository,
}

impl PgModerationService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            stores: PgStoresRepository::new(),
            offers: PgOffersRepository::new(),
        }
    }
}

#[async_trait]
impl ModerationService for PgModerationService {
    async fn set_store_approval(
        &self,
        store: StoreUuid,
        approved: bool,
    ) -> Result<StoreRecord, ModerationServiceError> {
        let mut tx = self.db.begin().await?;

        let store = self.stores.set_store_approval(&mut tx, store, approved).await?;

        tx.commit().await?;

        tracing::info!(store = %store.uuid, approved, "store approval changed");

        Ok(store)
    }

    async fn set_offer_approval(
        &self,
        offer: OfferUuid,
        approved: bool,
    ) -> Result<OfferRecord, ModerationServiceError> {
        let mut tx = self.db.begin().await?;

        let offer = self.offers.set_offer_approval(&mut tx, offer, approved).await?;

        tx.commit().await?;

        tracing::info!(offer = %offer.uuid, approved, "offer approval changed");

        Ok(offer)
    }
}

#[automock]
#[async_trait]
pub trait ModerationService: Send + Sync {
    /// Approve or unapprove a store. Unapproved stores and all their offers are hidden.
    async fn set_store_approval(
        &self,
        store: StoreUuid,
        approved: bool,
    ) -> Result<StoreRecord, ModerationServiceError>;

    /// Approve or unapprove a single offer.
    async fn set_offer_approval(
        &self,
        offer: OfferUuid,
        approved: bool,
    ) -> Result<OfferRecord, ModerationServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{
        TestContext,
        helpers::{create_offer, register_vendor},
    };

    use super::*;

    #[tokio::test]
    async fn store_approval_round_trips() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = register_vendor(&ctx, "moderated", None).await?;

        let hidden = ctx.moderation.set_store_approval(vendor.store, false).await?;

        assert!(!hidden.is_approved);

        let shown = ctx.moderation.set_store_approval(vendor.store, true).await?;

        assert!(shown.is_approved);

        Ok(())
    }

    #[tokio::test]
    async fn offer_approval_overrides_the_gate() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = register_vendor(&ctx, "manual", None).await?;
        let offer = create_offer(&ctx, vendor, "Needs a human").await?;

        assert!(!offer.is_approved);

        let approved = ctx.moderation.set_offer_approval(offer.uuid, true).await?;

        assert!(approved.is_approved);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_targets_are_not_found() {
        let ctx = TestContext::new().await;

        let store = ctx.moderation.set_store_approval(StoreUuid::new(), true).await;

        assert!(
            matches!(store, Err(ModerationServiceError::NotFound)),
            "expected NotFound, got {store:?}"
        );

        let offer = ctx.moderation.set_offer_approval(OfferUuid::new(), true).await;

        assert!(
            matches!(offer, Err(ModerationServiceError::NotFound)),
            "expected NotFound, got {offer:?}"
        );
    }
}
