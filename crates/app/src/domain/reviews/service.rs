//! Reviews service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        accounts::identity::{Caller, Vendor},
        offers::records::OfferUuid,
        reviews::{
            data::{NewReview, ReviewUpdate},
            errors::ReviewsServiceError,
            events::ShopReviewEvents,
            records::{OfferReviewRecord, ShopReviewRecord, ShopReviewUuid},
            repository::PgReviewsRepository,
        },
        stores::records::StoreUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    db: Db,
    repository: PgReviewsRepository,
    events: ShopReviewEvents,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db, events: ShopReviewEvents) -> Self {
        Self {
            db,
            repository: PgReviewsRepository::new(),
            events,
        }
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn create_offer_review(
        &self,
        caller: Caller,
        offer: OfferUuid,
        review: NewReview,
    ) -> Result<OfferReviewRecord, ReviewsServiceError> {
        if !review.has_valid_rating() {
            return Err(ReviewsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let review = self
            .repository
            .create_offer_review(&mut tx, caller.user, offer, &review)
            .await?;

        tx.commit().await?;

        Ok(review)
    }

    async fn list_offer_reviews(
        &self,
        offer: OfferUuid,
    ) -> Result<Vec<OfferReviewRecord>, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let reviews = self.repository.list_offer_reviews(&mut tx, offer).await?;

        tx.commit().await?;

        Ok(reviews)
    }

    async fn create_shop_review(
        &self,
        caller: Caller,
        store: StoreUuid,
        review: NewReview,
    ) -> Result<ShopReviewRecord, ReviewsServiceError> {
        if !review.has_valid_rating() {
            return Err(ReviewsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let review = self
            .repository
            .create_shop_review(&mut tx, caller.user, store, &review)
            .await?;

        self.events.publish(&mut tx, store).await?;

        tx.commit().await?;

        Ok(review)
    }

    async fn list_shop_reviews(
        &self,
        store: StoreUuid,
    ) -> Result<Vec<ShopReviewRecord>, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let reviews = self.repository.list_shop_reviews(&mut tx, store).await?;

        tx.commit().await?;

        Ok(reviews)
    }

    async fn update_shop_review(
        &self,
        caller: Caller,
        store: StoreUuid,
        review: ShopReviewUuid,
        update: ReviewUpdate,
    ) -> Result<ShopReviewRecord, ReviewsServiceError> {
        if !update.has_valid_rating() {
            return Err(ReviewsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let review = self
            .repository
            .update_shop_review(&mut tx, caller.user, store, review, &update)
            .await?;

        self.events.publish(&mut tx, store).await?;

        tx.commit().await?;

        Ok(review)
    }

    async fn delete_shop_review(
        &self,
        caller: Caller,
        store: StoreUuid,
        review: ShopReviewUuid,
    ) -> Result<(), ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .delete_shop_review(&mut tx, caller.user, store, review)
            .await?;

        if rows_affected == 0 {
            return Err(ReviewsServiceError::NotFound);
        }

        self.events.publish(&mut tx, store).await?;

        tx.commit().await?;

        Ok(())
    }

    async fn list_vendor_shop_reviews(
        &self,
        vendor: Vendor,
    ) -> Result<Vec<ShopReviewRecord>, ReviewsServiceError> {
        self.list_shop_reviews(vendor.store).await
    }

    async fn list_vendor_offer_reviews(
        &self,
        vendor: Vendor,
    ) -> Result<Vec<OfferReviewRecord>, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let reviews = self
            .repository
            .list_store_offer_reviews(&mut tx, vendor.store)
            .await?;

        tx.commit().await?;

        Ok(reviews)
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Review an offer. Each user may review a given offer once.
    async fn create_offer_review(
        &self,
        caller: Caller,
        offer: OfferUuid,
        review: NewReview,
    ) -> Result<OfferReviewRecord, ReviewsServiceError>;

    /// Reviews of an offer, newest first.
    async fn list_offer_reviews(
        &self,
        offer: OfferUuid,
    ) -> Result<Vec<OfferReviewRecord>, ReviewsServiceError>;

    /// Review a store. Each user may review a given store once.
    async fn create_shop_review(
        &self,
        caller: Caller,
        store: StoreUuid,
        review: NewReview,
    ) -> Result<ShopReviewRecord, ReviewsServiceError>;

    /// Reviews of a store, newest first.
    async fn list_shop_reviews(
        &self,
        store: StoreUuid,
    ) -> Result<Vec<ShopReviewRecord>, ReviewsServiceError>;

    /// Edit the caller's own review of a store.
    async fn update_shop_review(
        &self,
        caller: Caller,
        store: StoreUuid,
        review: ShopReviewUuid,
        update: ReviewUpdate,
    ) -> Result<ShopReviewRecord, ReviewsServiceError>;

    /// Delete the caller's own review of a store.
    async fn delete_shop_review(
        &self,
        caller: Caller,
        store: StoreUuid,
        review: ShopReviewUuid,
    ) -> Result<(), ReviewsServiceError>;

    /// Reviews of the vendor's store.
    async fn list_vendor_shop_reviews(
        &self,
        vendor: Vendor,
    ) -> Result<Vec<ShopReviewRecord>, ReviewsServiceError>;

    /// Reviews of every offer in the vendor's store.
    async fn list_vendor_offer_reviews(
        &self,
        vendor: Vendor,
    ) -> Result<Vec<OfferReviewRecord>, ReviewsServiceError>;
}
