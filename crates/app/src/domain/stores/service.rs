//! Stores service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        accounts::identity::{Caller, Vendor},
        offers::repository::PgOffersRepository,
        stores::{
            data::{StoreQuery, StoreUpdate},
            errors::StoresServiceError,
            records::{StoreListing, StoreRecord, StoreUuid, VendorStore},
            repository::PgStoresRepository,
        },
        subscriptions::repository::PgSubscriptionsRepository,
    },
    geo::LocationFilter,
};

#[derive(Debug, Clone)]
pub struct PgStoresService {
    db: Db,
    repository: PgStoresRepository,
    offers: PgOffersRepository,
    subscriptions: PgSubscriptionsRepository,
}

impl PgStoresService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgStoresRepository::new(),
            offers: PgOffersRepository::new(),
            subscriptions: PgSubscriptionsRepository::new(),
        }
    }
}

#[async_trait]
impl StoresService for PgStoresService {
    async fn list_visible_stores(
        &self,
        caller: Caller,
        query: StoreQuery,
    ) -> Result<Vec<StoreListing>, StoresServiceError> {
        if query.location == LocationFilter::Unresolvable {
            return Ok(Vec::new());
        }

        let mut tx = self.db.begin_snapshot().await?;

        let stores = self
            .repository
            .list_visible_stores(&mut tx, caller.user, &query)
            .await?;

        tx.commit().await?;

        Ok(query.location.retain(stores))
    }

    async fn get_store(
        &self,
        caller: Caller,
        store: StoreUuid,
    ) -> Result<StoreListing, StoresServiceError> {
        let mut tx = self.db.begin().await?;

        let store = self.repository.get_store(&mut tx, caller.user, store).await?;

        tx.commit().await?;

        Ok(store)
    }

    async fn get_vendor_store(&self, vendor: Vendor) -> Result<VendorStore, StoresServiceError> {
        let mut tx = self.db.begin_snapshot().await?;

        let store = self.repository.find_store_by_owner(&mut tx, vendor.user).await?;
        let offers = self.offers.list_store_offers(&mut tx, store.uuid).await?;
        let subscription = self
            .subscriptions
            .find_subscription(&mut tx, vendor.user)
            .await?;

        tx.commit().await?;

        Ok(VendorStore {
            store,
            offers,
            subscription,
        })
    }

    async fn update_vendor_store(
        &self,
        vendor: Vendor,
        update: StoreUpdate,
    ) -> Result<StoreRecord, StoresServiceError> {
        let mut tx = self.db.begin().await?;

        let store = self
            .repository
            .update_store(&mut tx, vendor.store, &update)
            .await?;

        tx.commit().await?;

        Ok(store)
    }
}

#[automock]
#[async_trait]
pub trait StoresService: Send + Sync {
    /// Approved stores of subscribed vendors, optionally narrowed by location, search or category.
    async fn list_visible_stores(
        &self,
        caller: Caller,
        query: StoreQuery,
    ) -> Result<Vec<StoreListing>, StoresServiceError>;

    /// Retrieve a single store profile.
    async fn get_store(
        &self,
        caller: Caller,
        store: StoreUuid,
    ) -> Result<StoreListing, StoresServiceError>;

    /// The vendor's own store with every offer, approved or not, and its subscription.
    async fn get_vendor_store(&self, vendor: Vendor) -> Result<VendorStore, StoresServiceError>;

    /// Replace the vendor's editable store profile.
    async fn update_vendor_store(
        &self,
        vendor: Vendor,
        update: StoreUpdate,
    ) -> Result<StoreRecord, StoresServiceError>;
}
