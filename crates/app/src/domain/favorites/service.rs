//! Favorites service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        accounts::identity::Caller,
        favorites::{
            errors::FavoritesServiceError, records::FavoriteToggle,
            repository::PgFavoritesRepository,
        },
        offers::records::{OfferListing, OfferUuid},
        stores::records::{StoreListing, StoreUuid},
    },
};

#[derive(Debug, Clone)]
pub struct PgFavoritesService {
    db: Db,
    repository: PgFavoritesRepository,
}

impl PgFavoritesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgFavoritesRepository::new(),
        }
    }
}

#[async_trait]
impl FavoritesService for PgFavoritesService {
    async fn toggle_offer_favorite(
        &self,
        caller: Caller,
        offer: OfferUuid,
    ) -> Result<FavoriteToggle, FavoritesServiceError> {
        let mut tx = self.db.begin().await?;

        let removed = self
            .repository
            .delete_favorite_offer(&mut tx, caller.user, offer)
            .await?;

        let toggle = if removed > 0 {
            FavoriteToggle::Unfavorited
        } else {
            self.repository
                .insert_favorite_offer(&mut tx, caller.user, offer)
                .await?;

            FavoriteToggle::Favorited
        };

        tx.commit().await?;

        Ok(toggle)
    }

    async fn toggle_store_favorite(
        &self,
        caller: Caller,
        store: StoreUuid,
    ) -> Result<FavoriteToggle, FavoritesServiceError> {
        let mut tx = self.db.begin().await?;

        let removed = self
            .repository
            .delete_favorite_store(&mut tx, caller.user, store)
            .await?;

        let toggle = if removed > 0 {
            FavoriteToggle::Unfavorited
        } else {
            self.repository
                .insert_favorite_store(&mut tx, caller.user, store)
                .await?;

            FavoriteToggle::Favorited
        };

        tx.commit().await?;

        Ok(toggle)
    }

    async fn list_favorite_offers(
        &self,
        caller: Caller,
    ) -> Result<Vec<OfferListing>, FavoritesServiceError> {
        let mut tx = self.db.begin().await?;

        let offers = self
            .repository
            .list_favorite_offers(&mut tx, caller.user)
            .await?;

        tx.commit().await?;

        Ok(offers)
    }

    async fn list_favorite_stores(
        &self,
        caller: Caller,
    ) -> Result<Vec<StoreListing>, FavoritesServiceError> {
        let mut tx = self.db.begin().await?;

        let stores = self
            .repository
            .list_favorite_stores(&mut tx, caller.user)
            .await?;

        tx.commit().await?;

        Ok(stores)
    }
}

#[automock]
#[async_trait]
pub trait FavoritesService: Send + Sync {
    /// Add the offer to the caller's favorites, or remove it if already there.
    async fn toggle_offer_favorite(
        &self,
        caller: Caller,
        offer: OfferUuid,
    ) -> Result<FavoriteToggle, FavoritesServiceError>;

    /// Add the store to the caller's favorites, or remove it if already there.
    async fn toggle_store_favorite(
        &self,
        caller: Caller,
        store: StoreUuid,
    ) -> Result<FavoriteToggle, FavoritesServiceError>;

    /// The caller's favorite offers, most recently favorited first.
    async fn list_favorite_offers(
        &self,
        caller: Caller,
    ) -> Result<Vec<OfferListing>, FavoritesServiceError>;

    /// The caller's favorite stores, most recently favorited first.
    async fn list_favorite_stores(
        &self,
        caller: Caller,
    ) -> Result<Vec<StoreListing>, FavoritesServiceError>;
}
