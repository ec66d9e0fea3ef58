//! Favorites Repository

use sqlx::{Postgres, Transaction, query, query_as};

use crate::domain::{
    accounts::records::UserUuid,
    offers::records::{OfferListing, OfferUuid},
    stores::records::{StoreListing, StoreUuid},
};

const DELETE_FAVORITE_OFFER_SQL: &str = include_str!("sql/delete_favorite_offer.sql");
const INSERT_FAVORITE_OFFER_SQL: &str = include_str!("sql/insert_favorite_offer.sql");
const LIST_FAVORITE_OFFERS_SQL: &str = include_str!("sql/list_favorite_offers.sql");
const DELETE_FAVORITE_STORE_SQL: &str = include_str!("sql/delete_favorite_store.sql");
const INSERT_FAVORITE_STORE_SQL: &str = include_str!("sql/insert_favorite_store.sql");
const LIST_FAVORITE_STORES_SQL: &str = include_str!("sql/list_favorite_stores.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgFavoritesRepository;

impl PgFavoritesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn delete_favorite_offer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        offer: OfferUuid,
    ) -> Result<u64, sqlx::Error> {
        let result = query(DELETE_FAVORITE_OFFER_SQL)
            .bind(user.into_uuid())
            .bind(offer.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }

    pub(crate) async fn insert_favorite_offer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        offer: OfferUuid,
    ) -> Result<(), sqlx::Error> {
        query(INSERT_FAVORITE_OFFER_SQL)
            .bind(user.into_uuid())
            .bind(offer.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn list_favorite_offers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<OfferListing>, sqlx::Error> {
        query_as::<Postgres, OfferListing>(LIST_FAVORITE_OFFERS_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn delete_favorite_store(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        store: StoreUuid,
    ) -> Result<u64, sqlx::Error> {
        let result = query(DELETE_FAVORITE_STORE_SQL)
            .bind(user.into_uuid())
            .bind(store.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }

    pub(crate) async fn insert_favorite_store(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        store: StoreUuid,
    ) -> Result<(), sqlx::Error> {
        query(INSERT_FAVORITE_STORE_SQL)
            .bind(user.into_uuid())
            .bind(store.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn list_favorite_stores(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<StoreListing>, sqlx::Error> {
        query_as::<Postgres, StoreListing>(LIST_FAVORITE_STORES_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}
