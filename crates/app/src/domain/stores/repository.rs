//! Stores Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::contains_pattern,
    domain::{
        accounts::records::UserUuid,
        stores::{
            data::{NewStoreProfile, StoreQuery, StoreUpdate},
            records::{StoreCategory, StoreListing, StoreRecord, StoreUuid},
        },
    },
    geo::GeoPoint,
};

const CREATE_STORE_SQL: &str = include_str!("sql/create_store.sql");
const GET_STORE_SQL: &str = include_str!("sql/get_store.sql");
const FIND_STORE_BY_OWNER_SQL: &str = include_str!("sql/find_store_by_owner.sql");
const LIST_VISIBLE_STORES_SQL: &str = include_str!("sql/list_visible_stores.sql");
const UPDATE_STORE_SQL: &str = include_str!("sql/update_store.sql");
const SET_STORE_APPROVAL_SQL: &str = include_str!("sql/set_store_approval.sql");
const LOCK_STORE_SQL: &str = include_str!("sql/lock_store.sql");
const LIST_STORE_RATINGS_SQL: &str = include_str!("sql/list_store_ratings.sql");
const UPDATE_STORE_RATING_SQL: &str = include_str!("sql/update_store_rating.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgStoresRepository;

impl PgStoresRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_store(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
        store: &NewStoreProfile,
    ) -> Result<StoreRecord, sqlx::Error> {
        query_as::<Postgres, StoreRecord>(CREATE_STORE_SQL)
            .bind(store.uuid.into_uuid())
            .bind(owner.into_uuid())
            .bind(store.name.trim())
            .bind(store.category.as_str())
            .bind(store.address.trim())
            .bind(store.location.map(|point| point.latitude))
            .bind(store.location.map(|point| point.longitude))
            .bind(store.phone_number.trim())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_store(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        viewer: UserUuid,
        store: StoreUuid,
    ) -> Result<StoreListing, sqlx::Error> {
        query_as::<Postgres, StoreListing>(GET_STORE_SQL)
            .bind(store.into_uuid())
            .bind(viewer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_store_by_owner(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
    ) -> Result<StoreRecord, sqlx::Error> {
        query_as::<Postgres, StoreRecord>(FIND_STORE_BY_OWNER_SQL)
            .bind(owner.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Approved stores whose owner holds an active subscription, before geo narrowing.
    pub(crate) async fn list_visible_stores(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        viewer: UserUuid,
        filter: &StoreQuery,
    ) -> Result<Vec<StoreListing>, sqlx::Error> {
        query_as::<Postgres, StoreListing>(LIST_VISIBLE_STORES_SQL)
            .bind(viewer.into_uuid())
            .bind(filter.search.as_deref().map(contains_pattern))
            .bind(filter.category.map(StoreCategory::as_str))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_store(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
        update: &StoreUpdate,
    ) -> Result<StoreRecord, sqlx::Error> {
        query_as::<Postgres, StoreRecord>(UPDATE_STORE_SQL)
            .bind(store.into_uuid())
            .bind(update.name.trim())
            .bind(update.category.as_str())
            .bind(update.address.trim())
            .bind(update.location.map(|point| point.latitude))
            .bind(update.location.map(|point| point.longitude))
            .bind(update.phone_number.trim())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_store_approval(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
        approved: bool,
    ) -> Result<StoreRecord, sqlx::Error> {
        query_as::<Postgres, StoreRecord>(SET_STORE_APPROVAL_SQL)
            .bind(store.into_uuid())
            .bind(approved)
            .fetch_one(&mut **tx)
            .await
    }

    /// Take the row lock that serializes rating writers for one store.
    pub(crate) async fn lock_store(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
    ) -> Result<(), sqlx::Error> {
        query(LOCK_STORE_SQL)
            .bind(store.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn list_store_ratings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
    ) -> Result<Vec<u8>, sqlx::Error> {
        let ratings: Vec<i16> = query_scalar(LIST_STORE_RATINGS_SQL)
            .bind(store.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        ratings
            .into_iter()
            .map(|rating| {
                u8::try_from(rating).map_err(|e| sqlx::Error::ColumnDecode {
                    index: "rating".to_string(),
                    source: Box::new(e),
                })
            })
            .collect()
    }

    pub(crate) async fn update_store_rating(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
        rating: f64,
        review_count: u32,
    ) -> Result<(), sqlx::Error> {
        let review_count = i32::try_from(review_count).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        query(UPDATE_STORE_RATING_SQL)
            .bind(store.into_uuid())
            .bind(rating)
            .bind(review_count)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for StoreRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let category: String = row.try_get("category")?;
        let review_count: i32 = row.try_get("review_count")?;

        Ok(Self {
            uuid: StoreUuid::from_uuid(row.try_get("uuid")?),
            owner_uuid: UserUuid::from_uuid(row.try_get("owner_uuid")?),
            name: row.try_get("name")?,
            category: category.parse().map_err(|e| sqlx::Error::ColumnDecode {
                index: "category".to_string(),
                source: Box::new(e),
            })?,
            address: row.try_get("address")?,
            location: GeoPoint::from_columns(row.try_get("latitude")?, row.try_get("longitude")?),
            phone_number: row.try_get("phone_number")?,
            is_approved: row.try_get("is_approved")?,
            rating: row.try_get("rating")?,
            review_count: u32::try_from(review_count).map_err(|e| sqlx::Error::ColumnDecode {
                index: "review_count".to_string(),
                source: Box::new(e),
            })?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for StoreListing {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            store: StoreRecord::from_row(row)?,
            is_favorited: row.try_get("is_favorited")?,
        })
    }
}
