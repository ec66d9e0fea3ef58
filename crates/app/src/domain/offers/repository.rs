//! Offers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::contains_pattern,
    domain::{
        accounts::records::UserUuid,
        offers::{
            data::{NewOffer, OfferQuery, OfferUpdate},
            records::{OfferListing, OfferRecord, OfferUuid},
        },
        stores::records::{StoreCategory, StoreUuid},
    },
    geo::GeoPoint,
};

const CREATE_OFFER_SQL: &str = include_str!("sql/create_offer.sql");
const GET_VISIBLE_OFFER_SQL: &str = include_str!("sql/get_visible_offer.sql");
const LIST_VISIBLE_OFFERS_SQL: &str = include_str!("sql/list_visible_offers.sql");
const LIST_STORE_OFFERS_SQL: &str = include_str!("sql/list_store_offers.sql");
const UPDATE_OFFER_SQL: &str = include_str!("sql/update_offer.sql");
const DELETE_OFFER_SQL: &str = include_str!("sql/delete_offer.sql");
const APPROVE_PENDING_OFFERS_SQL: &str = include_str!("sql/approve_pending_offers.sql");
const SET_OFFER_APPROVAL_SQL: &str = include_str!("sql/set_offer_approval.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOffersRepository;

impl PgOffersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_offer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
        offer: &NewOffer,
        approved: bool,
    ) -> Result<OfferRecord, sqlx::Error> {
        query_as::<Postgres, OfferRecord>(CREATE_OFFER_SQL)
            .bind(offer.uuid.into_uuid())
            .bind(store.into_uuid())
            .bind(offer.title.trim())
            .bind(&offer.description)
            .bind(encode_price(offer.original_price, "original_price")?)
            .bind(encode_price(offer.discounted_price, "discounted_price")?)
            .bind(offer.discount_percentage.map(i16::from))
            .bind(offer.image_url.as_deref())
            .bind(SqlxTimestamp::from(offer.start_time))
            .bind(SqlxTimestamp::from(offer.end_time))
            .bind(approved)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_visible_offer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        viewer: UserUuid,
        offer: OfferUuid,
    ) -> Result<OfferListing, sqlx::Error> {
        query_as::<Postgres, OfferListing>(GET_VISIBLE_OFFER_SQL)
            .bind(offer.into_uuid())
            .bind(viewer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Approved, active offers of approved, subscribed stores, before geo narrowing.
    pub(crate) async fn list_visible_offers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        viewer: UserUuid,
        filter: &OfferQuery,
    ) -> Result<Vec<OfferListing>, sqlx::Error> {
        query_as::<Postgres, OfferListing>(LIST_VISIBLE_OFFERS_SQL)
            .bind(viewer.into_uuid())
            .bind(filter.store.map(StoreUuid::into_uuid))
            .bind(filter.search.as_deref().map(contains_pattern))
            .bind(filter.category.map(StoreCategory::as_str))
            .fetch_all(&mut **tx)
            .await
    }

    /// Every offer a store has posted, pending ones included.
    pub(crate) async fn list_store_offers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
    ) -> Result<Vec<OfferRecord>, sqlx::Error> {
        query_as::<Postgres, OfferRecord>(LIST_STORE_OFFERS_SQL)
            .bind(store.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_offer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
        offer: OfferUuid,
        update: &OfferUpdate,
    ) -> Result<OfferRecord, sqlx::Error> {
        query_as::<Postgres, OfferRecord>(UPDATE_OFFER_SQL)
            .bind(offer.into_uuid())
            .bind(store.into_uuid())
            .bind(update.title.trim())
            .bind(&update.description)
            .bind(encode_price(update.original_price, "original_price")?)
            .bind(encode_price(update.discounted_price, "discounted_price")?)
            .bind(update.discount_percentage.map(i16::from))
            .bind(update.image_url.as_deref())
            .bind(SqlxTimestamp::from(update.start_time))
            .bind(SqlxTimestamp::from(update.end_time))
            .bind(update.is_active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_offer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
        offer: OfferUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_OFFER_SQL)
            .bind(offer.into_uuid())
            .bind(store.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Flip every pending offer of a store to approved. Returns how many changed.
    pub(crate) async fn approve_pending_offers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(APPROVE_PENDING_OFFERS_SQL)
            .bind(store.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn set_offer_approval(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        offer: OfferUuid,
        approved: bool,
    ) -> Result<OfferRecord, sqlx::Error> {
        query_as::<Postgres, OfferRecord>(SET_OFFER_APPROVAL_SQL)
            .bind(offer.into_uuid())
            .bind(approved)
            .fetch_one(&mut **tx)
            .await
    }
}

fn encode_price(price: Option<u64>, column: &str) -> Result<Option<i64>, sqlx::Error> {
    price
        .map(i64::try_from)
        .transpose()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(e),
        })
}

fn decode_column<T, U>(column: &str, value: U) -> sqlx::Result<T>
where
    T: TryFrom<U>,
    T::Error: std::error::Error + Send + Sync + 'static,
{
    T::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for OfferRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let original_price: Option<i64> = row.try_get("original_price")?;
        let discounted_price: Option<i64> = row.try_get("discounted_price")?;
        let discount_percentage: Option<i16> = row.try_get("discount_percentage")?;

        Ok(Self {
            uuid: OfferUuid::from_uuid(row.try_get("uuid")?),
            store_uuid: StoreUuid::from_uuid(row.try_get("store_uuid")?),
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            original_price: original_price
                .map(|price| decode_column("original_price", price))
                .transpose()?,
            discounted_price: discounted_price
                .map(|price| decode_column("discounted_price", price))
                .transpose()?,
            discount_percentage: discount_percentage
                .map(|percentage| decode_column("discount_percentage", percentage))
                .transpose()?,
            image_url: row.try_get("image_url")?,
            start_time: row.try_get::<SqlxTimestamp, _>("start_time")?.to_jiff(),
            end_time: row.try_get::<SqlxTimestamp, _>("end_time")?.to_jiff(),
            is_active: row.try_get("is_active")?,
            is_approved: row.try_get("is_approved")?,
            views: decode_column("views", row.try_get::<i64, _>("views")?)?,
            likes: decode_column("likes", row.try_get::<i64, _>("likes")?)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OfferListing {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            offer: OfferRecord::from_row(row)?,
            store_name: row.try_get("store_name")?,
            store_address: row.try_get("store_address")?,
            store_phone_number: row.try_get("store_phone_number")?,
            store_rating: row.try_get("store_rating")?,
            store_review_count: decode_column(
                "store_review_count",
                row.try_get::<i32, _>("store_review_count")?,
            )?,
            store_location: GeoPoint::from_columns(
                row.try_get("latitude")?,
                row.try_get("longitude")?,
            ),
            is_favorited: row.try_get("is_favorited")?,
        })
    }
}
