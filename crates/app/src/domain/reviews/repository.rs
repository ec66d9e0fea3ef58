//! Reviews Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    accounts::records::UserUuid,
    offers::records::OfferUuid,
    reviews::{
        data::{NewReview, ReviewUpdate},
        records::{OfferReviewRecord, OfferReviewUuid, ShopReviewRecord, ShopReviewUuid},
    },
    stores::records::StoreUuid,
};

const CREATE_OFFER_REVIEW_SQL: &str = include_str!("sql/create_offer_review.sql");
const LIST_OFFER_REVIEWS_SQL: &str = include_str!("sql/list_offer_reviews.sql");
const LIST_STORE_OFFER_REVIEWS_SQL: &str = include_str!("sql/list_store_offer_reviews.sql");
const CREATE_SHOP_REVIEW_SQL: &str = include_str!("sql/create_shop_review.sql");
const LIST_SHOP_REVIEWS_SQL: &str = include_str!("sql/list_shop_reviews.sql");
const UPDATE_SHOP_REVIEW_SQL: &str = include_str!("sql/update_shop_review.sql");
const DELETE_SHOP_REVIEW_SQL: &str = include_str!("sql/delete_shop_review.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReviewsRepository;

impl PgReviewsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_offer_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        author: UserUuid,
        offer: OfferUuid,
        review: &NewReview,
    ) -> Result<OfferReviewRecord, sqlx::Error> {
        query_as::<Postgres, OfferReviewRecord>(CREATE_OFFER_REVIEW_SQL)
            .bind(OfferReviewUuid::new().into_uuid())
            .bind(offer.into_uuid())
            .bind(author.into_uuid())
            .bind(i16::from(review.rating))
            .bind(review.comment.trim())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_offer_reviews(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        offer: OfferUuid,
    ) -> Result<Vec<OfferReviewRecord>, sqlx::Error> {
        query_as::<Postgres, OfferReviewRecord>(LIST_OFFER_REVIEWS_SQL)
            .bind(offer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Reviews left on any offer of the given store.
    pub(crate) async fn list_store_offer_reviews(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
    ) -> Result<Vec<OfferReviewRecord>, sqlx::Error> {
        query_as::<Postgres, OfferReviewRecord>(LIST_STORE_OFFER_REVIEWS_SQL)
            .bind(store.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_shop_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        author: UserUuid,
        store: StoreUuid,
        review: &NewReview,
    ) -> Result<ShopReviewRecord, sqlx::Error> {
        query_as::<Postgres, ShopReviewRecord>(CREATE_SHOP_REVIEW_SQL)
            .bind(ShopReviewUuid::new().into_uuid())
            .bind(store.into_uuid())
            .bind(author.into_uuid())
            .bind(i16::from(review.rating))
            .bind(review.comment.trim())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_shop_reviews(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
    ) -> Result<Vec<ShopReviewRecord>, sqlx::Error> {
        query_as::<Postgres, ShopReviewRecord>(LIST_SHOP_REVIEWS_SQL)
            .bind(store.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Edit a review in place. Only matches the author's own review on that store.
    pub(crate) async fn update_shop_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        author: UserUuid,
        store: StoreUuid,
        review: ShopReviewUuid,
        update: &ReviewUpdate,
    ) -> Result<ShopReviewRecord, sqlx::Error> {
        query_as::<Postgres, ShopReviewRecord>(UPDATE_SHOP_REVIEW_SQL)
            .bind(review.into_uuid())
            .bind(store.into_uuid())
            .bind(author.into_uuid())
            .bind(i16::from(update.rating))
            .bind(update.comment.trim())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_shop_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        author: UserUuid,
        store: StoreUuid,
        review: ShopReviewUuid,
    ) -> Result<u64, sqlx::Error> {
        let result = query(DELETE_SHOP_REVIEW_SQL)
            .bind(review.into_uuid())
            .bind(store.into_uuid())
            .bind(author.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }
}

fn decode_rating(row: &PgRow) -> sqlx::Result<u8> {
    let rating: i16 = row.try_get("rating")?;

    u8::try_from(rating).map_err(|e| sqlx::Error::ColumnDecode {
        index: "rating".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for OfferReviewRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OfferReviewUuid::from_uuid(row.try_get("uuid")?),
            offer_uuid: OfferUuid::from_uuid(row.try_get("offer_uuid")?),
            offer_title: row.try_get("offer_title")?,
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            username: row.try_get("username")?,
            rating: decode_rating(row)?,
            comment: row.try_get("comment")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ShopReviewRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ShopReviewUuid::from_uuid(row.try_get("uuid")?),
            store_uuid: StoreUuid::from_uuid(row.try_get("store_uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            username: row.try_get("username")?,
            rating: decode_rating(row)?,
            comment: row.try_get("comment")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
