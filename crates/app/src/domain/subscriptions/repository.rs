//! Subscriptions Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{accounts::records::UserUuid, subscriptions::records::SubscriptionRecord};

const FIND_SUBSCRIPTION_SQL: &str = include_str!("sql/find_subscription.sql");
const FIND_SUBSCRIPTION_FOR_SHARE_SQL: &str = include_str!("sql/find_subscription_for_share.sql");
const ACTIVATE_SUBSCRIPTION_SQL: &str = include_str!("sql/activate_subscription.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSubscriptionsRepository;

impl PgSubscriptionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_subscription(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
    ) -> Result<Option<SubscriptionRecord>, sqlx::Error> {
        query_as::<Postgres, SubscriptionRecord>(FIND_SUBSCRIPTION_SQL)
            .bind(owner.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Read the subscription and hold a share lock on it until the transaction ends, so an
    /// activation cannot commit in between.
    pub(crate) async fn find_subscription_for_share(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
    ) -> Result<Option<SubscriptionRecord>, sqlx::Error> {
        query_as::<Postgres, SubscriptionRecord>(FIND_SUBSCRIPTION_FOR_SHARE_SQL)
            .bind(owner.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn activate_subscription(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
        start_date: Timestamp,
        end_date: Timestamp,
    ) -> Result<SubscriptionRecord, sqlx::Error> {
        query_as::<Postgres, SubscriptionRecord>(ACTIVATE_SUBSCRIPTION_SQL)
            .bind(owner.into_uuid())
            .bind(SqlxTimestamp::from(start_date))
            .bind(SqlxTimestamp::from(end_date))
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for SubscriptionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            shop_owner_uuid: UserUuid::from_uuid(row.try_get("shop_owner_uuid")?),
            is_active: row.try_get("is_active")?,
            start_date: row
                .try_get::<Option<SqlxTimestamp>, _>("start_date")?
                .map(SqlxTimestamp::to_jiff),
            end_date: row
                .try_get::<Option<SqlxTimestamp>, _>("end_date")?
                .map(SqlxTimestamp::to_jiff),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
