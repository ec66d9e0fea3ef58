//! Shop Review Events

use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;
use sqlx::{Postgres, Transaction};

use crate::domain::stores::records::StoreUuid;

/// Observer notified whenever the set of reviews for a store changes.
///
/// Callbacks run inside the transaction that made the change, so anything an observer
/// writes commits or rolls back together with the review itself.
#[async_trait]
pub trait ShopReviewsObserver: Debug + Send + Sync {
    /// Called after a shop review was created, edited or deleted.
    async fn shop_reviews_changed(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
    ) -> Result<(), sqlx::Error>;
}

/// Fan-out of shop review changes to every registered observer.
#[derive(Debug, Clone, Default)]
pub struct ShopReviewEvents {
    observers: Vec<Arc<dyn ShopReviewsObserver>>,
}

impl ShopReviewEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn subscribe(mut self, observer: Arc<dyn ShopReviewsObserver>) -> Self {
        self.observers.push(observer);

        self
    }

    pub(crate) async fn publish(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
    ) -> Result<(), sqlx::Error> {
        for observer in &self.observers {
            observer.shop_reviews_changed(tx, store).await?;
        }

        Ok(())
    }
}
