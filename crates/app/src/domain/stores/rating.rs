//! Store Rating Aggregation

use async_trait::async_trait;
use sqlx::{Postgres, Transaction};

use crate::domain::{
    reviews::events::ShopReviewsObserver,
    stores::{records::StoreUuid, repository::PgStoresRepository},
};

/// Mean rating and review count materialized on a store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub rating: f64,
    pub review_count: u32,
}

impl RatingSummary {
    /// Summarize a set of 1..=5 ratings. The mean is rounded to two decimals, with
    /// ties going to the even hundredth; no ratings summarize to `0.0` over zero reviews.
    #[must_use]
    pub fn from_ratings(ratings: &[u8]) -> Self {
        let review_count = u32::try_from(ratings.len()).unwrap_or(u32::MAX);

        if review_count == 0 {
            return Self {
                rating: 0.0,
                review_count,
            };
        }

        let total: u32 = ratings.iter().copied().map(u32::from).sum();
        let mean = f64::from(total) / f64::from(review_count);

        Self {
            rating: (mean * 100.0).round_ties_even() / 100.0,
            review_count,
        }
    }
}

/// Keeps `stores.rating` and `stores.review_count` in step with `shop_reviews`.
#[derive(Debug, Clone, Default)]
pub struct PgRatingAggregator {
    repository: PgStoresRepository,
}

impl PgRatingAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: PgStoresRepository::new(),
        }
    }

    /// Recompute and store the summary for one store.
    ///
    /// # Errors
    ///
    /// Returns [`sqlx::Error::RowNotFound`] if the store does not exist.
    pub async fn recompute(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
    ) -> Result<RatingSummary, sqlx::Error> {
        self.repository.lock_store(tx, store).await?;

        let ratings = self.repository.list_store_ratings(tx, store).await?;
        let summary = RatingSummary::from_ratings(&ratings);

        self.repository
            .update_store_rating(tx, store, summary.rating, summary.review_count)
            .await?;

        tracing::debug!(
            store = %store,
            rating = summary.rating,
            review_count = summary.review_count,
            "store rating recomputed"
        );

        Ok(summary)
    }
}

#[async_trait]
impl ShopReviewsObserver for PgRatingAggregator {
    async fn shop_reviews_changed(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        store: StoreUuid,
    ) -> Result<(), sqlx::Error> {
        self.recompute(tx, store).await?;

        Ok(())
    }
}
