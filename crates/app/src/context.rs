//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        accounts::{AccountsService, PgAccountsService},
        favorites::{FavoritesService, PgFavoritesService},
        offers::{OffersService, PgOffersService},
        reviews::{PgReviewsService, ReviewsService, ShopReviewEvents},
        stores::{PgRatingAggregator, PgStoresService, StoresService},
        subscriptions::{AutoApprove, PgSubscriptionsService, SubscriptionsService},
    },
    payments::PaymentGateway,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub accounts: Arc<dyn AccountsService>,
    pub stores: Arc<dyn StoresService>,
    pub offers: Arc<dyn OffersService>,
    pub subscriptions: Arc<dyn SubscriptionsService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub favorites: Arc<dyn FavoritesService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// Pending migrations are applied before any service is built.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating fails.
    pub async fn from_database_url(
        url: &str,
        gateway: Arc<dyn PaymentGateway>,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        Ok(Self::from_db(&Db::new(pool), gateway))
    }

    /// Wire every service to one database handle.
    #[must_use]
    pub fn from_db(db: &Db, gateway: Arc<dyn PaymentGateway>) -> Self {
        let review_events =
            ShopReviewEvents::new().subscribe(Arc::new(PgRatingAggregator::new()));

        Self {
            auth: Arc::new(PgAuthService::new(db.clone())),
            accounts: Arc::new(PgAccountsService::new(db.clone())),
            stores: Arc::new(PgStoresService::new(db.clone())),
            offers: Arc::new(PgOffersService::new(db.clone(), Arc::new(AutoApprove))),
            subscriptions: Arc::new(PgSubscriptionsService::new(db.clone(), gateway)),
            reviews: Arc::new(PgReviewsService::new(db.clone(), review_events)),
            favorites: Arc::new(PgFavoritesService::new(db.clone())),
        }
    }
}
