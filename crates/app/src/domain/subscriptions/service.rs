//! Subscriptions service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        accounts::{identity::Vendor, repository::PgAccountsRepository},
        offers::repository::PgOffersRepository,
        subscriptions::{
            errors::SubscriptionsServiceError,
            records::{Activation, Checkout, SubscriptionRecord},
            repository::PgSubscriptionsRepository,
        },
    },
    payments::{MONTHLY_PLAN, PaymentConfirmation, PaymentGateway, SubscriptionPlan},
};

#[derive(Clone)]
pub struct PgSubscriptionsService {
    db: Db,
    repository: PgSubscriptionsRepository,
    offers: PgOffersRepository,
    accounts: PgAccountsRepository,
    gateway: Arc<dyn PaymentGateway>,
    plan: SubscriptionPlan,
}

impl PgSubscriptionsService {
    #[must_use]
    pub fn new(db: Db, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            db,
            repository: PgSubscriptionsRepository::new(),
            offers: PgOffersRepository::new(),
            accounts: PgAccountsRepository::new(),
            gateway,
            plan: MONTHLY_PLAN,
        }
    }
}

impl fmt::Debug for PgSubscriptionsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgSubscriptionsService")
            .field("db", &self.db)
            .field("plan", &self.plan)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SubscriptionsService for PgSubscriptionsService {
    async fn start_checkout(&self, vendor: Vendor) -> Result<Checkout, SubscriptionsServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.accounts.get_user(&mut tx, vendor.user).await?;

        tx.commit().await?;

        let receipt = format!("sub_{}", vendor.user.into_uuid().simple());

        let order = self
            .gateway
            .create_order(self.plan.amount, self.plan.currency, &receipt)
            .await?;

        Ok(Checkout {
            order_id: order.id,
            amount: order.amount,
            currency: order.currency,
            key_id: self.gateway.key_id(),
            name: self.plan.name.to_string(),
            description: self.plan.description.to_string(),
            prefill_name: user.username,
            prefill_email: user.email,
        })
    }

    async fn confirm_payment(
        &self,
        vendor: Vendor,
        confirmation: PaymentConfirmation,
    ) -> Result<Activation, SubscriptionsServiceError> {
        if let Err(error) = self.gateway.verify_signature(&confirmation) {
            tracing::warn!(
                vendor = %vendor.user,
                order_id = %confirmation.order_id,
                "payment signature rejected"
            );

            return Err(error.into());
        }

        let start_date = Timestamp::now();
        let end_date = start_date
            .checked_add(self.plan.period)
            .map_err(SubscriptionsServiceError::PeriodOverflow)?;

        let mut tx = self.db.begin().await?;

        let subscription = self
            .repository
            .activate_subscription(&mut tx, vendor.user, start_date, end_date)
            .await?;

        let approved_offers = self
            .offers
            .approve_pending_offers(&mut tx, vendor.store)
            .await?;

        tx.commit().await?;

        tracing::info!(
            vendor = %vendor.user,
            store = %vendor.store,
            order_id = %confirmation.order_id,
            approved_offers,
            "subscription activated"
        );

        Ok(Activation {
            subscription,
            approved_offers,
        })
    }

    async fn get_subscription(
        &self,
        vendor: Vendor,
    ) -> Result<Option<SubscriptionRecord>, SubscriptionsServiceError> {
        let mut tx = self.db.begin().await?;

        let subscription = self.repository.find_subscription(&mut tx, vendor.user).await?;

        tx.commit().await?;

        Ok(subscription)
    }
}

#[automock]
#[async_trait]
pub trait SubscriptionsService: Send + Sync {
    /// Create a payment order for the monthly plan.
    async fn start_checkout(&self, vendor: Vendor) -> Result<Checkout, SubscriptionsServiceError>;

    /// Verify a completed payment, then activate the subscription for a fresh 30 day
    /// window and approve every pending offer of the vendor's store, atomically.
    async fn confirm_payment(
        &self,
        vendor: Vendor,
        confirmation: PaymentConfirmation,
    ) -> Result<Activation, SubscriptionsServiceError>;

    /// The vendor's subscription, if one was ever activated.
    async fn get_subscription(
        &self,
        vendor: Vendor,
    ) -> Result<Option<SubscriptionRecord>, SubscriptionsServiceError>;
}
