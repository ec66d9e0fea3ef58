//! Subscription gate: decides whether a new offer goes live immediately.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use thiserror::Error;

use crate::domain::{offers::data::NewOffer, subscriptions::records::SubscriptionRecord};

/// Outcome of screening an offer on behalf of a subscribed vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreeningDecision {
    Approve,
    Hold,
}

#[derive(Debug, Error)]
#[error("offer screening failed: {0}")]
pub struct ScreeningError(pub String);

/// Automated review applied to offers from subscribed vendors.
#[automock]
#[async_trait]
pub trait OfferScreening: Send + Sync {
    async fn screen(&self, offer: &NewOffer) -> Result<ScreeningDecision, ScreeningError>;
}

/// Screening policy that approves everything it is shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoApprove;

#[async_trait]
impl OfferScreening for AutoApprove {
    async fn screen(&self, _offer: &NewOffer) -> Result<ScreeningDecision, ScreeningError> {
        Ok(ScreeningDecision::Approve)
    }
}

/// Approval state a new offer is inserted with.
///
/// Offers from vendors without a current subscription always start pending; screening is
/// only consulted for subscribed vendors.
///
/// # Errors
///
/// Returns the screening error unchanged. Nothing may be written when this fails.
pub async fn initial_approval(
    subscription: Option<&SubscriptionRecord>,
    now: Timestamp,
    screening: &dyn OfferScreening,
    offer: &NewOffer,
) -> Result<bool, ScreeningError> {
    if !subscription.is_some_and(|subscription| subscription.is_current(now)) {
        return Ok(false);
    }

    let decision = screening.screen(offer).await?;

    Ok(decision == ScreeningDecision::Approve)
}
