//! Subscription Records

use jiff::Timestamp;

use crate::domain::accounts::records::UserUuid;

/// Subscription Record, one per shop owner.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionRecord {
    pub shop_owner_uuid: UserUuid,
    pub is_active: bool,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub updated_at: Timestamp,
}

impl SubscriptionRecord {
    /// Active and not yet past its end date at `now`.
    #[must_use]
    pub fn is_current(&self, now: Timestamp) -> bool {
        self.is_active && self.end_date.is_some_and(|end_date| end_date >= now)
    }
}

/// Checkout details handed to the payment client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub order_id: String,
    pub amount: u64,
    pub currency: String,
    pub key_id: String,
    pub name: String,
    pub description: String,
    pub prefill_name: String,
    pub prefill_email: String,
}

/// Result of a confirmed payment.
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    pub subscription: SubscriptionRecord,
    /// Number of pending offers approved as part of the activation.
    pub approved_offers: u64,
}
