//! Subscription Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use offora_app::domain::subscriptions::records::{Checkout, SubscriptionRecord};

/// Subscription Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubscriptionResponse {
    pub is_active: bool,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub updated_at: String,
}

impl From<SubscriptionRecord> for SubscriptionResponse {
    fn from(subscription: SubscriptionRecord) -> Self {
        SubscriptionResponse {
            is_active: subscription.is_active,
            start_date: subscription.start_date.map(|date| date.to_string()),
            end_date: subscription.end_date.map(|date| date.to_string()),
            updated_at: subscription.updated_at.to_string(),
        }
    }
}

/// Customer details the checkout widget is prefilled with.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutPrefill {
    pub name: String,
    pub email: String,
}

/// Everything the client needs to open the payment checkout.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    pub order_id: String,

    /// Amount in paise
    pub amount: u64,
    pub currency: String,

    /// Publishable gateway key id
    pub key: String,
    pub name: String,
    pub description: String,
    pub prefill: CheckoutPrefill,
}

impl From<Checkout> for CheckoutResponse {
    fn from(checkout: Checkout) -> Self {
        CheckoutResponse {
            order_id: checkout.order_id,
            amount: checkout.amount,
            currency: checkout.currency,
            key: checkout.key_id,
            name: checkout.name,
            description: checkout.description,
            prefill: CheckoutPrefill {
                name: checkout.prefill_name,
                email: checkout.prefill_email,
            },
        }
    }
}
