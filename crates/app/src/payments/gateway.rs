//! Payment gateway seam.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::payments::PaymentError;

/// An order created with the payment provider, awaiting payment by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOrder {
    pub id: String,
    pub amount: u64,
    pub currency: String,
}

/// What the client sends back after completing a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

#[automock]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Public key id handed to the checkout client.
    fn key_id(&self) -> String;

    /// Create an order for `amount` minor units of `currency`.
    async fn create_order(
        &self,
        amount: u64,
        currency: &str,
        receipt: &str,
    ) -> Result<PaymentOrder, PaymentError>;

    /// Check that a confirmation was signed by the provider for this order.
    fn verify_signature(&self, confirmation: &PaymentConfirmation) -> Result<(), PaymentError>;
}
