//! Subscription Requests

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use offora_app::payments::PaymentConfirmation;

/// Fields the checkout widget hands back once the vendor has paid.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

impl From<VerifyPaymentRequest> for PaymentConfirmation {
    fn from(request: VerifyPaymentRequest) -> Self {
        PaymentConfirmation {
            order_id: request.razorpay_order_id,
            payment_id: request.razorpay_payment_id,
            signature: request.razorpay_signature,
        }
    }
}
