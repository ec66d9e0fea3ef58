//! Razorpay orders API client and payment signature verification.

use std::fmt;

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::Client;
use serde::Deserialize;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::payments::{PaymentConfirmation, PaymentError, PaymentGateway, PaymentOrder};

type HmacSha256 = Hmac<Sha256>;

/// Production Razorpay API address.
pub const DEFAULT_RAZORPAY_API_BASE: &str = "https://api.razorpay.com";

/// Razorpay API key secret. Wiped from memory on drop.
#[derive(Clone)]
pub struct RazorpayKeySecret(String);

impl RazorpayKeySecret {
    #[must_use]
    pub fn new(secret: String) -> Self {
        Self(secret)
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RazorpayKeySecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RazorpayKeySecret(**redacted**)")?;
        Ok(())
    }
}

impl Drop for RazorpayKeySecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Configuration for connecting to Razorpay.
#[derive(Debug, Clone)]
pub struct RazorpayConfig {
    /// API address, e.g. `"https://api.razorpay.com"`.
    pub api_base: String,

    /// Public key id, also handed to checkout clients.
    pub key_id: String,

    /// Private key secret, used for basic auth and signature checks.
    pub key_secret: RazorpayKeySecret,
}

/// HTTP client for the Razorpay orders API.
#[derive(Debug, Clone)]
pub struct RazorpayGateway {
    config: RazorpayConfig,
    http: Client,
}

impl RazorpayGateway {
    #[must_use]
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn mac(&self, confirmation: &PaymentConfirmation) -> Result<HmacSha256, PaymentError> {
        let mut mac = HmacSha256::new_from_slice(self.config.key_secret.as_bytes())
            .map_err(|error| PaymentError::UnexpectedResponse(error.to_string()))?;

        mac.update(confirmation.order_id.as_bytes());
        mac.update(b"|");
        mac.update(confirmation.payment_id.as_bytes());

        Ok(mac)
    }

    /// Produce the signature Razorpay would attach to this order and payment.
    #[cfg(test)]
    pub(crate) fn sign(&self, order_id: &str, payment_id: &str) -> String {
        let confirmation = PaymentConfirmation {
            order_id: order_id.to_string(),
            payment_id: payment_id.to_string(),
            signature: String::new(),
        };

        self.mac(&confirmation)
            .map(|mac| hex::encode(mac.finalize().into_bytes()))
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    id: String,
    amount: u64,
    currency: String,
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    fn key_id(&self) -> String {
        self.config.key_id.clone()
    }

    async fn create_order(
        &self,
        amount: u64,
        currency: &str,
        receipt: &str,
    ) -> Result<PaymentOrder, PaymentError> {
        let url = format!("{}/v1/orders", self.config.api_base.trim_end_matches('/'));

        let body = serde_json::json!({
            "amount": amount,
            "currency": currency,
            "receipt": receipt,
            "payment_capture": 0,
        });

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.key_id, Some(self.config.key_secret.as_str()))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(PaymentError::UnexpectedResponse(format!(
                "order request failed with status {status}: {text}"
            )));
        }

        let order: OrderResponse = response.json().await?;

        tracing::info!(order_id = %order.id, amount = order.amount, "payment order created");

        Ok(PaymentOrder {
            id: order.id,
            amount: order.amount,
            currency: order.currency,
        })
    }

    fn verify_signature(&self, confirmation: &PaymentConfirmation) -> Result<(), PaymentError> {
        let expected = hex::decode(confirmation.signature.trim())
            .map_err(|_decode| PaymentError::InvalidSignature)?;

        self.mac(confirmation)?
            .verify_slice(&expected)
            .map_err(|_mismatch| PaymentError::InvalidSignature)
    }
}
