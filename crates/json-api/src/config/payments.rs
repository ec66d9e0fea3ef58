//! Payments Config

use clap::Args;

use offora_app::payments::{
    DEFAULT_RAZORPAY_API_BASE, RazorpayConfig, RazorpayGateway, RazorpayKeySecret,
};

/// Razorpay settings.
#[derive(Debug, Args)]
pub struct PaymentsConfig {
    /// Razorpay public key id
    #[arg(long, env = "RAZORPAY_KEY_ID")]
    pub razorpay_key_id: String,

    /// Razorpay key secret
    #[arg(long, env = "RAZORPAY_KEY_SECRET", hide_env_values = true)]
    pub razorpay_key_secret: String,

    /// Razorpay API base address
    #[arg(long, env = "RAZORPAY_API_BASE", default_value = DEFAULT_RAZORPAY_API_BASE)]
    pub razorpay_api_base: String,
}

impl PaymentsConfig {
    /// Build the payment gateway client.
    #[must_use]
    pub fn gateway(&self) -> RazorpayGateway {
        RazorpayGateway::new(RazorpayConfig {
            api_base: self.razorpay_api_base.clone(),
            key_id: self.razorpay_key_id.clone(),
            key_secret: RazorpayKeySecret::new(self.razorpay_key_secret.clone()),
        })
    }
}
