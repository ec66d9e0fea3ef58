//! Payments collaborator: order creation and payment signature checks.

mod errors;
mod gateway;
mod plan;
mod razorpay;

pub use errors::PaymentError;
pub use gateway::*;
pub use plan::{MONTHLY_PLAN, SubscriptionPlan};
pub use razorpay::{DEFAULT_RAZORPAY_API_BASE, RazorpayConfig, RazorpayGateway, RazorpayKeySecret};
