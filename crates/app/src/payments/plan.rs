//! Subscription plan.

use jiff::SignedDuration;

/// A paid plan offered to vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionPlan {
    pub name: &'static str,
    pub description: &'static str,
    /// Price in minor currency units.
    pub amount: u64,
    pub currency: &'static str,
    pub period: SignedDuration,
}

/// The single monthly plan: 99.00 INR for 30 days.
pub const MONTHLY_PLAN: SubscriptionPlan = SubscriptionPlan {
    name: "Offora Subscription",
    description: "Monthly Subscription for AI-powered offer approvals.",
    amount: 9900,
    currency: "INR",
    period: SignedDuration::from_hours(30 * 24),
};
