//! Member and subscription status values.
//!
//! Both enums accept any string on input: statuses the billing backend adds
//! later deserialize to `Other` and are treated as "not paying" / "not active".

use serde::{Deserialize, Serialize};

/// Billing standing of a member account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// Signed up without paying.
    #[default]
    Free,

    /// Backed by a billing subscription.
    Paid,

    /// Granted paid access without a billing subscription.
    Comped,

    /// Any status this crate does not know about.
    #[serde(other)]
    Other,
}

impl MemberStatus {
    /// Returns true if this status grants paid access.
    ///
    /// Complimentary members count as paying.
    pub fn is_paid(&self) -> bool {
        matches!(self, MemberStatus::Paid | MemberStatus::Comped)
    }

    /// Returns true for complimentary members.
    pub fn is_complimentary(&self) -> bool {
        matches!(self, MemberStatus::Comped)
    }
}

/// Status of a billing subscription, as reported by the payment provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trialing,
    PastDue,
    Unpaid,
    Canceled,
    Incomplete,
    IncompleteExpired,

    #[default]
    #[serde(other)]
    Other,
}

impl SubscriptionStatus {
    /// Returns true only for `active`; trialing or past-due subscriptions
    /// are not selected as the member's current subscription.
    pub fn is_active(&self) -> bool {
        matches!(self, SubscriptionStatus::Active)
    }
}
