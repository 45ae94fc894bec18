//! Subscription and raw price records as delivered by the billing backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::SubscriptionStatus;

/// Raw price attached to a subscription.
///
/// Every field is optional because the record comes straight off the wire;
/// [`normalize_price`](super::normalize_price) decides whether it is usable.
/// Fields this crate does not model are kept in `extra` and passed through.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Price {
    /// Payment provider price id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Site-facing price id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_id: Option<String>,

    /// Amount in minor currency units (cents).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    /// ISO currency code, in any case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A billing record linking a member to a recurring price.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub status: SubscriptionStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    /// End of the current billing period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_period_end: Option<DateTime<Utc>>,

    /// Member asked to cancel; access continues until `current_period_end`.
    #[serde(default)]
    pub cancel_at_period_end: bool,
}

impl Subscription {
    /// Returns true if this subscription is the member's current one.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns true if the subscription is active but will not renew.
    pub fn is_canceling(&self) -> bool {
        self.is_active() && self.cancel_at_period_end
    }
}
