//! Member record and the queries that classify it.
//!
//! Every query takes `Option<&Member>`: an absent member is a logged-out
//! visitor, which is an ordinary state rather than an error.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::MemberUuid;
use crate::domain::site::{Product, Site};

use super::{normalize_price, MemberStatus, NormalizedPrice, Subscription};

/// A site member account.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Member {
    /// Unparsable values deserialize to `None`.
    #[serde(
        default,
        deserialize_with = "MemberUuid::deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub uuid: Option<MemberUuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub status: MemberStatus,

    /// `None` when the record carries no subscriptions field at all,
    /// which is distinct from an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Vec<Subscription>>,
}

/// Outcome of selecting a member's current subscription.
///
/// `Missing` means there is definitively no subscription to show (free UI).
/// `Implicit` means paid access was granted without a billing record, as for
/// complimentary members, so there is nothing to bill but access is paid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveSubscription<'a> {
    Missing,
    Implicit,
    Found(&'a Subscription),
}

impl<'a> ActiveSubscription<'a> {
    /// Returns the subscription when one was found.
    pub fn subscription(&self) -> Option<&'a Subscription> {
        match self {
            ActiveSubscription::Found(sub) => Some(sub),
            ActiveSubscription::Missing | ActiveSubscription::Implicit => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ActiveSubscription::Missing)
    }

    pub fn is_implicit(&self) -> bool {
        matches!(self, ActiveSubscription::Implicit)
    }
}

impl Member {
    pub fn is_paid(&self) -> bool {
        self.status.is_paid()
    }

    pub fn is_complimentary(&self) -> bool {
        self.status.is_complimentary()
    }

    /// Selects the member's current subscription.
    ///
    /// The first `active` entry in list order wins. Without one, a paying
    /// member with no subscription records is an implicit grant; any other
    /// member (free, or only canceled history) has none.
    pub fn active_subscription(&self) -> ActiveSubscription<'_> {
        let subscriptions = self.subscriptions.as_deref().unwrap_or_default();

        if let Some(sub) = subscriptions.iter().find(|sub| sub.is_active()) {
            return ActiveSubscription::Found(sub);
        }

        if subscriptions.is_empty() && self.is_paid() {
            ActiveSubscription::Implicit
        } else {
            ActiveSubscription::Missing
        }
    }
}

/// Returns true if the member has paid access. Complimentary members count.
pub fn is_paid_member(member: Option<&Member>) -> bool {
    member.map(Member::is_paid).unwrap_or(false)
}

/// Returns true if the member is complimentary, with or without a subscription.
pub fn is_complimentary_member(member: Option<&Member>) -> bool {
    member.map(Member::is_complimentary).unwrap_or(false)
}

/// Selects the member's current subscription; a logged-out visitor has none.
pub fn active_subscription(member: Option<&Member>) -> ActiveSubscription<'_> {
    member
        .map(Member::active_subscription)
        .unwrap_or(ActiveSubscription::Missing)
}

/// Returns the member's name, or an empty string when logged out or unnamed.
pub fn member_name(member: Option<&Member>) -> String {
    member.and_then(|m| m.name.clone()).unwrap_or_default()
}

/// Returns the display price of the member's current subscription.
pub fn member_active_price(member: Option<&Member>) -> Option<NormalizedPrice> {
    normalize_price(active_subscription(member).subscription())
}

/// Returns the site product the member's current subscription is billed under.
pub fn member_active_product<'s>(site: &'s Site, member: Option<&Member>) -> Option<&'s Product> {
    let price = member_active_price(member)?;
    site.product_for_price_id(price.id.as_ref()?)
}
