//! Promotional offer records.
//!
//! Expiry is computed upstream and folded into `status`; there is no time
//! window logic here.

use serde::{Deserialize, Serialize};

use crate::domain::currency::format_amount;
use crate::domain::foundation::ProductId;

/// Lifecycle status of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Active,
    Archived,

    #[default]
    #[serde(other)]
    Other,
}

/// How the offer discounts the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferType {
    /// `amount` is a percentage.
    Percent,
    /// `amount` is in minor units of `currency`.
    Fixed,
    /// `amount` is a number of free trial days.
    Trial,
}

/// Billing cadence the offer applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferCadence {
    Month,
    Year,
}

/// Product an offer is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferTier {
    pub id: ProductId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A promotional discount.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub status: OfferStatus,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub offer_type: Option<OfferType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<OfferCadence>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<OfferTier>,
}

impl Offer {
    pub fn is_active(&self) -> bool {
        self.status == OfferStatus::Active
    }

    /// Human-readable size of the discount: `20%`, `$5` or `14 days`.
    ///
    /// Returns `None` when the type or amount is missing, or a fixed offer
    /// has no currency.
    pub fn off_amount(&self) -> Option<String> {
        let amount = self.amount?;
        match self.offer_type? {
            OfferType::Percent => Some(format!("{}%", amount)),
            OfferType::Fixed => Some(format_amount(self.currency.as_deref()?, amount)),
            OfferType::Trial if amount == 1 => Some("1 day".to_string()),
            OfferType::Trial => Some(format!("{} days", amount)),
        }
    }
}

/// Returns true only for offers whose status is `active`.
pub fn is_active_offer(offer: &Offer) -> bool {
    offer.is_active()
}

/// Returns the human-readable discount of an offer.
pub fn offer_off_amount(offer: &Offer) -> Option<String> {
    offer.off_amount()
}
