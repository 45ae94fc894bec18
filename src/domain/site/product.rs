//! Products (tiers) configured on a site.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PriceId, ProductId};

/// Whether a product is the free tier or a paid tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Free,
    Paid,

    /// Any product type this crate does not know about; counted as neither
    /// free nor paid.
    #[serde(other)]
    Other,
}

/// Reference to one of a product's recurring prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPrice {
    pub id: PriceId,

    /// Amount in minor currency units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// A purchasable access level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub product_type: ProductType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_price: Option<ProductPrice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yearly_price: Option<ProductPrice>,
}

impl Product {
    pub fn is_free(&self) -> bool {
        self.product_type == ProductType::Free
    }

    pub fn is_paid(&self) -> bool {
        self.product_type == ProductType::Paid
    }

    /// Returns true if either recurring price carries the given id.
    pub fn has_price(&self, price_id: &PriceId) -> bool {
        [&self.monthly_price, &self.yearly_price]
            .into_iter()
            .flatten()
            .any(|price| &price.id == price_id)
    }
}
