//! Page query parsing and resolution.
//!
//! A page query is the compact `"<productId>/<cadence>"` string that page
//! routing uses to point at one of a product's prices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{PriceId, ProductId, ValidationError};

use super::Site;

/// Billing cadence named in a page query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Monthly,
    Yearly,
}

impl Cadence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cadence::Monthly => "monthly",
            Cadence::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Cadence {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Cadence::Monthly),
            "yearly" => Ok(Cadence::Yearly),
            other => Err(ValidationError::unknown_value("cadence", other)),
        }
    }
}

/// A parsed `"<productId>/<cadence>"` page query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageQuery {
    product_id: ProductId,
    cadence: Cadence,
}

impl PageQuery {
    /// Parses a page query string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - The query has no `/` separator
    /// - The product id is empty
    /// - The cadence is not `monthly` or `yearly`
    pub fn parse(query: &str) -> Result<Self, ValidationError> {
        let (product_id, cadence) = query.split_once('/').ok_or_else(|| {
            ValidationError::invalid_format("page_query", "expected <productId>/<cadence>")
        })?;

        if product_id.is_empty() {
            return Err(ValidationError::empty_field("product_id"));
        }

        Ok(Self {
            product_id: ProductId::new(product_id),
            cadence: cadence.parse()?,
        })
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// Looks up the price this query points at on the given site.
    pub fn resolve(&self, site: &Site) -> Option<PriceId> {
        let product = site.product_by_id(&self.product_id)?;
        let price = match self.cadence {
            Cadence::Monthly => product.monthly_price.as_ref(),
            Cadence::Yearly => product.yearly_price.as_ref(),
        }?;
        Some(price.id.clone())
    }
}

impl fmt::Display for PageQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.product_id, self.cadence)
    }
}

impl FromStr for PageQuery {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Resolves a page query string to a price id on the site.
///
/// Malformed queries, unknown products, unknown cadences and products
/// without the requested price all yield `None`; routing then falls back to
/// the site default.
pub fn price_id_from_page_query(site: &Site, page_query: &str) -> Option<PriceId> {
    let query = match PageQuery::parse(page_query) {
        Ok(query) => query,
        Err(e) => {
            tracing::debug!(page_query, "Ignoring page query: {}", e);
            return None;
        }
    };

    let price_id = query.resolve(site);
    if price_id.is_none() {
        tracing::debug!(%query, "Page query does not match a product price");
    }
    price_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn site() -> Site {
        serde_json::from_value(json!({
            "products": [
                { "id": "product_free", "type": "free" },
                {
                    "id": "product_gold",
                    "type": "paid",
                    "monthlyPrice": { "id": "price_gold_monthly" },
                    "yearlyPrice": { "id": "price_gold_yearly" }
                },
                {
                    "id": "product_monthly_only",
                    "type": "paid",
                    "monthlyPrice": { "id": "price_mo_monthly" }
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn parses_product_and_cadence() {
        let query = PageQuery::parse("product_gold/yearly").unwrap();
        assert_eq!(query.product_id(), &ProductId::new("product_gold"));
        assert_eq!(query.cadence(), Cadence::Yearly);
        assert_eq!(query.to_string(), "product_gold/yearly");
    }

    #[test]
    fn parse_rejects_missing_separator() {
        match PageQuery::parse("product_gold").unwrap_err() {
            ValidationError::InvalidFormat { field, .. } => assert_eq!(field, "page_query"),
            other => panic!("Expected InvalidFormat error, got {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_unknown_cadence() {
        match PageQuery::parse("product_gold/weekly").unwrap_err() {
            ValidationError::UnknownValue { field, value } => {
                assert_eq!(field, "cadence");
                assert_eq!(value, "weekly");
            }
            other => panic!("Expected UnknownValue error, got {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_empty_product_id() {
        assert!(matches!(
            PageQuery::parse("/monthly"),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn resolves_yearly_price_id() {
        assert_eq!(
            price_id_from_page_query(&site(), "product_gold/yearly"),
            Some(PriceId::new("price_gold_yearly"))
        );
    }

    #[test]
    fn resolves_monthly_price_id() {
        assert_eq!(
            price_id_from_page_query(&site(), "product_gold/monthly"),
            Some(PriceId::new("price_gold_monthly"))
        );
    }

    #[test]
    fn unparsable_query_resolves_to_none() {
        assert_eq!(price_id_from_page_query(&site(), "product_gold"), None);
        assert_eq!(price_id_from_page_query(&site(), ""), None);
    }

    #[test]
    fn unknown_product_resolves_to_none() {
        assert_eq!(price_id_from_page_query(&site(), "product_silver/yearly"), None);
    }

    #[test]
    fn unknown_cadence_resolves_to_none() {
        assert_eq!(price_id_from_page_query(&site(), "product_gold/weekly"), None);
    }

    #[test]
    fn missing_price_reference_resolves_to_none() {
        assert_eq!(price_id_from_page_query(&site(), "product_monthly_only/yearly"), None);
        assert_eq!(price_id_from_page_query(&site(), "product_free/monthly"), None);
    }
}
