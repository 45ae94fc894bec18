//! Site configuration and the product queries over it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{PriceId, ProductId};

use super::Product;

/// Who may sign up as a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignupAccess {
    /// Anyone can sign up.
    #[default]
    All,
    /// Members join by invitation only.
    Invite,
    /// Memberships are disabled.
    None,
    /// Any access mode this crate does not know about.
    #[serde(other)]
    Other,
}

/// Site-level membership configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Site {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Products in display order.
    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub members_signup_access: SignupAccess,
}

impl Site {
    pub fn is_invite_only(&self) -> bool {
        self.members_signup_access == SignupAccess::Invite
    }

    pub fn is_signup_allowed(&self) -> bool {
        self.members_signup_access == SignupAccess::All
    }

    /// Existing members can sign in unless memberships are disabled.
    pub fn is_signin_allowed(&self) -> bool {
        self.members_signup_access != SignupAccess::None
    }

    /// Paid products in display order.
    pub fn paid_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|product| product.is_paid())
    }

    /// Returns true if more than one distinct paid product exists.
    ///
    /// The free tier never counts, so one free plus one paid tier is a
    /// single-tier site.
    pub fn has_multiple_products(&self) -> bool {
        let distinct: HashSet<&ProductId> = self.paid_products().map(|product| &product.id).collect();
        distinct.len() > 1
    }

    /// First free product, if the site has one.
    pub fn free_product(&self) -> Option<&Product> {
        self.products.iter().find(|product| product.is_free())
    }

    pub fn product_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Product offering the given monthly or yearly price.
    pub fn product_for_price_id(&self, price_id: &PriceId) -> Option<&Product> {
        self.products.iter().find(|product| product.has_price(price_id))
    }
}

/// Returns true if the site only accepts members by invitation.
pub fn is_invite_only_site(site: &Site) -> bool {
    site.is_invite_only()
}

/// Returns true if the site has more than one paid product.
pub fn has_multiple_products(site: &Site) -> bool {
    site.has_multiple_products()
}

/// Returns the site's free product, if any.
pub fn free_product(site: &Site) -> Option<&Product> {
    site.free_product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::site::ProductType;
    use serde_json::json;

    fn single_tier_site(access: &str) -> Site {
        serde_json::from_value(json!({
            "title": "The Blueprint",
            "members_signup_access": access,
            "products": [
                { "id": "product_free", "name": "Free", "type": "free" },
                {
                    "id": "product_gold",
                    "name": "Gold",
                    "type": "paid",
                    "monthlyPrice": { "id": "price_gold_monthly" },
                    "yearlyPrice": { "id": "price_gold_yearly" }
                }
            ]
        }))
        .unwrap()
    }

    fn multiple_tier_site() -> Site {
        serde_json::from_value(json!({
            "products": [
                { "id": "product_free", "type": "free" },
                { "id": "product_bronze", "type": "paid" },
                { "id": "product_silver", "type": "paid" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn invite_only_site() {
        assert!(is_invite_only_site(&single_tier_site("invite")));
    }

    #[test]
    fn open_site_is_not_invite_only() {
        assert!(!is_invite_only_site(&single_tier_site("all")));
        assert!(!is_invite_only_site(&single_tier_site("none")));
    }

    #[test]
    fn signup_access_defaults_to_all() {
        let site: Site = serde_json::from_value(json!({ "products": [] })).unwrap();
        assert_eq!(site.members_signup_access, SignupAccess::All);
        assert!(site.is_signup_allowed());
    }

    #[test]
    fn signin_disabled_only_when_memberships_off() {
        assert!(single_tier_site("all").is_signin_allowed());
        assert!(single_tier_site("invite").is_signin_allowed());
        assert!(!single_tier_site("none").is_signin_allowed());
        assert!(!single_tier_site("invite").is_signup_allowed());
    }

    #[test]
    fn unknown_signup_access_does_not_reject_site() {
        let site: Site = serde_json::from_value(json!({
            "members_signup_access": "paid",
            "products": []
        }))
        .unwrap();
        assert_eq!(site.members_signup_access, SignupAccess::Other);
        assert!(!site.is_invite_only());
        assert!(!site.is_signup_allowed());
        assert!(site.is_signin_allowed());
    }

    #[test]
    fn unknown_product_type_is_neither_free_nor_paid() {
        let site: Site = serde_json::from_value(json!({
            "products": [
                { "id": "product_donation", "type": "donation" },
                { "id": "product_gold", "type": "paid" },
                { "id": "product_free", "type": "free" }
            ]
        }))
        .unwrap();
        assert!(!site.has_multiple_products());
        assert_eq!(site.free_product().unwrap().id, ProductId::new("product_free"));
        assert_eq!(site.paid_products().count(), 1);
    }

    #[test]
    fn multiple_tier_site_has_multiple_products() {
        assert!(has_multiple_products(&multiple_tier_site()));
    }

    #[test]
    fn single_tier_site_does_not_have_multiple_products() {
        assert!(!has_multiple_products(&single_tier_site("all")));
    }

    #[test]
    fn duplicate_paid_product_counts_once() {
        let site: Site = serde_json::from_value(json!({
            "products": [
                { "id": "product_gold", "type": "paid" },
                { "id": "product_gold", "type": "paid" }
            ]
        }))
        .unwrap();
        assert!(!site.has_multiple_products());
    }

    #[test]
    fn free_product_for_site() {
        let site = single_tier_site("all");
        let product = free_product(&site).unwrap();
        assert_eq!(product.product_type, ProductType::Free);
        assert_eq!(product.id, ProductId::new("product_free"));
    }

    #[test]
    fn paid_only_site_has_no_free_product() {
        let site: Site = serde_json::from_value(json!({
            "members_signup_access": "invite",
            "products": [{ "id": "product_gold", "type": "paid" }]
        }))
        .unwrap();
        assert!(free_product(&site).is_none());
    }

    #[test]
    fn paid_products_skip_free_tier() {
        let site = multiple_tier_site();
        let ids: Vec<&str> = site.paid_products().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["product_bronze", "product_silver"]);
    }

    #[test]
    fn product_lookup_by_price_id() {
        let site = single_tier_site("all");
        let product = site.product_for_price_id(&PriceId::new("price_gold_yearly")).unwrap();
        assert_eq!(product.id, ProductId::new("product_gold"));
        assert!(site.product_for_price_id(&PriceId::new("price_unknown")).is_none());
    }
}
