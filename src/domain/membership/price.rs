//! Display-ready price derived from a subscription's raw price.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::currency::{currency_symbol, format_amount};
use crate::domain::foundation::PriceId;

use super::Subscription;

/// Keys the normalizer writes itself. Pass-through values under these keys
/// are dropped so the override is the only value serialized.
const OVERRIDDEN_KEYS: [&str; 4] = ["stripe_price_id", "price", "name", "currency_symbol"];

/// A price remapped for display.
///
/// Carries every raw field, with these overrides:
/// - `id` is the raw `price_id`, `stripe_price_id` the raw `id`
/// - `price` is `amount / 100` in major units
/// - `name` is the raw `nickname`
/// - `currency` is lower-cased and `currency_symbol` looked up from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPrice {
    pub id: Option<PriceId>,
    pub stripe_price_id: String,
    pub price_id: Option<String>,
    pub amount: i64,
    pub price: f64,
    pub nickname: Option<String>,
    pub name: Option<String>,
    pub currency: String,
    pub currency_symbol: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NormalizedPrice {
    /// Formats the price with its symbol, e.g. `$5` or `€4.99`.
    pub fn display_price(&self) -> String {
        format_amount(&self.currency, self.amount)
    }
}

/// Normalizes the price of a subscription for display.
///
/// Returns `None` when there is no subscription, no price, or the price lacks
/// an `id`, `amount` or `currency`. A missing price is expected for free and
/// complimentary members, so it is not treated as an error.
pub fn normalize_price(subscription: Option<&Subscription>) -> Option<NormalizedPrice> {
    let price = subscription?.price.as_ref()?;

    let (Some(stripe_price_id), Some(amount), Some(currency)) =
        (&price.id, price.amount, &price.currency)
    else {
        tracing::debug!(
            price_id = ?price.price_id,
            "Subscription price is missing id, amount or currency"
        );
        return None;
    };

    let mut extra = price.extra.clone();
    for key in OVERRIDDEN_KEYS {
        extra.remove(key);
    }

    Some(NormalizedPrice {
        id: price.price_id.as_deref().map(PriceId::new),
        stripe_price_id: stripe_price_id.clone(),
        price_id: price.price_id.clone(),
        amount,
        price: amount as f64 / 100.0,
        nickname: price.nickname.clone(),
        name: price.nickname.clone(),
        currency: currency.to_lowercase(),
        currency_symbol: currency_symbol(currency),
        extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn subscription_with_price(price: Value) -> Subscription {
        serde_json::from_value(json!({ "status": "active", "price": price })).unwrap()
    }

    fn paid_price() -> Value {
        json!({
            "id": "stripe_price_yearly",
            "price_id": "6086ead8070218227791fe4f",
            "nickname": "Yearly",
            "amount": 5000,
            "interval": "year",
            "type": "recurring",
            "currency": "USD"
        })
    }

    #[test]
    fn remaps_fields_for_display() {
        let sub = subscription_with_price(paid_price());
        let price = normalize_price(Some(&sub)).unwrap();

        assert_eq!(price.stripe_price_id, "stripe_price_yearly");
        assert_eq!(price.id, Some(PriceId::new("6086ead8070218227791fe4f")));
        assert_eq!(price.price, 50.0);
        assert_eq!(price.name.as_deref(), Some("Yearly"));
        assert_eq!(price.currency, "usd");
        assert_eq!(price.currency_symbol, "$");
    }

    #[test]
    fn keeps_pass_through_fields() {
        let sub = subscription_with_price(paid_price());
        let price = normalize_price(Some(&sub)).unwrap();

        assert_eq!(price.amount, 5000);
        assert_eq!(price.nickname.as_deref(), Some("Yearly"));
        assert_eq!(price.price_id.as_deref(), Some("6086ead8070218227791fe4f"));
        assert_eq!(price.extra.get("interval"), Some(&json!("year")));
        assert_eq!(price.extra.get("type"), Some(&json!("recurring")));
    }

    #[test]
    fn serialized_shape_matches_raw_plus_overrides() {
        let sub = subscription_with_price(paid_price());
        let value = serde_json::to_value(normalize_price(Some(&sub)).unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "6086ead8070218227791fe4f",
                "stripe_price_id": "stripe_price_yearly",
                "price_id": "6086ead8070218227791fe4f",
                "nickname": "Yearly",
                "name": "Yearly",
                "amount": 5000,
                "price": 50.0,
                "interval": "year",
                "type": "recurring",
                "currency": "usd",
                "currency_symbol": "$"
            })
        );
    }

    #[test]
    fn overridden_keys_replace_pass_through_values() {
        let mut raw = paid_price();
        raw["name"] = json!("stale name");
        raw["currency_symbol"] = json!("?");
        let sub = subscription_with_price(raw);
        let value = serde_json::to_value(normalize_price(Some(&sub)).unwrap()).unwrap();

        assert_eq!(value["name"], json!("Yearly"));
        assert_eq!(value["currency_symbol"], json!("$"));
    }

    #[test]
    fn price_is_not_rounded() {
        let mut raw = paid_price();
        raw["amount"] = json!(499);
        let sub = subscription_with_price(raw);
        let price = normalize_price(Some(&sub)).unwrap();

        assert_eq!(price.price, 4.99);
        assert_eq!(price.display_price(), "$4.99");
    }

    #[test]
    fn unknown_currency_uses_code_as_symbol() {
        let mut raw = paid_price();
        raw["currency"] = json!("sek");
        let sub = subscription_with_price(raw);
        let price = normalize_price(Some(&sub)).unwrap();

        assert_eq!(price.currency, "sek");
        assert_eq!(price.currency_symbol, "SEK");
    }

    #[test]
    fn returns_none_for_empty_subscription() {
        let sub: Subscription = serde_json::from_value(json!({})).unwrap();
        assert!(normalize_price(Some(&sub)).is_none());
    }

    #[test]
    fn returns_none_without_subscription() {
        assert!(normalize_price(None).is_none());
    }

    #[test]
    fn returns_none_for_price_without_amount() {
        let sub = subscription_with_price(json!({ "id": "price_1", "currency": "usd" }));
        assert!(normalize_price(Some(&sub)).is_none());
    }

    #[test]
    fn returns_none_for_price_without_id() {
        let sub = subscription_with_price(json!({ "amount": 500, "currency": "usd" }));
        assert!(normalize_price(Some(&sub)).is_none());
    }
}
