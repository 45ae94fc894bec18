//! Offer domain module.
//!
//! Promotional offers and whether they can currently be redeemed.

mod discount;

pub use discount::{is_active_offer, offer_off_amount, Offer, OfferCadence, OfferStatus, OfferTier, OfferType};
