//! Currency utilities.
//!
//! Symbol lookup, case-insensitive comparison and display formatting for
//! ISO 4217 currency codes. Codes arrive in whatever case the billing
//! backend used, so every operation here is case-insensitive.

mod symbols;

pub use symbols::{currency_symbol, format_amount, is_same_currency};
