//! Domain layer containing the membership and pricing rules.
//!
//! Every query here is a pure function of its inputs. Missing or malformed
//! data degrades to `false`, `None` or an empty string instead of an error.
//!
//! # Module Organization
//!
//! - `foundation` - Shared identifiers and validation errors
//! - `currency` - Currency symbols, comparison and formatting
//! - `membership` - Member standing, active subscription, price normalization
//! - `site` - Product queries and page query resolution
//! - `offer` - Promotional offer eligibility

pub mod currency;
pub mod foundation;
pub mod membership;
pub mod offer;
pub mod site;
