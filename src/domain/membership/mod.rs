//! Membership domain module.
//!
//! Classifies a member's paid standing, selects the subscription backing it
//! and normalizes that subscription's price for display.
//!
//! # Module Structure
//!
//! - `member` - Member record and status queries
//! - `status` - MemberStatus and SubscriptionStatus values
//! - `subscription` - Subscription and raw Price records
//! - `price` - NormalizedPrice and the price normalizer

mod member;
mod price;
mod status;
mod subscription;

pub use member::{
    active_subscription, is_complimentary_member, is_paid_member, member_active_price,
    member_active_product, member_name, ActiveSubscription, Member,
};
pub use price::{normalize_price, NormalizedPrice};
pub use status::{MemberStatus, SubscriptionStatus};
pub use subscription::{Price, Subscription};
