//! Application layer - Queries and Handlers.
//!
//! This layer composes domain queries into the views callers consume.

pub mod handlers;

pub use handlers::{
    OfferState, PortalState, ResolvePortalStateHandler, ResolvePortalStateQuery, SubscriptionState,
};
