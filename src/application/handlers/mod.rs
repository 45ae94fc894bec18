//! Request handlers grouped by feature.

pub mod portal;

pub use portal::{
    OfferState, PortalState, ResolvePortalStateHandler, ResolvePortalStateQuery, SubscriptionState,
};
