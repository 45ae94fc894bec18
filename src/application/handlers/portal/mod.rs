//! Portal state handlers.

mod resolve_portal_state;

pub use resolve_portal_state::{
    OfferState, PortalState, ResolvePortalStateHandler, ResolvePortalStateQuery, SubscriptionState,
};
