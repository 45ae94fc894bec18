//! ResolvePortalStateHandler - Query handler that derives everything the
//! portal needs to render for one member on one site.

use serde::Serialize;

use crate::domain::foundation::{PriceId, ProductId};
use crate::domain::membership::{
    active_subscription, is_complimentary_member, is_paid_member, member_active_price,
    member_active_product, member_name, ActiveSubscription, Member, NormalizedPrice,
    SubscriptionStatus,
};
use crate::domain::offer::Offer;
use crate::domain::site::{
    free_product, has_multiple_products, is_invite_only_site, price_id_from_page_query, Site,
};

/// Inputs for a portal state snapshot.
#[derive(Debug, Clone, Default)]
pub struct ResolvePortalStateQuery {
    /// `None` for a logged-out visitor.
    pub member: Option<Member>,
    pub site: Site,
    pub offer: Option<Offer>,
    pub page_query: Option<String>,
}

/// Owned, serializable form of [`ActiveSubscription`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubscriptionState {
    Missing,
    Implicit,
    Active {
        id: Option<String>,
        status: SubscriptionStatus,
        canceling: bool,
    },
}

impl From<ActiveSubscription<'_>> for SubscriptionState {
    fn from(value: ActiveSubscription<'_>) -> Self {
        match value {
            ActiveSubscription::Missing => SubscriptionState::Missing,
            ActiveSubscription::Implicit => SubscriptionState::Implicit,
            ActiveSubscription::Found(sub) => SubscriptionState::Active {
                id: sub.id.clone(),
                status: sub.status,
                canceling: sub.is_canceling(),
            },
        }
    }
}

/// Offer eligibility as shown on an offer page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferState {
    pub id: Option<String>,
    pub is_active: bool,
    pub off_amount: Option<String>,
}

/// Every derived value for one member/site/offer/page-query combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortalState {
    pub logged_in: bool,
    pub member_name: String,
    pub is_paid_member: bool,
    pub is_complimentary_member: bool,
    pub subscription: SubscriptionState,
    pub active_price: Option<NormalizedPrice>,
    pub active_product_id: Option<ProductId>,
    pub is_invite_only: bool,
    pub is_signup_allowed: bool,
    pub is_signin_allowed: bool,
    pub has_multiple_products: bool,
    pub free_product_id: Option<ProductId>,
    pub page_price_id: Option<PriceId>,
    pub offer: Option<OfferState>,
}

/// Handler for resolving portal state.
///
/// Stateless: every call is a pure projection of the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolvePortalStateHandler;

impl ResolvePortalStateHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: &ResolvePortalStateQuery) -> PortalState {
        let member = query.member.as_ref();
        let site = &query.site;

        let state = PortalState {
            logged_in: member.is_some(),
            member_name: member_name(member),
            is_paid_member: is_paid_member(member),
            is_complimentary_member: is_complimentary_member(member),
            subscription: active_subscription(member).into(),
            active_price: member_active_price(member),
            active_product_id: member_active_product(site, member)
                .map(|product| product.id.clone()),
            is_invite_only: is_invite_only_site(site),
            is_signup_allowed: site.is_signup_allowed(),
            is_signin_allowed: site.is_signin_allowed(),
            has_multiple_products: has_multiple_products(site),
            free_product_id: free_product(site).map(|product| product.id.clone()),
            page_price_id: query
                .page_query
                .as_deref()
                .and_then(|q| price_id_from_page_query(site, q)),
            offer: query.offer.as_ref().map(|offer| OfferState {
                id: offer.id.clone(),
                is_active: offer.is_active(),
                off_amount: offer.off_amount(),
            }),
        };

        tracing::debug!(
            logged_in = state.logged_in,
            paid = state.is_paid_member,
            page_price_id = ?state.page_price_id,
            "Resolved portal state"
        );

        state
    }
}
