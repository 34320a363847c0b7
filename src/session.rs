//! The shop and access token used to authorize requests.
//!
//! Obtaining the token is outside this crate; a [`Session`] only carries it
//! to the HTTP layer.

use crate::config::ShopDomain;
use std::fmt;

/// A shop plus the access token used for its Admin API calls.
///
/// The access token is masked in `Debug` output.
///
/// # Example
///
/// ```rust
/// use shopify_fulfillment_orders::{Session, ShopDomain};
///
/// let session = Session::new(ShopDomain::new("my-store").unwrap(), "shpat_123");
///
/// assert_eq!(session.access_token, "shpat_123");
/// assert!(!format!("{session:?}").contains("shpat_123"));
/// ```
#[derive(Clone)]
pub struct Session {
    /// The shop this session is for.
    pub shop: ShopDomain,

    /// The access token sent as `X-Shopify-Access-Token`.
    pub access_token: String,
}

impl Session {
    /// Creates a session for `shop` authorized by `access_token`.
    #[must_use]
    pub fn new(shop: ShopDomain, access_token: impl Into<String>) -> Self {
        Self {
            shop,
            access_token: access_token.into(),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("shop", &self.shop)
            .field("access_token", &"*****")
            .finish()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
