//! REST API client for the Shopify Admin API.
//!
//! - [`RestClient`]: `get()`/`post()` over [`HttpClient`](crate::clients::HttpClient)
//! - [`RestTransport`]: The typed JSON contract resource services depend on
//! - [`RestError`]: Error type for REST API operations
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/orders/1/fulfillment_orders` -> `orders/1/fulfillment_orders.json`
//! - Trailing `.json` is stripped and re-added, so either form works
//!
//! # Deprecation Notice
//!
//! The Shopify Admin REST API is deprecated in favor of GraphQL. The client
//! logs a warning when constructed. See
//! <https://www.shopify.com/ca/partners/blog/all-in-on-graphql>.

mod client;
mod errors;
mod transport;

pub use client::RestClient;
pub use errors::RestError;
pub use transport::RestTransport;
