//! # Shopify Fulfillment Orders
//!
//! Bindings for the fulfillment order endpoints of the Shopify Admin REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Validated newtypes for shop domains and host URLs
//! - A [`Session`] carrying the shop and its access token
//! - An async HTTP client that sends each request exactly once
//! - A REST client implementing the [`RestTransport`] contract
//! - [`FulfillmentOrderService`] for listing an order's fulfillment orders
//!   and moving a fulfillment order to another location
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_fulfillment_orders::{ApiVersion, Session, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::latest())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//!
//! let session = Session::new(ShopDomain::new("my-store").unwrap(), "shpat_access_token");
//! assert_eq!(session.shop.as_ref(), "my-store.myshopify.com");
//! assert_eq!(config.api_version(), &ApiVersion::latest());
//! ```
//!
//! ## Listing and Moving Fulfillment Orders
//!
//! ```rust,ignore
//! use shopify_fulfillment_orders::{
//!     FulfillmentOrderListOptions, FulfillmentOrderService, RestClient, Session, ShopDomain,
//! };
//!
//! let session = Session::new(ShopDomain::new("my-store")?, "shpat_access_token");
//! let client = RestClient::new(&session, None)?;
//! let service = FulfillmentOrderService::new(&client);
//!
//! let options = FulfillmentOrderListOptions {
//!     status: Some("open".to_string()),
//!     ..Default::default()
//! };
//! let orders = service.get_fulfillment_orders(450789469, Some(options)).await?;
//!
//! for fo in &orders {
//!     if fo.supports("move") {
//!         let moved = service.move_fulfillment_order(fo.id, 905684977).await?;
//!         println!("moved: {:?}", moved.moved_fulfillment_order.map(|m| m.id));
//!     }
//! }
//! ```
//!
//! ## Errors
//!
//! Service operations return [`RestError`]. Failures from Shopify arrive as
//! [`HttpError::Response`] wrapped in [`RestError::Http`], with the status
//! code available through [`RestError::status`] and remote detail through
//! [`HttpResponseError::field_errors`]. Nothing is retried.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and spans; install a subscriber to see
//! them. Requests are logged at `debug`, deprecation notices at `warn`.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Borrowed clients**: Services borrow a transport, so tests can swap in a double
//! - **Thread-safe**: Clients, sessions and errors are `Send + Sync`

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod session;

pub use config::{ApiVersion, HostUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder};
pub use error::ConfigError;
pub use session::Session;

pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError,
    InvalidHttpRequestError, RestClient, RestError, RestTransport,
};

pub use rest::resources::{
    FulfillmentOrder, FulfillmentOrderDestination, FulfillmentOrderLineItem,
    FulfillmentOrderListOptions, FulfillmentOrderRequestStatus, FulfillmentOrderService,
    FulfillmentOrderStatus, MoveFulfillmentOrderResource, MoveLocationRequest,
};
