//! HTTP client types for Shopify API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: HTTP methods used by the REST bindings
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestTransport`]: The typed contract resource services call through
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_fulfillment_orders::{Session, ShopDomain};
//! use shopify_fulfillment_orders::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let session = Session::new(ShopDomain::new("my-store").unwrap(), "access-token");
//! let client = HttpClient::new("/admin/api/2025-10", &session, None)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "orders/450789469/fulfillment_orders.json")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Failures
//!
//! Every request is sent once. Non-2xx responses become
//! [`HttpError::Response`] with the remote error detail; callers decide
//! whether and when to try again.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::{RestClient, RestError, RestTransport};
