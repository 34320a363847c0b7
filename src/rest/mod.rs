//! REST resource layer for the Shopify Admin API.
//!
//! - [`path`]: Prefixes that place fulfillment order endpoints at the top
//!   level or beneath a parent resource
//! - [`query`]: Conversion of typed option structs into query parameters
//! - [`resources`]: Typed resource records and the services that fetch them
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_fulfillment_orders::rest::resources::FulfillmentOrderService;
//!
//! let service = FulfillmentOrderService::new(&client);
//! for fo in service.get_fulfillment_orders(450789469, None).await? {
//!     println!("{} at location {}: {}", fo.id, fo.assigned_location_id, fo.status);
//! }
//! ```

pub mod path;
pub mod query;
pub mod resources;

pub use path::{fulfillment_order_path_prefix, order_path_prefix, PathScope};
pub use query::serialize_to_query;
