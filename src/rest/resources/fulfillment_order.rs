//! Fulfillment order binding.
//!
//! A fulfillment order is the part of an order assigned to one location or
//! fulfillment service. Shopify creates and mutates them; this module reads
//! them and asks Shopify to move them between locations.
//!
//! # Operations
//!
//! - [`FulfillmentOrderService::get_fulfillment_orders`] -
//!   `GET {order prefix}/{order_id}/fulfillment_orders.json`
//! - [`FulfillmentOrderService::move_fulfillment_order`] -
//!   `POST {fulfillment order prefix}/{id}/move.json`
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_fulfillment_orders::rest::resources::{
//!     FulfillmentOrderListOptions, FulfillmentOrderService,
//! };
//!
//! let client = RestClient::new(&session, Some(&config))?;
//! let service = FulfillmentOrderService::new(&client);
//!
//! let options = FulfillmentOrderListOptions {
//!     status: Some("open".to_string()),
//!     ..Default::default()
//! };
//! let orders = service.get_fulfillment_orders(450789469, Some(options)).await?;
//!
//! let moved = service.move_fulfillment_order(orders[0].id, 905684977).await?;
//! if moved.is_partial_move() {
//!     println!("Some items stayed behind");
//! }
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::instrument;

use crate::clients::rest::{RestError, RestTransport};
use crate::rest::path::PathScope;
use crate::rest::query::serialize_to_query;

/// Documented values of [`FulfillmentOrder::status`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentOrderStatus {
    /// Ready to be fulfilled.
    Open,
    /// Being fulfilled.
    InProgress,
    /// Cancelled.
    Cancelled,
    /// Some line items could not be fulfilled.
    Incomplete,
    /// Fully fulfilled, or moved to another location.
    Closed,
    /// Waiting for its `fulfill_at` date.
    Scheduled,
    /// On hold.
    OnHold,
}

/// Documented values of [`FulfillmentOrder::request_status`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentOrderRequestStatus {
    /// No fulfillment request has been submitted.
    Unsubmitted,
    /// A fulfillment request has been submitted.
    Submitted,
    /// The fulfillment request was accepted.
    Accepted,
    /// The fulfillment request was rejected.
    Rejected,
    /// A cancellation has been requested.
    CancellationRequested,
    /// The cancellation was accepted.
    CancellationAccepted,
    /// The cancellation was rejected.
    CancellationRejected,
    /// The fulfillment request is closed.
    Closed,
}

/// A line item in a fulfillment order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub struct FulfillmentOrderLineItem {
    /// The unique identifier of the fulfillment order line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<u64>,

    /// The ID of the fulfillment order holding this line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_order_id: Option<u64>,

    /// The ID of the order line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item_id: Option<u64>,

    /// The ID of the inventory item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<u64>,

    /// The total quantity assigned to this fulfillment order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// The quantity still to be fulfilled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillable_quantity: Option<i64>,

    /// The ID of the product variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,
}

/// Where a fulfillment order ships to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FulfillmentOrderDestination {
    /// The unique identifier of the destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Recipient first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Recipient last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Recipient company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// First street address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// Second street address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Province, state or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    /// Country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// Recipient phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Recipient email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A fulfillment order in Shopify.
///
/// Every field tolerates being absent or `null` in the response and falls
/// back to its zero value (`0`, `""`, empty list, `None`). `status` and
/// `request_status` are kept as the raw strings Shopify sent; use
/// [`known_status`](Self::known_status) and
/// [`known_request_status`](Self::known_request_status) for typed views.
///
/// Ids are unsigned. A negative id in the response is a decode error for the
/// whole payload rather than a zero value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FulfillmentOrder {
    /// The unique identifier of the fulfillment order.
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,

    /// The ID of the shop.
    #[serde(deserialize_with = "null_as_default")]
    pub shop_id: u64,

    /// The ID of the order this fulfillment order belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub order_id: u64,

    /// The ID of the location expected to fulfill it.
    #[serde(deserialize_with = "null_as_default")]
    pub assigned_location_id: u64,

    /// Line items, in the order Shopify returned them.
    #[serde(deserialize_with = "null_as_default")]
    pub line_items: Vec<FulfillmentOrderLineItem>,

    /// Lifecycle status, e.g. `"open"` or `"closed"`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,

    /// Handle of the fulfillment service, if one is assigned.
    #[serde(deserialize_with = "null_as_default")]
    pub fulfillment_service_handle: String,

    /// Status of the request to the fulfillment service.
    #[serde(deserialize_with = "null_as_default")]
    pub request_status: String,

    /// Actions the merchant can currently take, e.g. `"move"`.
    #[serde(deserialize_with = "null_as_default")]
    pub supported_actions: Vec<String>,

    /// Shipping destination, when the fulfillment order ships to an address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<FulfillmentOrderDestination>,

    /// When the fulfillment order becomes ready to fulfill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfill_at: Option<DateTime<Utc>>,

    /// The latest time it should be fulfilled by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfill_by: Option<DateTime<Utc>>,

    /// When the fulfillment order was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the fulfillment order was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// The GraphQL global ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl FulfillmentOrder {
    /// Returns `status` as a known value, or `None` if empty or unrecognized.
    #[must_use]
    pub fn known_status(&self) -> Option<FulfillmentOrderStatus> {
        parse_known(&self.status)
    }

    /// Returns `request_status` as a known value, or `None` if empty or unrecognized.
    #[must_use]
    pub fn known_request_status(&self) -> Option<FulfillmentOrderRequestStatus> {
        parse_known(&self.request_status)
    }

    /// Returns `true` if Shopify lists `action` in `supported_actions`.
    #[must_use]
    pub fn supports(&self, action: &str) -> bool {
        self.supported_actions.iter().any(|a| a == action)
    }
}

fn parse_known<'a, T: Deserialize<'a>>(raw: &'a str) -> Option<T> {
    let deserializer: StrDeserializer<'a, ValueError> = raw.into_deserializer();
    T::deserialize(deserializer).ok()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// List envelope: `{"fulfillment_orders": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FulfillmentOrderResource {
    /// A missing key is a decode error; `null` decodes to an empty list.
    #[serde(deserialize_with = "null_as_default")]
    pub fulfillment_orders: Vec<FulfillmentOrder>,
}

/// Move request body: `{"fulfillment_order": {"new_location_id": ...}}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveLocationRequest {
    /// The move target, nested under the `fulfillment_order` key.
    pub fulfillment_order: FulfillmentOrderNewLocation,
}

/// The destination location of a move.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FulfillmentOrderNewLocation {
    /// The ID of the location to move the fulfillment order to.
    pub new_location_id: u64,
}

impl MoveLocationRequest {
    /// Creates a request moving a fulfillment order to `new_location_id`.
    #[must_use]
    pub const fn new(new_location_id: u64) -> Self {
        Self {
            fulfillment_order: FulfillmentOrderNewLocation { new_location_id },
        }
    }
}

/// The outcome of a move.
///
/// Shopify closes the original fulfillment order and splits its line items
/// between `moved_fulfillment_order` (now at the new location) and
/// `remaining_fulfillment_order` (items that could not move). Any of the
/// three may be `None` when Shopify sends `null` or omits it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MoveFulfillmentOrderResource {
    /// The fulfillment order as it was before the move.
    pub original_fulfillment_order: Option<FulfillmentOrder>,
    /// The fulfillment order now assigned to the new location.
    pub moved_fulfillment_order: Option<FulfillmentOrder>,
    /// Line items left at the original location.
    pub remaining_fulfillment_order: Option<FulfillmentOrder>,
}

impl MoveFulfillmentOrderResource {
    /// Returns `true` if some line items stayed at the original location.
    #[must_use]
    pub fn is_partial_move(&self) -> bool {
        self.remaining_fulfillment_order
            .as_ref()
            .is_some_and(|remaining| !remaining.line_items.is_empty())
    }
}

/// Query options for [`FulfillmentOrderService::get_fulfillment_orders`].
///
/// Unset fields are not sent. `extra` is forwarded verbatim and wins over a
/// typed field with the same key; nothing is validated locally.
///
/// # Example
///
/// ```rust
/// use shopify_fulfillment_orders::rest::resources::FulfillmentOrderListOptions;
///
/// let options = FulfillmentOrderListOptions {
///     limit: Some(50),
///     ..Default::default()
/// }
/// .with_param("fulfillment_service_handle", "manual");
///
/// assert_eq!(options.extra["fulfillment_service_handle"], "manual");
/// ```
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct FulfillmentOrderListOptions {
    /// Comma-separated list of fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Only return fulfillment orders with this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Include financial summaries for each fulfillment order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_financial_summaries: Option<bool>,

    /// Include order reference fields for each fulfillment order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_order_reference_fields: Option<bool>,

    /// Additional query parameters passed through unchanged.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl FulfillmentOrderListOptions {
    /// Adds a passthrough query parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Fulfillment order operations over a borrowed [`RestTransport`].
///
/// The service holds no state besides the borrowed client and the
/// [`PathScope`] its paths are resolved under, so it is cheap to create per
/// call site. Every operation makes exactly one request and returns the
/// client's error unchanged.
#[derive(Debug)]
pub struct FulfillmentOrderService<'a, C> {
    client: &'a C,
    scope: PathScope,
}

impl<'a, C: RestTransport> FulfillmentOrderService<'a, C> {
    /// Creates a service using the top-level `orders` and
    /// `fulfillment_orders` prefixes.
    #[must_use]
    pub fn new(client: &'a C) -> Self {
        Self::with_scope(client, PathScope::default())
    }

    /// Creates a service that resolves paths under `scope`.
    #[must_use]
    pub const fn with_scope(client: &'a C, scope: PathScope) -> Self {
        Self { client, scope }
    }

    /// Returns the scope paths are resolved under.
    #[must_use]
    pub const fn scope(&self) -> &PathScope {
        &self.scope
    }

    /// Lists the fulfillment orders of an order, in the order Shopify returns them.
    ///
    /// # Errors
    ///
    /// Returns the client's [`RestError`] unchanged, including a
    /// [`RestError::Decode`] when the body has no `fulfillment_orders` key.
    #[instrument(skip(self, options))]
    pub async fn get_fulfillment_orders(
        &self,
        order_id: u64,
        options: Option<FulfillmentOrderListOptions>,
    ) -> Result<Vec<FulfillmentOrder>, RestError> {
        let path = format!(
            "{}/{order_id}/fulfillment_orders.json",
            self.scope.order_prefix()
        );
        let query = options
            .as_ref()
            .map(serialize_to_query)
            .transpose()?
            .filter(|query| !query.is_empty());

        let resource: FulfillmentOrderResource = self.client.get_json(&path, query).await?;

        tracing::debug!(
            count = resource.fulfillment_orders.len(),
            "Fetched fulfillment orders"
        );
        Ok(resource.fulfillment_orders)
    }

    /// Moves a fulfillment order to another location.
    ///
    /// A move that leaves some line items behind still succeeds; inspect
    /// [`MoveFulfillmentOrderResource::remaining_fulfillment_order`].
    /// Moves are not idempotent, so a failed call should not be blindly repeated.
    ///
    /// # Errors
    ///
    /// Returns the client's [`RestError`] unchanged. Shopify reports a
    /// rejected move (for example a closed fulfillment order) as an HTTP
    /// error whose detail is available through
    /// [`HttpResponseError::field_errors`](crate::clients::HttpResponseError::field_errors).
    #[instrument(skip(self))]
    pub async fn move_fulfillment_order(
        &self,
        fulfillment_order_id: u64,
        new_location_id: u64,
    ) -> Result<MoveFulfillmentOrderResource, RestError> {
        let path = format!(
            "{}/{fulfillment_order_id}/move.json",
            self.scope.fulfillment_order_prefix()
        );
        let body = MoveLocationRequest::new(new_location_id);

        let moved: MoveFulfillmentOrderResource = self.client.post_json(&path, &body).await?;

        tracing::debug!(
            moved_id = moved.moved_fulfillment_order.as_ref().map(|fo| fo.id),
            partial = moved.is_partial_move(),
            "Moved fulfillment order"
        );
        Ok(moved)
    }
}
