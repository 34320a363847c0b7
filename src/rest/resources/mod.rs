//! REST resource bindings.
//!
//! Each binding is a small service over a borrowed
//! [`RestTransport`](crate::clients::rest::RestTransport) plus the typed
//! records its endpoints exchange.

mod fulfillment_order;

pub use fulfillment_order::{
    FulfillmentOrder, FulfillmentOrderDestination, FulfillmentOrderLineItem,
    FulfillmentOrderListOptions, FulfillmentOrderNewLocation, FulfillmentOrderRequestStatus,
    FulfillmentOrderResource, FulfillmentOrderService, FulfillmentOrderStatus,
    MoveFulfillmentOrderResource, MoveLocationRequest,
};
